//! Structured output types for MCP tools.
//!
//! Every tool returns a wrapper struct with a `success` flag; with `Json<T>`
//! return types, rmcp auto-infers `outputSchema` for each tool. Failures are
//! expressed as `success: false` payloads rather than protocol errors - the
//! caller is a non-technical assistant runtime and must always receive a
//! well-formed response.

use crate::sheet::SheetHit;
use crate::stream::TrackItem;
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt::Display;

// ============================================================================
// Playback
// ============================================================================

#[derive(Debug, Serialize, JsonSchema)]
pub struct PlaybackOutput {
    pub success: bool,
    /// What the assistant should do: "play", "pause" or "none".
    pub action: String,
    /// True when the assistant must start actual playback with the returned
    /// stream_url/path instead of just reading the reply aloud.
    pub should_play: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackItem>,
    /// Short spoken reply for the assistant's TTS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_for_tts: Option<String>,
    pub message: String,
}

impl PlaybackOutput {
    /// A track was selected and the assistant should start playing it.
    pub fn play(track: TrackItem) -> Self {
        let reply = format!("Now playing: {}", track.name);
        Self {
            success: true,
            action: "play".to_string(),
            should_play: true,
            message: format!(
                "Play the stream_url (or local path) below; do not just read it aloud. {}",
                reply
            ),
            reply_for_tts: Some(reply),
            track: Some(track),
        }
    }

    /// Like `play`, but with directional phrasing for next/previous.
    pub fn play_announced(track: TrackItem, announcement: &str) -> Self {
        let reply = format!("{}: {}", announcement, track.name);
        Self {
            reply_for_tts: Some(reply.clone()),
            message: format!("{}. Play it via the stream_url or local path.", reply),
            ..Self::play(track)
        }
    }

    /// Playback pause acknowledgement; carries no track payload.
    pub fn pause() -> Self {
        Self {
            success: true,
            action: "pause".to_string(),
            should_play: false,
            track: None,
            reply_for_tts: Some("Paused".to_string()),
            message: "Pause requested; stop the currently playing audio.".to_string(),
        }
    }

    /// A structured failure. Session state is unchanged.
    pub fn failure(err: impl Display) -> Self {
        Self {
            success: false,
            action: "none".to_string(),
            should_play: false,
            track: None,
            reply_for_tts: None,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SongListOutput {
    pub success: bool,
    pub count: usize,
    pub songs: Vec<TrackItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CurrentOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackItem>,
    /// 1-based position within the playlist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CurrentOutput {
    pub fn track(track: TrackItem, position: usize, total: usize) -> Self {
        Self {
            success: true,
            track: Some(track),
            position: Some(position),
            total: Some(total),
            message: None,
        }
    }

    pub fn none() -> Self {
        Self {
            success: false,
            track: None,
            position: None,
            total: None,
            message: Some("no track selected - the playlist is empty".to_string()),
        }
    }
}

// ============================================================================
// Workbook search
// ============================================================================

#[derive(Debug, Serialize, JsonSchema)]
pub struct SheetSearchOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<SheetHit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SheetSearchOutput {
    pub fn hits(hits: Vec<SheetHit>) -> Self {
        Self {
            success: true,
            count: Some(hits.len()),
            hits: Some(hits),
            message: None,
            error: None,
        }
    }

    /// Zero matches across every sheet. Still a success, not an error.
    pub fn no_matches(keyword: &str) -> Self {
        Self {
            success: true,
            count: None,
            hits: None,
            message: Some(format!("no cell containing \"{}\" was found", keyword)),
            error: None,
        }
    }

    pub fn failure(err: impl Display) -> Self {
        Self {
            success: false,
            count: None,
            hits: None,
            message: None,
            error: Some(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream;
    use std::path::Path;

    #[test]
    fn test_play_payload_shape() {
        let track = stream::resolve(Path::new("/music/晴天.mp3"), Some("http://h/"));
        let out = PlaybackOutput::play(track);
        let value = serde_json::to_value(&out).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["action"], "play");
        assert_eq!(value["should_play"], true);
        assert_eq!(value["track"]["name"], "晴天");
        assert!(
            value["reply_for_tts"]
                .as_str()
                .unwrap()
                .contains("晴天")
        );
    }

    #[test]
    fn test_failure_payload_has_no_track_keys() {
        let out = PlaybackOutput::failure("no playable tracks");
        let value = serde_json::to_value(&out).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["should_play"], false);
        assert!(value.get("track").is_none());
        assert!(value.get("reply_for_tts").is_none());
    }

    #[test]
    fn test_announced_payload_uses_direction() {
        let track = stream::resolve(Path::new("/music/song.mp3"), None);
        let out = PlaybackOutput::play_announced(track, "Next up");
        assert_eq!(out.reply_for_tts.as_deref(), Some("Next up: song"));
        assert!(out.should_play);
    }

    #[test]
    fn test_no_matches_is_success_with_message() {
        let out = SheetSearchOutput::no_matches("zzz");
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["message"].as_str().unwrap().contains("zzz"));
        assert!(value.get("hits").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_current_none_explains_why() {
        let out = CurrentOutput::none();
        assert!(!out.success);
        assert!(out.message.unwrap().contains("empty"));
    }
}
