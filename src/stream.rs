// src/stream.rs
// Stream resolver - maps a track path to a display name and playback location

use schemars::JsonSchema;
use serde::Serialize;
use std::path::Path;

/// Where a track can be played from.
///
/// An explicit sum type rather than an optional `stream_url` field: a track is
/// either local-only (no base URL configured) or reachable over HTTP, decided
/// at construction time. Serialized untagged, so callers see either
/// `{path}` or `{path, stream_url}`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TrackLocation {
    Local {
        path: String,
    },
    Streamed {
        path: String,
        /// Externally reachable URL for remote devices (e.g. an ESP32 pulling
        /// the stream over the LAN).
        stream_url: String,
    },
}

/// A single playable track as returned to the assistant.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TrackItem {
    /// Display name: filename without directory or extension.
    pub name: String,
    #[serde(flatten)]
    pub location: TrackLocation,
}

impl TrackItem {
    pub fn stream_url(&self) -> Option<&str> {
        match &self.location {
            TrackLocation::Local { .. } => None,
            TrackLocation::Streamed { stream_url, .. } => Some(stream_url),
        }
    }
}

/// Display name for a track: filename without directory or extension.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Resolve a track path against an optional base URL.
///
/// `base_url` must already be normalized to end with exactly one trailing
/// slash (see `config::normalize_base_url`). The filename is percent-encoded;
/// non-ASCII bytes come out as UTF-8 percent escapes. Pure function, no I/O.
pub fn resolve(path: &Path, base_url: Option<&str>) -> TrackItem {
    let name = display_name(path);
    let path_str = path.to_string_lossy().into_owned();

    let location = match base_url {
        Some(base) => {
            let filename = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            TrackLocation::Streamed {
                path: path_str,
                stream_url: format!("{}{}", base, urlencoding::encode(&filename)),
            }
        }
        None => TrackLocation::Local { path: path_str },
    };

    TrackItem { name, location }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name_strips_dir_and_extension() {
        assert_eq!(display_name(Path::new("/music/七里香.mp3")), "七里香");
        assert_eq!(display_name(Path::new("plain.mp3")), "plain");
    }

    #[test]
    fn test_resolve_without_base_url_is_local_only() {
        let item = resolve(Path::new("/music/song.mp3"), None);
        assert_eq!(item.name, "song");
        assert!(item.stream_url().is_none());

        // The serialized shape must have no stream_url key at all.
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["path"], "/music/song.mp3");
        assert!(value.get("stream_url").is_none());
    }

    #[test]
    fn test_resolve_percent_encodes_non_ascii_filename() {
        let path = PathBuf::from("/music/七里香.mp3");
        let item = resolve(&path, Some("http://h:8080/"));
        assert_eq!(
            item.stream_url().unwrap(),
            "http://h:8080/%E4%B8%83%E9%87%8C%E9%A6%99.mp3"
        );
    }

    #[test]
    fn test_resolve_encodes_reserved_characters() {
        let item = resolve(Path::new("/music/a b&c.mp3"), Some("http://h/"));
        assert_eq!(item.stream_url().unwrap(), "http://h/a%20b%26c.mp3");
    }

    #[test]
    fn test_flattened_serialization() {
        let item = resolve(Path::new("/music/song.mp3"), Some("http://h/"));
        let value = serde_json::to_value(&item).unwrap();
        // name, path and stream_url all sit at the same level
        assert_eq!(value["name"], "song");
        assert_eq!(value["path"], "/music/song.mp3");
        assert_eq!(value["stream_url"], "http://h/song.mp3");
    }
}
