// src/mcp/tools/player.rs
// Playback tools: list, select, advance, pause

use crate::mcp::JukeboxServer;
use crate::mcp::responses::{CurrentOutput, PlaybackOutput, SongListOutput};
use crate::session::Selection;
use crate::stream::{self, TrackItem};

fn resolve(server: &JukeboxServer, selection: &Selection) -> TrackItem {
    stream::resolve(&selection.path, server.config.stream_base_url.as_deref())
}

/// List every playable track with its display name and location.
pub async fn list_songs(server: &JukeboxServer) -> SongListOutput {
    let mut session = server.session.lock().await;
    let base = server.config.stream_base_url.as_deref();
    let songs: Vec<TrackItem> = session
        .tracks(&server.config.music_dir)
        .iter()
        .map(|path| stream::resolve(path, base))
        .collect();

    SongListOutput {
        success: true,
        count: songs.len(),
        songs,
    }
}

/// Pick a uniformly random track and signal playback.
pub async fn play_random(server: &JukeboxServer) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    match session.play_random(&server.config.music_dir) {
        Ok(sel) => PlaybackOutput::play(resolve(server, &sel)),
        Err(e) => PlaybackOutput::failure(e),
    }
}

/// Select the first track whose name contains the given keyword.
pub async fn play_song(server: &JukeboxServer, song_name: String) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    match session.play_keyword(&server.config.music_dir, &song_name) {
        Ok(sel) => PlaybackOutput::play(resolve(server, &sel)),
        Err(e) => PlaybackOutput::failure(e),
    }
}

/// Start or resume playback at the current cursor.
pub async fn play(server: &JukeboxServer) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    match session.resume(&server.config.music_dir) {
        Ok(sel) => PlaybackOutput::play(resolve(server, &sel)),
        Err(e) => PlaybackOutput::failure(e),
    }
}

/// Clear the play intent.
pub async fn pause(server: &JukeboxServer) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    session.pause();
    PlaybackOutput::pause()
}

/// Advance to the next track, wrapping at the end of the playlist.
pub async fn next_song(server: &JukeboxServer) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    match session.next(&server.config.music_dir) {
        Ok(sel) => PlaybackOutput::play_announced(resolve(server, &sel), "Next up"),
        Err(e) => PlaybackOutput::failure(e),
    }
}

/// Step back to the previous track, wrapping before the start.
pub async fn previous_song(server: &JukeboxServer) -> PlaybackOutput {
    let mut session = server.session.lock().await;
    match session.previous(&server.config.music_dir) {
        Ok(sel) => PlaybackOutput::play_announced(resolve(server, &sel), "Back to"),
        Err(e) => PlaybackOutput::failure(e),
    }
}

/// Report the track at the cursor without changing playback state.
pub async fn get_current(server: &JukeboxServer) -> CurrentOutput {
    let mut session = server.session.lock().await;
    match session.current(&server.config.music_dir) {
        Some(sel) => {
            let track = resolve(server, &sel);
            CurrentOutput::track(track, sel.position, sel.total)
        }
        None => CurrentOutput::none(),
    }
}
