// src/session.rs
// Playback session - playlist, cursor and play/pause intent shared across
// otherwise stateless tool calls

use crate::catalog;
use crate::error::SessionError;
use crate::stream;
use rand::Rng;
use std::path::{Path, PathBuf};

/// The track an operation landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: PathBuf,
    /// 1-based position within the playlist.
    pub position: usize,
    pub total: usize,
}

/// Process-wide mutable playback state.
///
/// The playlist is `None` until the first operation touches it, then populated
/// exactly once from the catalog and reused for the process lifetime. Files
/// added or removed on disk afterwards are not picked up; this staleness is a
/// deliberate tradeoff, not a bug.
///
/// Invariant: whenever the playlist is non-empty, `cursor` is a valid index
/// into it.
#[derive(Debug, Default)]
pub struct PlayerSession {
    playlist: Option<Vec<PathBuf>>,
    cursor: usize,
    playing: bool,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Populate the playlist from the catalog if this is the first touch,
    /// then return it. One-shot: an empty directory still counts as populated.
    pub fn tracks(&mut self, music_dir: &Path) -> &[PathBuf] {
        if self.playlist.is_none() {
            self.playlist = Some(catalog::list_tracks(music_dir));
        }
        self.playlist.as_deref().unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.playlist.as_ref().map(Vec::len).unwrap_or(0)
    }

    fn selection(&self) -> Result<Selection, SessionError> {
        let playlist = self.playlist.as_deref().unwrap_or(&[]);
        let path = playlist
            .get(self.cursor)
            .cloned()
            .ok_or(SessionError::EmptyPlaylist)?;
        Ok(Selection {
            path,
            position: self.cursor + 1,
            total: playlist.len(),
        })
    }

    /// Jump to a uniformly random track and mark the session playing.
    pub fn play_random(&mut self, music_dir: &Path) -> Result<Selection, SessionError> {
        self.tracks(music_dir);
        let len = self.len();
        if len == 0 {
            return Err(SessionError::EmptyPlaylist);
        }
        self.cursor = rand::rng().random_range(0..len);
        self.playing = true;
        self.selection()
    }

    /// Jump to the first track whose display name contains `keyword`
    /// (case-insensitive) and mark the session playing. A miss leaves the
    /// cursor and play flag untouched.
    pub fn play_keyword(
        &mut self,
        music_dir: &Path,
        keyword: &str,
    ) -> Result<Selection, SessionError> {
        self.tracks(music_dir);
        if self.len() == 0 {
            return Err(SessionError::EmptyPlaylist);
        }
        let key = keyword.trim().to_lowercase();
        if key.is_empty() {
            return Err(SessionError::KeywordMissing);
        }

        let playlist = self.playlist.as_deref().unwrap_or(&[]);
        let found = playlist
            .iter()
            .position(|path| stream::display_name(path).to_lowercase().contains(&key));

        match found {
            Some(index) => {
                self.cursor = index;
                self.playing = true;
                self.selection()
            }
            None => Err(SessionError::NoMatch(keyword.trim().to_string())),
        }
    }

    /// Start or resume playback at the current cursor.
    pub fn resume(&mut self, music_dir: &Path) -> Result<Selection, SessionError> {
        self.tracks(music_dir);
        if self.len() == 0 {
            return Err(SessionError::EmptyPlaylist);
        }
        self.playing = true;
        self.selection()
    }

    /// Clear the play intent. Always succeeds, even with an empty playlist.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance the cursor, wrapping past the end.
    pub fn next(&mut self, music_dir: &Path) -> Result<Selection, SessionError> {
        self.tracks(music_dir);
        let len = self.len();
        if len == 0 {
            return Err(SessionError::EmptyPlaylist);
        }
        self.cursor = (self.cursor + 1) % len;
        self.selection()
    }

    /// Step the cursor back, wrapping before the start.
    pub fn previous(&mut self, music_dir: &Path) -> Result<Selection, SessionError> {
        self.tracks(music_dir);
        let len = self.len();
        if len == 0 {
            return Err(SessionError::EmptyPlaylist);
        }
        self.cursor = (self.cursor + len - 1) % len;
        self.selection()
    }

    /// The track at the cursor, or `None` when the playlist is empty.
    /// Does not change the cursor or play flag.
    pub fn current(&mut self, music_dir: &Path) -> Option<Selection> {
        self.tracks(music_dir);
        self.selection().ok()
    }
}
