// src/error.rs
// Standardized error types for Jukebox

use thiserror::Error;

/// Playback session failures. These are reported back to the assistant as
/// structured `success: false` payloads, never as protocol errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no playable tracks found in the music directory")]
    EmptyPlaylist,

    #[error("a song name or keyword is required")]
    KeywordMissing,

    #[error("no track matching \"{0}\" - call list_songs to see what is available")]
    NoMatch(String),
}

/// Main error type for the Jukebox library
#[derive(Error, Debug)]
pub enum JukeboxError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using JukeboxError
pub type Result<T> = std::result::Result<T, JukeboxError>;

impl From<JukeboxError> for String {
    fn from(err: JukeboxError) -> Self {
        err.to_string()
    }
}
