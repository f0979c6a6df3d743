// src/config.rs
// Environment-based configuration - single source of truth for all env vars

use std::path::PathBuf;
use tracing::{debug, info};

/// Default port for the static music file server.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct JukeboxConfig {
    /// Directory holding the playable audio files (MUSIC_DIR).
    pub music_dir: PathBuf,
    /// Base URL remote devices pull streams from (MUSIC_BASE_URL).
    /// Normalized to end with exactly one trailing slash; `None` when unset,
    /// in which case tools return local paths only.
    pub stream_base_url: Option<String>,
    /// Spreadsheet workbook searched by the search_workbook tool
    /// (WORKBOOK_PATH).
    pub workbook_path: PathBuf,
    /// Port for the static file server (MUSIC_HTTP_PORT).
    pub http_port: u16,
}

impl JukeboxConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let music_dir = read_path("MUSIC_DIR", "music");
        let workbook_path = read_path("WORKBOOK_PATH", "records.xlsx");
        let stream_base_url = std::env::var("MUSIC_BASE_URL")
            .ok()
            .and_then(|raw| normalize_base_url(&raw));
        let http_port = std::env::var("MUSIC_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let config = Self {
            music_dir,
            stream_base_url,
            workbook_path,
            http_port,
        };
        config.log_status();
        config
    }

    fn log_status(&self) {
        debug!(music_dir = %self.music_dir.display(), "music directory configured");
        match &self.stream_base_url {
            Some(base) => info!("streaming enabled via {}", base),
            None => info!("MUSIC_BASE_URL not set - tools will return local paths only"),
        }
    }
}

fn read_path(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Normalize a base URL to end with exactly one trailing slash.
/// Blank input means "no streaming configured" and yields `None`.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("{}/", trimmed.trim_end_matches('/')))
}
