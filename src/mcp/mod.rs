// src/mcp/mod.rs
// MCP Server implementation

pub mod responses;
pub mod tools;

use crate::config::JukeboxConfig;
use crate::session::PlayerSession;
use responses::{CurrentOutput, PlaybackOutput, SheetSearchOutput, SongListOutput};
use rmcp::{
    ServerHandler,
    handler::server::{
        router::tool::ToolRouter,
        wrapper::{Json, Parameters},
    },
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// MCP Server state.
///
/// The playback session is the only mutable state and sits behind a single
/// mutex; operations are cheap and rare, so one lock around the whole session
/// is enough to serialize concurrent tool calls.
#[derive(Clone)]
pub struct JukeboxServer {
    pub config: Arc<JukeboxConfig>,
    pub session: Arc<Mutex<PlayerSession>>,
    tool_router: ToolRouter<Self>,
}

impl JukeboxServer {
    pub fn new(config: JukeboxConfig) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(Mutex::new(PlayerSession::new())),
            tool_router: Self::tool_router(),
        }
    }
}

// Request types for tools with parameters
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlaySongRequest {
    #[schemars(description = "Full song name or a partial keyword spoken by the user")]
    pub song_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchWorkbookRequest {
    #[schemars(description = "Exact substring to look for in every sheet")]
    pub keyword: String,
}

#[tool_router]
impl JukeboxServer {
    #[tool(
        description = "List all playable songs with display name, local path and stream_url (when a base URL is configured)."
    )]
    async fn list_songs(&self) -> Json<SongListOutput> {
        Json(tools::player::list_songs(self).await)
    }

    #[tool(
        description = "Pick a random song and make it current. Play the returned stream_url/path; do not just read the result aloud."
    )]
    async fn play_random(&self) -> Json<PlaybackOutput> {
        Json(tools::player::play_random(self).await)
    }

    #[tool(
        description = "Play the song matching a name or partial keyword (e.g. a title fragment the user spoke). Play the returned stream_url/path."
    )]
    async fn play_song(
        &self,
        Parameters(req): Parameters<PlaySongRequest>,
    ) -> Json<PlaybackOutput> {
        Json(tools::player::play_song(self, req.song_name).await)
    }

    #[tool(description = "Start or resume playback of the current song.")]
    async fn play(&self) -> Json<PlaybackOutput> {
        Json(tools::player::play(self).await)
    }

    #[tool(description = "Pause playback. The assistant should stop the currently playing audio.")]
    async fn pause(&self) -> Json<PlaybackOutput> {
        Json(tools::player::pause(self).await)
    }

    #[tool(description = "Skip to the next song, wrapping at the end of the playlist.")]
    async fn next_song(&self) -> Json<PlaybackOutput> {
        Json(tools::player::next_song(self).await)
    }

    #[tool(description = "Go back to the previous song, wrapping at the start of the playlist.")]
    async fn previous_song(&self) -> Json<PlaybackOutput> {
        Json(tools::player::previous_song(self).await)
    }

    #[tool(description = "Get the current song and its position without changing playback state.")]
    async fn get_current(&self) -> Json<CurrentOutput> {
        Json(tools::player::get_current(self).await)
    }

    #[tool(
        description = "Strict search of the configured spreadsheet workbook: exact substring, every sheet, no column or header guessing. One hit per matching row."
    )]
    async fn search_workbook(
        &self,
        Parameters(req): Parameters<SearchWorkbookRequest>,
    ) -> Json<SheetSearchOutput> {
        Json(tools::workbook::search_workbook(self, req.keyword).await)
    }
}

#[tool_handler]
impl ServerHandler for JukeboxServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "jukebox".into(),
                title: Some("Jukebox - music playback and workbook lookup tools".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Jukebox exposes music playback tools over a local directory plus a strict \
                 spreadsheet search. Playback responses carry a stream_url/path the caller \
                 must hand to an actual player."
                    .into(),
            ),
        }
    }
}
