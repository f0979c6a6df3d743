// src/lib.rs
// Jukebox - MCP music playback and workbook lookup tools

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod mcp;
pub mod session;
pub mod sheet;
pub mod stream;
pub mod web;

pub use error::{JukeboxError, Result};
