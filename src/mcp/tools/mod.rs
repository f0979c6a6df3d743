// src/mcp/tools/mod.rs
// MCP tool implementations

pub mod player;
pub mod workbook;
