// src/mcp/tools/workbook.rs
// Workbook search tool - strict substring scan, no column guessing

use crate::mcp::JukeboxServer;
use crate::mcp::responses::SheetSearchOutput;
use crate::sheet;

/// Search every sheet of the configured workbook for `keyword`.
/// I/O failures surface as `success: false` with the error text; zero hits
/// is a successful result with an explanatory message.
pub async fn search_workbook(server: &JukeboxServer, keyword: String) -> SheetSearchOutput {
    match sheet::search_workbook(&server.config.workbook_path, &keyword) {
        Ok(hits) if hits.is_empty() => SheetSearchOutput::no_matches(&keyword),
        Ok(hits) => SheetSearchOutput::hits(hits),
        Err(e) => SheetSearchOutput::failure(e),
    }
}
