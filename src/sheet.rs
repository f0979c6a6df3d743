// src/sheet.rs
// Workbook search - exact substring scan over every sheet of a spreadsheet

use crate::error::{JukeboxError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One matching row. At most one hit is recorded per row: scanning stops at
/// the first matching cell.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SheetHit {
    pub sheet: String,
    /// 0-based position among the sheet's non-empty rows.
    pub row_index: usize,
    /// 0-based original column position of the matching cell.
    pub column_index: usize,
    pub matched_cell: String,
    /// Every non-empty cell of the row, keyed by column index.
    pub row_data: BTreeMap<String, String>,
}

/// Scan every sheet of the workbook at `path` for rows containing `keyword`.
///
/// No header row is assumed; row 0 is data. Fully-empty rows are dropped
/// before indexing, so `row_index` counts surviving rows only. Matching is
/// case-sensitive exact substring over the stringified cell value.
///
/// Zero hits is a successful, empty result. A missing or unreadable workbook
/// is an error.
pub fn search_workbook(path: &Path, keyword: &str) -> Result<Vec<SheetHit>> {
    if !path.exists() {
        return Err(JukeboxError::NotFound(format!(
            "workbook not found: {}",
            path.display()
        )));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    let mut hits = Vec::new();

    for sheet in &sheet_names {
        let range = workbook.worksheet_range(sheet)?;
        let mut row_index = 0usize;

        for row in range.rows() {
            if row.iter().all(cell_is_empty) {
                continue;
            }

            if let Some(hit) = scan_row(sheet, row_index, row, keyword) {
                hits.push(hit);
            }
            row_index += 1;
        }
    }

    Ok(hits)
}

fn scan_row(sheet: &str, row_index: usize, row: &[Data], keyword: &str) -> Option<SheetHit> {
    let mut matched: Option<(usize, String)> = None;

    for (column_index, cell) in row.iter().enumerate() {
        if cell_is_empty(cell) {
            continue;
        }
        let text = cell.to_string();
        if text.contains(keyword) {
            matched = Some((column_index, text));
            break;
        }
    }

    let (column_index, matched_cell) = matched?;

    let row_data = row
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell_is_empty(cell))
        .map(|(i, cell)| (i.to_string(), cell.to_string()))
        .collect();

    Some(SheetHit {
        sheet: sheet.to_string(),
        row_index,
        column_index,
        matched_cell,
        row_data,
    })
}

fn cell_is_empty(cell: &Data) -> bool {
    matches!(cell, Data::Empty)
}
