use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::RepscanError;

/// Placeholder for empty cells between filled ones, so columns stay aligned.
const EMPTY_CELL: &str = "-";

/// Flatten the first worksheet of an xlsx workbook into tab-separated text.
///
/// Empty rows are dropped and trailing empty cells trimmed.
pub fn xlsx_to_text(bytes: &[u8]) -> Result<String, RepscanError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| RepscanError::Extraction(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RepscanError::Extraction("workbook has no worksheets".into()))?
        .map_err(|e| RepscanError::Extraction(format!("failed to read first sheet: {e}")))?;

    let lines: Vec<String> = sheet
        .rows()
        .filter_map(|row| {
            let cells: Vec<Option<String>> = row.iter().map(cell_as_string).collect();
            let last = cells.iter().rposition(Option::is_some)?;
            Some(
                cells[..=last]
                    .iter()
                    .map(|c| c.as_deref().unwrap_or(EMPTY_CELL))
                    .collect::<Vec<_>>()
                    .join("\t"),
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}
