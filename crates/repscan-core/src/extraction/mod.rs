pub mod xlsx;

use std::path::Path;

use crate::error::RepscanError;

/// Read a plan from disk as OCR text.
///
/// `.xlsx` workbooks are flattened to tab-separated rows; anything else is
/// read as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String, RepscanError> {
    let is_xlsx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));

    if is_xlsx {
        let bytes = std::fs::read(path)?;
        xlsx::xlsx_to_text(&bytes)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
