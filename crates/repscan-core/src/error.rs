use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepscanError {
    #[error("spreadsheet extraction failed: {0}")]
    Extraction(String),

    #[error("invalid number '{text}' in '{line}'")]
    InvalidNumber { text: String, line: String },

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    OptionsInvalid(String),

    #[error("unknown language '{0}'. Supported: en, es, fr, de, sv, no, da, fi")]
    UnknownLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
