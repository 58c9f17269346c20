pub mod format;
pub mod language;

pub use format::{classify_format, is_tabular, split_columns};
pub use language::{detect_language, score_languages, LanguageScores};
