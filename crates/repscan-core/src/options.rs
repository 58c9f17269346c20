use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RepscanError;
use crate::model::DetectedLanguage;

pub const DEFAULT_FALLBACK_EXERCISE_LIMIT: usize = 2;
const MAX_FALLBACK_EXERCISE_LIMIT: usize = 20;

/// Knobs for a parse run. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Date of the first day. Defaults to the local date at parse time.
    pub today: Option<NaiveDate>,
    /// Skip detection and use this language.
    pub language: Option<DetectedLanguage>,
    /// Most exercises the fallback generator lists per day.
    pub fallback_exercise_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            today: None,
            language: None,
            fallback_exercise_limit: DEFAULT_FALLBACK_EXERCISE_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_language(mut self, language: DetectedLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<ParseOptions, RepscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| RepscanError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string read from `source`.
pub fn parse_options(json: &str, source: &Path) -> Result<ParseOptions, RepscanError> {
    let options: ParseOptions =
        serde_json::from_str(json).map_err(|e| RepscanError::OptionsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<ParseOptions, RepscanError> {
    let options: ParseOptions = serde_json::from_str(json).map_err(RepscanError::Json)?;
    validate_options(&options)?;
    Ok(options)
}

pub fn validate_options(options: &ParseOptions) -> Result<(), RepscanError> {
    if options.fallback_exercise_limit == 0 {
        return Err(RepscanError::OptionsInvalid(
            "fallback_exercise_limit must be at least 1".into(),
        ));
    }
    if options.fallback_exercise_limit > MAX_FALLBACK_EXERCISE_LIMIT {
        return Err(RepscanError::OptionsInvalid(format!(
            "fallback_exercise_limit must be at most {MAX_FALLBACK_EXERCISE_LIMIT}, got {}",
            options.fallback_exercise_limit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_uses_defaults() {
        let options = parse_options_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
        assert_eq!(options.fallback_exercise_limit, 2);
    }

    #[test]
    fn test_full_options() {
        let json = r#"{ "today": "2026-03-02", "language": "sv", "fallback_exercise_limit": 3 }"#;
        let options = parse_options_str(json).unwrap();
        assert_eq!(options.today, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(options.language, Some(DetectedLanguage::Swedish));
        assert_eq!(options.fallback_exercise_limit, 3);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = parse_options_str(r#"{ "fallback_exercise_limit": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(parse_options_str(r#"{ "language": "klingon" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "language": "german" }}"#).unwrap();
        let options = load_options(file.path()).unwrap();
        assert_eq!(options.language, Some(DetectedLanguage::German));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_options(Path::new("/nonexistent/repscan.json")).unwrap_err();
        assert!(matches!(err, RepscanError::OptionsLoad { .. }));
    }
}
