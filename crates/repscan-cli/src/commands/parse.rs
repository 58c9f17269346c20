use chrono::NaiveDate;
use repscan_core::error::RepscanError;
use repscan_core::extraction::read_input;
use repscan_core::model::DetectedLanguage;
use repscan_core::options::{load_options, validate_options, ParseOptions};
use std::path::PathBuf;
use tracing::debug;

use crate::output;

/// Command-line values that take precedence over the options file.
pub struct Overrides {
    pub today: Option<String>,
    pub language: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    overrides: Overrides,
) -> Result<(), RepscanError> {
    let options = build_options(overrides)?;
    debug!(path = %input_file.display(), "reading input");
    let text = read_input(&input_file)?;
    let outcome = repscan_core::analyze_workout_text(&text, &options);

    let output_str = match output_format {
        "json" => output::json::format_outcome(&outcome)?,
        _ => output::table::format_outcome(&outcome),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&outcome.days)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} day(s) with {} exercise(s), written to {}",
                outcome.days.len(),
                outcome.exercise_count(),
                path.display()
            );
            if outcome.low_confidence {
                eprintln!("  warning: no structure recognized, review [FALLBACK] entries");
            }
            for w in &outcome.warnings {
                eprintln!("  warning: {} ({})", w.reason, w.line_text);
            }
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}

fn build_options(overrides: Overrides) -> Result<ParseOptions, RepscanError> {
    let mut options = match overrides.config {
        Some(ref path) => load_options(path)?,
        None => ParseOptions::default(),
    };

    if let Some(ref date) = overrides.today {
        let today = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            RepscanError::OptionsInvalid(format!("invalid --today '{date}': {e}"))
        })?;
        options.today = Some(today);
    }
    if let Some(ref code) = overrides.language {
        options.language = Some(code.parse::<DetectedLanguage>()?);
    }

    validate_options(&options)?;
    Ok(options)
}
