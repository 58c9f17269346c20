use repscan_core::error::RepscanError;
use repscan_core::outcome::ParseOutcome;

pub fn format_outcome(outcome: &ParseOutcome) -> Result<String, RepscanError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
