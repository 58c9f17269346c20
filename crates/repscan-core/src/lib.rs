pub mod detect;
pub mod error;
pub mod extract;
pub mod extraction;
pub mod fallback;
pub mod intensity;
pub mod lexicon;
pub mod model;
pub mod options;
pub mod outcome;
pub mod segment;

use chrono::Days;
use tracing::{info, warn};

use lexicon::{all_pattern_sets, pattern_set, LanguagePatterns};
use model::{Exercise, WorkoutDay};
use options::ParseOptions;
use outcome::ParseOutcome;

pub use detect::{classify_format, detect_language};

/// Name given to the stand-in exercise of a day that ended up empty.
pub const SAMPLE_EXERCISE_NAME: &str = "Sample Exercise";

/// Main API entry point: parse OCR'd workout text into dated training days.
///
/// Never fails. Text that cannot be segmented comes back through the
/// fallback generator, so the result always holds at least one day and
/// every day holds at least one exercise.
pub fn parse_workout_text(text: &str, options: &ParseOptions) -> Vec<WorkoutDay> {
    analyze_workout_text(text, options).days
}

/// Like [`parse_workout_text`], but also reports how the days were found.
pub fn analyze_workout_text(text: &str, options: &ParseOptions) -> ParseOutcome {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let language = options
        .language
        .unwrap_or_else(|| detect_language(&text));
    let patterns = pattern_set(language);
    let format = classify_format(&text);

    let primary = if text.trim().is_empty() {
        None
    } else {
        segment::segment(&text, format, patterns)
    };
    let (segmentation, low_confidence) = match primary {
        Some(segmentation) => (segmentation, false),
        None => {
            warn!(%language, %format, "no structure recognized, using fallback");
            (
                fallback::generate(&text, patterns, options.fallback_exercise_limit),
                true,
            )
        }
    };

    let start = options.start_date();
    let mut warnings = Vec::new();
    let mut days: Vec<WorkoutDay> = segmentation
        .days
        .into_iter()
        .enumerate()
        .map(|(idx, draft)| {
            warnings.extend(draft.warnings);
            let date = start
                .checked_add_days(Days::new(idx as u64))
                .unwrap_or(start);
            WorkoutDay::new(
                format!("{date} ({})", draft.label),
                date,
                draft.intensity,
                language,
                draft.exercises,
            )
        })
        .collect();
    ensure_exercises(&mut days);

    info!(
        %language,
        strategy = %segmentation.strategy,
        days = days.len(),
        "parsed workout text"
    );

    ParseOutcome {
        days,
        language,
        format,
        strategy: segmentation.strategy,
        low_confidence,
        warnings,
    }
}

/// Cheap pre-check: does the text look like it contains training days?
///
/// True for tables, day markers or weekdays in any supported language, and
/// set/rep shapes such as "3x10" or "4 sets".
pub fn has_training_days(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    detect::is_tabular(text)
        || all_pattern_sets().iter().any(|p| has_day_marker(text, p))
        || all_pattern_sets()
            .iter()
            .any(|p| extract::numbers::has_set_rep_shape(text, p))
}

fn has_day_marker(text: &str, patterns: &LanguagePatterns) -> bool {
    patterns.day_marker.is_match(text) || patterns.weekday.is_match(text)
}

/// Final pass: names, field exclusivity, and no empty days.
fn ensure_exercises(days: &mut [WorkoutDay]) {
    for day in days.iter_mut() {
        if day.exercises.is_empty() {
            day.exercises.push(Exercise::placeholder(
                SAMPLE_EXERCISE_NAME,
                "No exercises were found for this day.",
            ));
        }
        for (idx, exercise) in day.exercises.iter_mut().enumerate() {
            if exercise.name.trim().is_empty() {
                exercise.name = format!("Exercise {}", idx + 1);
            }
            exercise.normalize_fields();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn opts() -> ParseOptions {
        ParseOptions::default().with_today(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    #[test]
    fn test_has_training_days() {
        assert!(has_training_days("Day 1\nSquats"));
        assert!(has_training_days("Måndag: löpning"));
        assert!(has_training_days("Squats 3x10"));
        assert!(has_training_days("Exercise\tSets\tReps\nSquats\t4\t12"));
        assert!(!has_training_days("Just some notes about the weekend."));
        assert!(!has_training_days("   "));
    }

    #[test]
    fn test_empty_days_get_sample_exercise() {
        let text = "Day 1: Upper\nBench press 3x10\nDay 2: Rest day\nDay 3: Legs\nSquats 4x8";
        let days = parse_workout_text(text, &opts());
        assert_eq!(days.len(), 3);
        assert_eq!(days[1].exercises.len(), 1);
        assert_eq!(days[1].exercises[0].name, SAMPLE_EXERCISE_NAME);
        assert_eq!(days[1].intensity, "Rest");
    }

    #[test]
    fn test_crlf_input() {
        let days = parse_workout_text("Day 1\r\nSquats 3x10\r\nDay 2\r\nLunges 3x8", &opts());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].name, "2026-10-16 (Day 1)");
    }

    #[test]
    fn test_outcome_reports_fallback() {
        let outcome = analyze_workout_text("nothing to see here", &opts());
        assert!(outcome.low_confidence);
        assert!(outcome.strategy.is_fallback());
    }
}
