use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::error::RepscanError;
use crate::lexicon::LanguagePatterns;
use crate::model::{DetectedLanguage, Exercise};
use crate::outcome::ParseWarning;

use super::numbers::{extract_measurements, find_rest, parse_count};
use super::preprocess::{prepare_lines, split_embedded};
use super::{circuit, is_fitness_term, is_structural_header, name, Extraction};

/// Rest given with a sprint is only trusted up to this many seconds.
const MAX_SPRINT_REST_SECONDS: u32 = 90;

/// "6x200m", "4 x 400 meters"
static SPRINT_COUNT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*x\s*(\d{2,4})\s*(?:meters|metres|meter|m)\b").unwrap()
});

/// "200m x 6"
static SPRINT_DISTANCE_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{2,4})\s*(?:meters|metres|meter|m)\s*x\s*(\d{1,2})\b").unwrap()
});

static GENERIC_SPRINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:sprints?|sprintar|intervals?|intervaller|intervaler|intervalli)$").unwrap()
});

/// "Knäböj 3 set x 12 reps"
static SWEDISH_SET_X_REPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*set\s*x\s*(\d+)\s*(?:repetitioner|reps|rep)\b").unwrap()
});

/// Extract the exercises of one narrative day block.
///
/// Units that fail to parse become "Exercise <n>" placeholders and are
/// reported as warnings; a standalone rest line attaches to the previous
/// exercise.
pub fn extract_exercises(content: &str, patterns: &LanguagePatterns) -> Extraction {
    let lines = prepare_lines(content, patterns);
    let mut extraction = Extraction::default();

    for line in &lines {
        if is_structural_header(line)
            || patterns.intensity_word.is_match(line)
            || patterns.circuit_header.is_match(line)
            || is_bare_day_marker(line, patterns)
        {
            continue;
        }

        for unit in split_embedded(line) {
            if let Some(rest) = standalone_rest(&unit, patterns) {
                if let Some(last) = extraction.exercises.last_mut() {
                    if last.rest_interval.is_empty() {
                        last.rest_interval = rest;
                    }
                }
                continue;
            }

            match parse_unit(&unit, patterns) {
                Ok(Some(exercise)) => extraction.exercises.push(exercise),
                Ok(None) => {}
                Err(e) => {
                    warn!(unit = %unit, error = %e, "keeping unparseable unit as placeholder");
                    let position = extraction.exercises.len() + 1;
                    extraction.exercises.push(Exercise::placeholder(
                        format!("Exercise {position}"),
                        format!("Could not parse: {unit}"),
                    ));
                    extraction.warnings.push(ParseWarning {
                        line_text: unit.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    circuit::apply_circuits(&lines, &mut extraction.exercises, patterns);
    finalize(&mut extraction.exercises);
    extraction
}

/// Parse one candidate unit into an exercise.
///
/// A unit counts when it yields numbers, or when it names a known
/// movement. `Ok(None)` means the unit is prose.
pub fn parse_unit(
    unit: &str,
    patterns: &LanguagePatterns,
) -> Result<Option<Exercise>, RepscanError> {
    let text = unit.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Some(sprint) = parse_sprint(text, patterns)? {
        return Ok(Some(sprint));
    }
    if patterns.lexicon.language == DetectedLanguage::Swedish {
        if let Some(exercise) = parse_swedish_set_x_reps(text, patterns)? {
            return Ok(Some(exercise));
        }
    }

    let name = name::extract_name(text, patterns);
    let measurements = extract_measurements(text, patterns)?;
    let named_movement = name.is_some() && is_fitness_term(text);
    if !measurements.has_signal() && !named_movement {
        return Ok(None);
    }

    let mut exercise = Exercise::new(name.unwrap_or_default());
    measurements.apply_to(&mut exercise);
    exercise.per_side = patterns.per_side.is_match(text);
    Ok(Some(exercise))
}

fn parse_sprint(text: &str, patterns: &LanguagePatterns) -> Result<Option<Exercise>, RepscanError> {
    let (count, meters, start) = if let Some(caps) = SPRINT_COUNT_FIRST.captures(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        (parse_count(&caps[1], text)?, parse_count(&caps[2], text)?, start)
    } else if let Some(caps) = SPRINT_DISTANCE_FIRST.captures(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        (parse_count(&caps[2], text)?, parse_count(&caps[1], text)?, start)
    } else {
        return Ok(None);
    };

    // Only text ahead of the interval can name it.
    let name = name::clean_name(&text[..start], patterns)
        .filter(|n| !GENERIC_SPRINT_NAME.is_match(n))
        .unwrap_or_else(|| patterns.lexicon.sprint_name.to_string());

    let mut exercise = Exercise::new(name);
    exercise.sets = 1;
    exercise.distance = format!("{meters}m");
    exercise.notes = format!("{count} x {meters}m intervals");
    if let Some(rest) = find_rest(text, patterns, None)? {
        if rest_seconds(&rest.interval) <= MAX_SPRINT_REST_SECONDS {
            exercise.rest_interval = rest.interval;
        }
    }
    exercise.per_side = patterns.per_side.is_match(text);
    exercise.normalize_fields();
    Ok(Some(exercise))
}

fn parse_swedish_set_x_reps(
    text: &str,
    patterns: &LanguagePatterns,
) -> Result<Option<Exercise>, RepscanError> {
    let Some(caps) = SWEDISH_SET_X_REPS.captures(text) else {
        return Ok(None);
    };
    let start = caps.get(0).map_or(0, |m| m.start());
    let name = name::clean_name(&text[..start], patterns)
        .or_else(|| name::extract_name(text, patterns))
        .unwrap_or_default();

    let mut exercise = Exercise::new(name);
    exercise.sets = parse_count(&caps[1], text)?;
    exercise.reps = parse_count(&caps[2], text)?;
    if let Some(rest) = find_rest(text, patterns, caps.get(0).map(|m| m.end()))? {
        exercise.rest_interval = rest.interval;
    }
    exercise.per_side = patterns.per_side.is_match(text);
    exercise.normalize_fields();
    Ok(Some(exercise))
}

/// "Day 2" or "Monday" with nothing after it.
fn is_bare_day_marker(line: &str, patterns: &LanguagePatterns) -> bool {
    [&patterns.day_marker, &patterns.weekday].into_iter().any(|re| {
        re.captures(line)
            .is_some_and(|c| c.get(2).map_or(true, |m| m.as_str().trim().is_empty()))
    })
}

/// "Rest 60s" or "90 sek vila" on a line of its own.
pub(super) fn standalone_rest(unit: &str, patterns: &LanguagePatterns) -> Option<String> {
    let rest = find_rest(unit, patterns, None).ok().flatten()?;
    let remainder = format!("{}{}", &unit[..rest.span.start], &unit[rest.span.end..]);
    let only_rest = !remainder
        .chars()
        .any(|c| c.is_alphanumeric());
    only_rest.then_some(rest.interval)
}

/// "MM:SS" back to seconds.
fn rest_seconds(interval: &str) -> u32 {
    let mut parts = interval.splitn(2, ':');
    let minutes: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);
    let seconds: u32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    minutes * 60 + seconds
}

/// Fill in missing names and re-check field exclusivity.
pub(crate) fn finalize(exercises: &mut [Exercise]) {
    for (idx, exercise) in exercises.iter_mut().enumerate() {
        if exercise.name.trim().is_empty() {
            exercise.name = format!("Exercise {}", idx + 1);
        }
        exercise.normalize_fields();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::pattern_set;

    fn en() -> &'static LanguagePatterns {
        pattern_set(DetectedLanguage::English)
    }

    #[test]
    fn test_sprint_intervals() {
        let ex = parse_unit("Sprint 3x200m with 60s rest", en()).unwrap().unwrap();
        assert_eq!(ex.name, "Sprint intervals");
        assert_eq!(ex.sets, 1);
        assert!(!ex.is_reps);
        assert_eq!(ex.distance, "200m");
        assert_eq!(ex.rest_interval, "00:60");
        assert_eq!(ex.notes, "3 x 200m intervals");
    }

    #[test]
    fn test_sprint_without_leading_name() {
        let ex = parse_unit("6 x 400m with 90 sec rest", en()).unwrap().unwrap();
        assert_eq!(ex.name, "Sprint intervals");
        assert_eq!(ex.distance, "400m");
        assert_eq!(ex.rest_interval, "00:90");
        assert_eq!(ex.notes, "6 x 400m intervals");

        let sv = pattern_set(DetectedLanguage::Swedish);
        let ex = parse_unit("6x200m, 60 sek vila", sv).unwrap().unwrap();
        assert_eq!(ex.name, sv.lexicon.sprint_name);
    }

    #[test]
    fn test_sprint_distance_first_keeps_name() {
        let ex = parse_unit("Hill repeats 100m x 8", en()).unwrap().unwrap();
        assert_eq!(ex.name, "Hill repeats");
        assert_eq!(ex.distance, "100m");
        assert_eq!(ex.notes, "8 x 100m intervals");
    }

    #[test]
    fn test_swedish_set_x_reps() {
        let sv = pattern_set(DetectedLanguage::Swedish);
        let ex = parse_unit("Knäböj 3 set x 12 reps", sv).unwrap().unwrap();
        assert_eq!(ex.name, "Knäböj");
        assert_eq!(ex.sets, 3);
        assert_eq!(ex.reps, 12);
        assert!(ex.is_reps);
    }

    #[test]
    fn test_prose_is_not_an_exercise() {
        assert_eq!(parse_unit("Felt great today, slept well", en()).unwrap(), None);
    }

    #[test]
    fn test_named_movement_without_numbers() {
        let ex = parse_unit("Burpees", en()).unwrap().unwrap();
        assert_eq!(ex.name, "Burpees");
        assert!(ex.is_reps);
    }

    #[test]
    fn test_per_side() {
        let ex = parse_unit("Lunges 3x10 per leg", en()).unwrap().unwrap();
        assert!(ex.per_side);
        assert_eq!((ex.sets, ex.reps), (3, 10));
    }

    #[test]
    fn test_block_extraction() {
        let content = "Warm-up:\n10 min jog\nSquats 4x8\nRest 90s\nPush-ups, sit-ups, burpees";
        let extraction = extract_exercises(content, en());
        let names: Vec<&str> = extraction.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Jog", "Squats", "Push-ups", "sit-ups", "burpees"]);
        assert_eq!(extraction.exercises[0].duration, "10:00");
        assert_eq!(extraction.exercises[1].rest_interval, "00:90");
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn test_unparseable_unit_becomes_placeholder() {
        let extraction = extract_exercises("Squats 3x10\nLunges 99999999999 reps", en());
        assert_eq!(extraction.exercises.len(), 2);
        assert_eq!(extraction.exercises[1].name, "Exercise 2");
        assert_eq!(extraction.exercises[1].sets, 1);
        assert_eq!(extraction.warnings.len(), 1);
    }

    #[test]
    fn test_missing_name_gets_position() {
        let extraction = extract_exercises("Squats 3x10\n4x12", en());
        assert_eq!(extraction.exercises[1].name, "Exercise 2");
    }
}
