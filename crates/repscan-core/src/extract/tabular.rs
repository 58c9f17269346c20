use regex::Regex;
use std::sync::LazyLock;

use crate::error::RepscanError;
use crate::lexicon::LanguagePatterns;
use crate::model::Exercise;
use crate::segment::tabular::{header_role, ColumnMap};

use super::numbers::{format_clock, parse_count, parse_distance, parse_duration, AXB};

static LEADING_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// What a reps cell holds.
#[derive(Debug, Clone, PartialEq)]
pub enum CellMeasure {
    SetsReps(u32, u32),
    Distance(String),
    Duration(String),
    Reps(u32),
    Empty,
}

/// Build an exercise from one table row.
///
/// Returns `Ok(None)` for rows without a usable name, such as a repeated
/// header or a spacer row.
pub fn exercise_from_row(
    row: &[&str],
    map: &ColumnMap,
    patterns: &LanguagePatterns,
) -> Result<Option<Exercise>, RepscanError> {
    let line = row.join(" ");

    let name = cell(row, map.exercise);
    if !name.chars().any(char::is_alphabetic) || header_role(name).is_some() {
        return Ok(None);
    }

    let mut exercise = Exercise::new(name);

    let sets_cell = cell(row, map.sets);
    if let Some(caps) = AXB.captures(sets_cell) {
        exercise.sets = parse_count(&caps[1], &line)?;
        exercise.reps = parse_count(&caps[2], &line)?;
    } else if let Some(caps) = LEADING_COUNT.captures(sets_cell) {
        exercise.sets = parse_count(&caps[1], &line)?;
    }

    match parse_measure_cell(cell(row, map.reps), &line)? {
        CellMeasure::SetsReps(sets, reps) => {
            if exercise.sets == 0 {
                exercise.sets = sets;
            }
            exercise.reps = reps;
        }
        CellMeasure::Distance(distance) => exercise.distance = distance,
        CellMeasure::Duration(duration) => exercise.duration = duration,
        CellMeasure::Reps(reps) => exercise.reps = reps,
        CellMeasure::Empty => {}
    }

    let rest_cell = cell(row, map.rest);
    if !rest_cell.is_empty() {
        if let Some(rest) = parse_duration(rest_cell)? {
            exercise.rest_interval = rest;
        } else if let Some(caps) = LEADING_COUNT.captures(rest_cell) {
            // A bare number in a rest column is seconds.
            exercise.rest_interval = format_clock(parse_count(&caps[1], &line)?);
        }
    }

    let notes = cell(row, map.notes);
    if !notes.is_empty() && notes != "-" {
        exercise.append_note(notes);
    }
    let weight = cell(row, map.weight);
    if !weight.is_empty() && weight != "-" {
        exercise.append_note(&format!("Weight: {weight}"));
    }

    exercise.per_side = patterns.per_side.is_match(name) || patterns.per_side.is_match(notes);
    exercise.normalize_fields();
    Ok(Some(exercise))
}

fn cell<'a>(row: &[&'a str], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i).copied())
        .map(str::trim)
        .unwrap_or("")
}

/// Interpret a reps/measure cell: "4x12", "400 m", "45 sec", "1:30", "12".
pub fn parse_measure_cell(cell: &str, line: &str) -> Result<CellMeasure, RepscanError> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" {
        return Ok(CellMeasure::Empty);
    }
    if let Some(caps) = AXB.captures(cell) {
        return Ok(CellMeasure::SetsReps(
            parse_count(&caps[1], line)?,
            parse_count(&caps[2], line)?,
        ));
    }
    if let Some(distance) = parse_distance(cell) {
        return Ok(CellMeasure::Distance(distance));
    }
    if let Some(duration) = parse_duration(cell)? {
        return Ok(CellMeasure::Duration(duration));
    }
    // Ranges like "8-12" keep the lower bound.
    match LEADING_COUNT.captures(cell) {
        Some(caps) => Ok(CellMeasure::Reps(parse_count(&caps[1], line)?)),
        None => Ok(CellMeasure::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::pattern_set;
    use crate::model::DetectedLanguage;

    fn map() -> ColumnMap {
        ColumnMap {
            exercise: Some(0),
            sets: Some(1),
            reps: Some(2),
            rest: Some(3),
            weight: Some(4),
            ..ColumnMap::default()
        }
    }

    fn en() -> &'static LanguagePatterns {
        pattern_set(DetectedLanguage::English)
    }

    #[test]
    fn test_measure_cells() {
        assert_eq!(parse_measure_cell("4x12", "").unwrap(), CellMeasure::SetsReps(4, 12));
        assert_eq!(
            parse_measure_cell("400 m", "").unwrap(),
            CellMeasure::Distance("400m".into())
        );
        assert_eq!(
            parse_measure_cell("45 sec", "").unwrap(),
            CellMeasure::Duration("00:45".into())
        );
        assert_eq!(parse_measure_cell("8-12", "").unwrap(), CellMeasure::Reps(8));
        assert_eq!(parse_measure_cell("-", "").unwrap(), CellMeasure::Empty);
    }

    #[test]
    fn test_full_row() {
        let row = ["Deadlift", "5", "5", "2 min", "100 kg"];
        let ex = exercise_from_row(&row, &map(), en()).unwrap().unwrap();
        assert_eq!(ex.name, "Deadlift");
        assert_eq!((ex.sets, ex.reps), (5, 5));
        assert_eq!(ex.rest_interval, "02:00");
        assert_eq!(ex.notes, "Weight: 100 kg");
        assert!(ex.is_reps);
    }

    #[test]
    fn test_bare_rest_is_seconds() {
        let row = ["Squats", "3", "10", "90"];
        let ex = exercise_from_row(&row, &map(), en()).unwrap().unwrap();
        assert_eq!(ex.rest_interval, "01:30");
    }

    #[test]
    fn test_repeated_header_row_is_skipped() {
        let row = ["Exercise", "Sets", "Reps"];
        assert_eq!(exercise_from_row(&row, &map(), en()).unwrap(), None);
    }

    #[test]
    fn test_distance_row_is_not_reps() {
        let row = ["Run", "1", "5 km"];
        let ex = exercise_from_row(&row, &map(), en()).unwrap().unwrap();
        assert!(!ex.is_reps);
        assert_eq!(ex.distance, "5km");
    }
}
