use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::detect::format::{looks_like_name, split_columns};
use crate::extract::numbers::{parse_distance, parse_duration, AXB};
use crate::extract::tabular::exercise_from_row;
use crate::intensity::classify_by_count;
use crate::lexicon::{all_pattern_sets, LanguagePatterns};
use crate::model::Exercise;
use crate::outcome::ParseWarning;

use super::DayDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Day,
    Exercise,
    Sets,
    Reps,
    Weight,
    Rest,
    Notes,
}

/// Header words per role, checked in this order.
const ROLE_KEYWORDS: &[(ColumnRole, &[&str])] = &[
    (
        ColumnRole::Day,
        &["day", "dag", "día", "dia", "jour", "tag", "päivä", "weekday", "veckodag"],
    ),
    (
        ColumnRole::Exercise,
        &[
            "exercise", "exercises", "movement", "övning", "övningar", "ejercicio", "exercice",
            "übung", "øvelse", "liike", "harjoitus",
        ],
    ),
    (
        ColumnRole::Sets,
        &["sets", "set", "serier", "series", "séries", "sätze", "sett", "sæt", "sarjat"],
    ),
    (
        ColumnRole::Reps,
        &[
            "reps", "rep", "repetitions", "repetitioner", "repeticiones", "répétitions",
            "wiederholungen", "wdh", "gjentakelser", "gentagelser", "toistot", "distance",
            "duration", "time", "tid", "sträcka",
        ],
    ),
    (
        ColumnRole::Weight,
        &["weight", "load", "vikt", "peso", "poids", "gewicht", "vekt", "vægt", "paino", "kg"],
    ),
    (
        ColumnRole::Rest,
        &["rest", "vila", "descanso", "repos", "pause", "pausa", "hvile", "lepo", "ruhe"],
    ),
    (
        ColumnRole::Notes,
        &["notes", "note", "comments", "anteckningar", "notas", "remarques", "notizen", "huom"],
    ),
];

static KEYWORD_ROLES: LazyLock<HashMap<&'static str, ColumnRole>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for (role, words) in ROLE_KEYWORDS {
        for word in *words {
            m.entry(*word).or_insert(*role);
        }
    }
    m
});

/// Column index per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub day: Option<usize>,
    pub exercise: Option<usize>,
    pub sets: Option<usize>,
    pub reps: Option<usize>,
    pub weight: Option<usize>,
    pub rest: Option<usize>,
    pub notes: Option<usize>,
}

impl ColumnMap {
    fn slot(&mut self, role: ColumnRole) -> &mut Option<usize> {
        match role {
            ColumnRole::Day => &mut self.day,
            ColumnRole::Exercise => &mut self.exercise,
            ColumnRole::Sets => &mut self.sets,
            ColumnRole::Reps => &mut self.reps,
            ColumnRole::Weight => &mut self.weight,
            ColumnRole::Rest => &mut self.rest,
            ColumnRole::Notes => &mut self.notes,
        }
    }

    fn is_assigned(&self, col: usize) -> bool {
        [
            self.day,
            self.exercise,
            self.sets,
            self.reps,
            self.weight,
            self.rest,
            self.notes,
        ]
        .contains(&Some(col))
    }
}

/// Role named by a header cell, if any.
pub fn header_role(cell: &str) -> Option<ColumnRole> {
    let lower = cell.trim().to_lowercase();
    if let Some(role) = KEYWORD_ROLES.get(lower.as_str()) {
        return Some(*role);
    }
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    ROLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| words.iter().any(|w| keywords.contains(w)))
        .map(|(role, _)| *role)
}

/// Number of words in a line that name a workout column.
pub fn header_keyword_hits(line: &str) -> usize {
    line.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| KEYWORD_ROLES.contains_key(w))
        .count()
}

/// Group table rows into days.
///
/// Returns `None` when there are no data rows.
pub fn segment(text: &str, patterns: &LanguagePatterns) -> Option<Vec<DayDraft>> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let header_idx = locate_header(&lines);
    let data_start = header_idx.map_or(0, |i| i + 1);

    let rows: Vec<Vec<&str>> = lines
        .get(data_start..)
        .unwrap_or_default()
        .iter()
        .map(|l| split_columns(l))
        .filter(|r| !r.is_empty())
        .collect();
    if rows.is_empty() {
        return None;
    }
    let width = dominant_width(&rows);

    let mut map = header_idx
        .map(|i| map_header(&header_cells(lines[i], width)))
        .unwrap_or_default();
    if map.exercise.is_none() {
        infer_from_content(&rows, width, &mut map);
    }
    debug!(?map, width, "table columns");

    let mut buckets: Vec<(String, Vec<Exercise>, Vec<ParseWarning>)> = Vec::new();
    for row in &rows {
        let day_cell = map
            .day
            .and_then(|d| row.get(d))
            .map(|c| c.trim())
            .filter(|c| !c.is_empty() && *c != "-");
        let new_bucket = match (day_cell, buckets.last()) {
            (Some(day), Some((current, ..))) => day != current.as_str(),
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if new_bucket {
            buckets.push((day_cell.unwrap_or_default().to_string(), Vec::new(), Vec::new()));
        }
        let Some((_, exercises, warnings)) = buckets.last_mut() else {
            continue;
        };

        match exercise_from_row(row, &map, patterns) {
            Ok(Some(exercise)) => exercises.push(exercise),
            Ok(None) => {}
            Err(e) => {
                warn!(row = %row.join(" | "), error = %e, "keeping unparseable row as placeholder");
                let position = exercises.len() + 1;
                exercises.push(Exercise::placeholder(
                    format!("Exercise {position}"),
                    format!("Could not parse: {}", row.join(" ")),
                ));
                warnings.push(ParseWarning {
                    line_text: row.join("\t"),
                    reason: e.to_string(),
                });
            }
        }
    }

    let days = buckets
        .into_iter()
        .enumerate()
        .map(|(idx, (label, exercises, warnings))| DayDraft {
            label: if label.is_empty() {
                patterns.lexicon.synthetic_day_name(idx + 1)
            } else {
                label
            },
            intensity: classify_by_count(exercises.len(), &patterns.lexicon),
            exercises,
            warnings,
        })
        .collect();
    Some(days)
}

/// The header is the first or second line, whichever names more columns.
fn locate_header(lines: &[&str]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, line) in lines.iter().take(2).enumerate() {
        let hits = header_keyword_hits(line);
        if hits > 0 && best.map_or(true, |(_, b)| hits > b) {
            best = Some((idx, hits));
        }
    }
    best.map(|(idx, _)| idx)
}

fn dominant_width(rows: &[Vec<&str>]) -> usize {
    let mut freq: HashMap<usize, usize> = HashMap::new();
    for row in rows {
        *freq.entry(row.len()).or_default() += 1;
    }
    freq.into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(width, _)| width)
        .unwrap_or(0)
}

/// Header cells, falling back to single-space words when the header was
/// typed without column gaps.
fn header_cells(line: &str, width: usize) -> Vec<&str> {
    let cells = split_columns(line);
    if cells.len() < width {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() == width {
            return words;
        }
    }
    cells
}

fn map_header(cells: &[&str]) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (idx, cell) in cells.iter().enumerate() {
        if let Some(role) = header_role(cell) {
            let slot = map.slot(role);
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
    }
    map
}

/// Guess columns from cell shapes when no header names the exercise.
fn infer_from_content(rows: &[Vec<&str>], width: usize, map: &mut ColumnMap) {
    let column = |col: usize| {
        rows.iter()
            .filter_map(|r| r.get(col).copied())
            .filter(|c| !c.trim().is_empty())
            .collect::<Vec<&str>>()
    };
    let majority = |cells: &[&str], pred: &dyn Fn(&str) -> bool| -> bool {
        !cells.is_empty() && cells.iter().filter(|c| pred(c.trim())).count() * 2 > cells.len()
    };

    for col in 0..width {
        if map.is_assigned(col) {
            continue;
        }
        let cells = column(col);
        if map.day.is_none() && majority(&cells, &is_day_cell) {
            map.day = Some(col);
        }
    }
    for col in 0..width {
        if map.is_assigned(col) {
            continue;
        }
        let cells = column(col);
        if majority(&cells, &|c| c.trim().chars().all(|ch| ch.is_ascii_digit())) {
            if map.sets.is_none() {
                map.sets = Some(col);
            } else if map.reps.is_none() {
                map.reps = Some(col);
            }
        } else if majority(&cells, &is_measure_cell) {
            if map.reps.is_none() {
                map.reps = Some(col);
            }
        } else if majority(&cells, &looks_like_name) && map.exercise.is_none() {
            map.exercise = Some(col);
        }
    }
    if map.exercise.is_none() {
        map.exercise = Some(0);
    }
}

fn is_day_cell(cell: &str) -> bool {
    all_pattern_sets()
        .iter()
        .any(|p| p.weekday.is_match(cell) || p.day_marker.is_match(cell))
}

fn is_measure_cell(cell: &str) -> bool {
    AXB.is_match(cell)
        || parse_distance(cell).is_some()
        || parse_duration(cell).ok().flatten().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::pattern_set;
    use crate::model::DetectedLanguage;

    fn en() -> &'static LanguagePatterns {
        pattern_set(DetectedLanguage::English)
    }

    #[test]
    fn test_header_roles() {
        assert_eq!(header_role("Exercise"), Some(ColumnRole::Exercise));
        assert_eq!(header_role("Rest (s)"), Some(ColumnRole::Rest));
        assert_eq!(header_role("Övning"), Some(ColumnRole::Exercise));
        assert_eq!(header_role("Sets x Reps"), Some(ColumnRole::Sets));
        assert_eq!(header_role("Squats"), None);
    }

    #[test]
    fn test_rows_without_day_column_form_one_day() {
        let text = "Exercise\tSets\tReps\nSquats\t4\t12\nLunges\t3\t10";
        let days = segment(text, en()).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].label, "Day 1 Training");
        assert_eq!(days[0].exercises.len(), 2);
        assert_eq!(days[0].intensity, "Easy");
    }

    #[test]
    fn test_day_column_buckets_and_carries() {
        let text = "Day\tExercise\tSets\tReps\n\
                    Monday\tSquats\t4\t12\n\
                    -\tLunges\t3\t10\n\
                    Wednesday\tBench press\t3\t8";
        let days = segment(text, en()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].label, "Monday");
        assert_eq!(days[0].exercises.len(), 2);
        assert_eq!(days[1].label, "Wednesday");
        assert_eq!(days[1].exercises[0].name, "Bench press");
    }

    #[test]
    fn test_single_space_header() {
        let text = "Day Exercise Sets Reps\nMonday  Squats  4  12";
        let days = segment(text, en()).unwrap();
        assert_eq!(days[0].label, "Monday");
        let ex = &days[0].exercises[0];
        assert_eq!(ex.name, "Squats");
        assert_eq!((ex.sets, ex.reps), (4, 12));
    }

    #[test]
    fn test_inference_without_header() {
        let text = "Monday\tSquats\t4x12\nMonday\tLunges\t3x10\nFriday\tPlank\t60 sec";
        let days = segment(text, en()).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].label, "Monday");
        let squats = &days[0].exercises[0];
        assert_eq!(squats.name, "Squats");
        assert_eq!((squats.sets, squats.reps), (4, 12));
        assert_eq!(days[1].exercises[0].duration, "01:00");
    }
}
