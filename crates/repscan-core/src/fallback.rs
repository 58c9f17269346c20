use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::extract::is_fitness_term;
use crate::extract::narrative::parse_unit;
use crate::intensity::{classify_by_count, classify_level};
use crate::lexicon::{all_pattern_sets, LanguagePatterns};
use crate::model::Exercise;
use crate::outcome::SegmentationStrategy;
use crate::segment::{DayDraft, Segmentation};

pub const FALLBACK_PREFIX: &str = "[FALLBACK] ";
pub const UNSTRUCTURED_LABEL: &str = "Unstructured Data";

const MIN_SECTION_CHARS: usize = 20;
const MIN_SECTION_LINES: usize = 2;
const MAX_STANDALONE_HEADER_CHARS: usize = 30;
const MAX_STANDALONE_HEADER_WORDS: usize = 4;
const MAX_FALLBACK_NAME_CHARS: usize = 40;

static WEEK_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:week|vecka|semana|semaine|woche|uke|uge|viikko)\s*\d+").unwrap()
});

/// Best-effort days for text the primary segmenters could not handle.
///
/// Tries multi-section recovery first and otherwise produces a single
/// "Unstructured Data" day. Never returns zero days, and every exercise
/// name carries [`FALLBACK_PREFIX`].
pub fn generate(text: &str, patterns: &LanguagePatterns, exercise_limit: usize) -> Segmentation {
    if let Some(days) = section_days(text, patterns, exercise_limit) {
        debug!(days = days.len(), "fallback recovered sections");
        return Segmentation {
            strategy: SegmentationStrategy::FallbackSections,
            days,
        };
    }

    let exercises = best_effort_exercises(text.lines(), patterns, exercise_limit, || {
        Exercise::placeholder(
            format!("{FALLBACK_PREFIX}Unstructured workout"),
            "No workout structure was detected; review the original text.",
        )
    });
    Segmentation {
        strategy: SegmentationStrategy::FallbackUnstructured,
        days: vec![DayDraft {
            label: UNSTRUCTURED_LABEL.to_string(),
            intensity: patterns.lexicon.default_label().to_string(),
            exercises,
            warnings: Vec::new(),
        }],
    }
}

fn section_days(
    text: &str,
    patterns: &LanguagePatterns,
    exercise_limit: usize,
) -> Option<Vec<DayDraft>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let boundaries: Vec<usize> = (0..lines.len())
        .filter(|&i| is_section_marker(lines[i], lines.get(i + 1).copied()))
        .collect();
    if boundaries.is_empty() {
        return None;
    }

    let days: Vec<DayDraft> = boundaries
        .iter()
        .enumerate()
        .filter_map(|(n, &start)| {
            let end = boundaries.get(n + 1).copied().unwrap_or(lines.len());
            let section = &lines[start..end];
            let chars: usize = section.iter().map(|l| l.chars().count()).sum();
            if section.len() < MIN_SECTION_LINES || chars < MIN_SECTION_CHARS {
                return None;
            }
            Some(section_day(section, patterns, exercise_limit))
        })
        .collect();

    (!days.is_empty()).then_some(days)
}

fn section_day(section: &[&str], patterns: &LanguagePatterns, exercise_limit: usize) -> DayDraft {
    let label = section[0].trim_end_matches([':', '-', '.']).trim().to_string();
    let body = &section[1..];

    let intensity = match classify_level(&section.join("\n"), &patterns.lexicon) {
        Some(level) => patterns.lexicon.label(level).to_string(),
        None => {
            let numeric_lines = body
                .iter()
                .filter(|l| l.chars().any(|c| c.is_ascii_digit()))
                .count();
            classify_by_count(numeric_lines, &patterns.lexicon)
        }
    };

    let exercises = best_effort_exercises(body.iter().copied(), patterns, exercise_limit, || {
        Exercise::placeholder(
            format!("{FALLBACK_PREFIX}Review section"),
            "No exercises could be identified in this section; review the original text.",
        )
    });

    DayDraft {
        label,
        intensity,
        exercises,
        warnings: Vec::new(),
    }
}

/// Day or week markers in any language, or a short standalone heading
/// followed by a longer line.
fn is_section_marker(line: &str, next: Option<&str>) -> bool {
    if WEEK_MARKER.is_match(line) {
        return true;
    }
    if all_pattern_sets()
        .iter()
        .any(|p| p.day_marker.is_match(line) || p.weekday.is_match(line))
    {
        return true;
    }
    let words = line.split_whitespace().count();
    line.chars().count() <= MAX_STANDALONE_HEADER_CHARS
        && words <= MAX_STANDALONE_HEADER_WORDS
        && !line.chars().any(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        && next.is_some_and(|n| n.chars().count() > line.chars().count())
}

/// Up to `limit` exercises from lines that carry numbers or movement names.
fn best_effort_exercises<'a>(
    lines: impl Iterator<Item = &'a str>,
    patterns: &LanguagePatterns,
    limit: usize,
    placeholder: impl FnOnce() -> Exercise,
) -> Vec<Exercise> {
    let mut exercises: Vec<Exercise> = lines
        .map(str::trim)
        .filter(|l| l.chars().any(|c| c.is_ascii_digit()) || is_fitness_term(l))
        .take(limit)
        .enumerate()
        .map(|(idx, line)| {
            let mut exercise = match parse_unit(line, patterns) {
                Ok(Some(exercise)) => exercise,
                _ => Exercise::new(truncate(line, MAX_FALLBACK_NAME_CHARS)),
            };
            if exercise.name.trim().is_empty() {
                exercise.name = format!("Exercise {}", idx + 1);
            }
            exercise.name = format!("{FALLBACK_PREFIX}{}", exercise.name);
            exercise.append_note("Recovered from unstructured text");
            exercise.normalize_fields();
            exercise
        })
        .collect();

    if exercises.is_empty() {
        exercises.push(placeholder());
    }
    exercises
}

fn truncate(line: &str, max_chars: usize) -> String {
    line.chars().take(max_chars).collect::<String>().trim().to_string()
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
    fn test_prose_becomes_one_unstructured_day() {
        let seg = generate("I went for a walk and felt great about life.", en(), 2);
        assert_eq!(seg.strategy, SegmentationStrategy::FallbackUnstructured);
        assert_eq!(seg.days.len(), 1);
        assert_eq!(seg.days[0].label, UNSTRUCTURED_LABEL);
        assert_eq!(seg.days[0].exercises.len(), 1);
        assert!(seg.days[0].exercises[0].name.starts_with(FALLBACK_PREFIX));
    }

    #[test]
    fn test_empty_text_still_yields_a_day() {
        let seg = generate("", en(), 2);
        assert_eq!(seg.days.len(), 1);
        assert_eq!(seg.days[0].exercises.len(), 1);
    }

    #[test]
    fn test_sections_at_week_markers() {
        let text = "Week 1\nWalk in the park for a while\nStretch when done\nWeek 2\nLonger walk, same park";
        let seg = generate(text, en(), 2);
        assert_eq!(seg.strategy, SegmentationStrategy::FallbackSections);
        assert_eq!(seg.days.len(), 2);
        assert_eq!(seg.days[0].label, "Week 1");
        assert!(seg.days[1]
            .exercises
            .iter()
            .all(|e| e.name.starts_with(FALLBACK_PREFIX)));
    }

    #[test]
    fn test_exercise_limit() {
        let text = "random 1\nrandom 2\nrandom 3\nrandom 4";
        let seg = generate(text, en(), 2);
        assert!(seg.days.iter().all(|d| d.exercises.len() <= 2));
    }
}
