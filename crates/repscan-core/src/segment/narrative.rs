use regex::{Captures, Regex};
use tracing::debug;

use crate::extract::narrative::extract_exercises;
use crate::intensity::classify_narrative;
use crate::lexicon::LanguagePatterns;
use crate::outcome::SegmentationStrategy;

use super::{DayDraft, SegmentStrategy, Segmentation};

const MAX_TITLE_CHARS: usize = 40;

/// Splits at "Day 1", "Session 2", "Dag 3: Måndag (Styrka)".
pub struct DayMarkerStrategy;

/// Splits at lines opening with a weekday.
pub struct WeekdayStrategy;

/// Splits at blank lines; a short first line becomes the title.
pub struct SectionStrategy;

impl SegmentStrategy for DayMarkerStrategy {
    fn kind(&self) -> SegmentationStrategy {
        SegmentationStrategy::DayMarker
    }

    fn attempt(&self, text: &str, patterns: &LanguagePatterns) -> Option<Vec<DayDraft>> {
        // The Swedish "Dag N: <weekday> (<type>)" form is tried first.
        if let Some(ref swedish) = patterns.swedish_day {
            let blocks = split_at_markers(text, swedish, 4);
            if !blocks.is_empty() {
                let days = build_days(blocks, patterns);
                if days.iter().any(|d| !d.exercises.is_empty()) {
                    return Some(days);
                }
                debug!("swedish day blocks held no exercises, trying plain markers");
            }
        }
        let blocks = split_at_markers(text, &patterns.day_marker, 2);
        (!blocks.is_empty()).then(|| build_days(blocks, patterns))
    }
}

impl SegmentStrategy for WeekdayStrategy {
    fn kind(&self) -> SegmentationStrategy {
        SegmentationStrategy::Weekday
    }

    fn attempt(&self, text: &str, patterns: &LanguagePatterns) -> Option<Vec<DayDraft>> {
        let blocks = split_at_markers(text, &patterns.weekday, 2);
        (!blocks.is_empty()).then(|| build_days(blocks, patterns))
    }
}

impl SegmentStrategy for SectionStrategy {
    fn kind(&self) -> SegmentationStrategy {
        SegmentationStrategy::Section
    }

    fn attempt(&self, text: &str, patterns: &LanguagePatterns) -> Option<Vec<DayDraft>> {
        let mut days = Vec::new();
        for paragraph in paragraphs(text) {
            let (title, content) = match paragraph.split_first() {
                Some((first, rest)) if !rest.is_empty() && is_title(first) => {
                    (Some(first.trim().to_string()), rest.join("\n"))
                }
                _ => (None, paragraph.join("\n")),
            };
            let extraction = extract_exercises(&content, patterns);
            if extraction.exercises.is_empty() {
                continue;
            }
            let label = title.unwrap_or_else(|| patterns.lexicon.synthetic_day_name(days.len() + 1));
            let intensity = classify_narrative(&format!("{label}\n{content}"), &patterns.lexicon);
            days.push(DayDraft {
                label,
                intensity,
                exercises: extraction.exercises,
                warnings: extraction.warnings,
            });
        }
        (!days.is_empty()).then_some(days)
    }
}

/// Try day markers, then weekdays, then blank-line sections.
///
/// A strategy succeeds once its days hold at least one exercise.
pub fn segment(text: &str, patterns: &LanguagePatterns) -> Option<Segmentation> {
    let strategies: [&dyn SegmentStrategy; 3] =
        [&DayMarkerStrategy, &WeekdayStrategy, &SectionStrategy];

    for strategy in strategies {
        let Some(days) = strategy.attempt(text, patterns) else {
            continue;
        };
        let segmentation = Segmentation {
            strategy: strategy.kind(),
            days,
        };
        if segmentation.has_exercises() {
            debug!(
                strategy = %segmentation.strategy,
                days = segmentation.days.len(),
                "narrative segmentation succeeded"
            );
            return Some(segmentation);
        }
        debug!(strategy = %strategy.kind(), "markers found but no exercises");
    }
    None
}

/// Cut the text at lines matching `marker`; text before the first marker
/// is dropped. `rest_group` holds whatever follows the marker on its line.
fn split_at_markers(text: &str, marker: &Regex, rest_group: usize) -> Vec<(String, String)> {
    let mut blocks: Vec<(String, Vec<String>)> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = marker.captures(line) {
            let (label, first_line) = marker_label(line, &caps, rest_group);
            blocks.push((label, first_line.into_iter().collect()));
        } else if let Some((_, content)) = blocks.last_mut() {
            content.push(line.to_string());
        }
    }

    blocks
        .into_iter()
        .map(|(label, content)| (label, content.join("\n")))
        .collect()
}

/// The marker line becomes the label. Text after the marker that carries
/// numbers is exercise content, otherwise it is part of the label.
fn marker_label(line: &str, caps: &Captures, rest_group: usize) -> (String, Option<String>) {
    let trimmed = |s: &str| {
        s.trim()
            .trim_start_matches(['-', '•', '*', '#'])
            .trim_end_matches([':', '-', '–', '.', ','])
            .trim()
            .to_string()
    };
    match caps.get(rest_group) {
        Some(rest) if rest.as_str().chars().any(|c| c.is_ascii_digit()) => (
            trimmed(&line[..rest.start()]),
            Some(rest.as_str().trim().to_string()),
        ),
        _ => (trimmed(line), None),
    }
}

fn build_days(blocks: Vec<(String, String)>, patterns: &LanguagePatterns) -> Vec<DayDraft> {
    blocks
        .into_iter()
        .map(|(label, content)| {
            let extraction = extract_exercises(&content, patterns);
            let intensity = classify_narrative(&format!("{label}\n{content}"), &patterns.lexicon);
            DayDraft {
                label,
                intensity,
                exercises: extraction.exercises,
                warnings: extraction.warnings,
            }
        })
        .collect()
}

fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut out: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn is_title(line: &str) -> bool {
    let line = line.trim();
    line.chars().count() <= MAX_TITLE_CHARS
        && !line.contains(':')
        && !line.chars().any(|c| c.is_ascii_digit())
        && line.chars().any(char::is_alphabetic)
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
    fn test_day_markers() {
        let text = "My plan\nDay 1: Upper body\nBench press 3x10\nRows 3x12\n\nDay 2: Legs (hard)\nSquats 5x5";
        let seg = segment(text, en()).unwrap();
        assert_eq!(seg.strategy, SegmentationStrategy::DayMarker);
        assert_eq!(seg.days.len(), 2);
        assert_eq!(seg.days[0].label, "Day 1: Upper body");
        assert_eq!(seg.days[0].exercises.len(), 2);
        assert_eq!(seg.days[1].intensity, "Hard");
    }

    #[test]
    fn test_marker_line_with_exercise() {
        let text = "Day 1 - Squats 3x10\nLunges 3x8";
        let seg = segment(text, en()).unwrap();
        assert_eq!(seg.days[0].label, "Day 1");
        assert_eq!(seg.days[0].exercises.len(), 2);
    }

    #[test]
    fn test_swedish_day_pattern() {
        let sv = pattern_set(DetectedLanguage::Swedish);
        let text = "Dag 1: Måndag (Styrka)\nKnäböj 3x10\nDag 2: Onsdag (Kondition)\nLöpning 5 km";
        let seg = segment(text, sv).unwrap();
        assert_eq!(seg.days.len(), 2);
        assert_eq!(seg.days[0].label, "Dag 1: Måndag (Styrka)");
        assert_eq!(seg.days[1].exercises[0].distance, "5km");
    }

    #[test]
    fn test_plain_markers_when_swedish_blocks_are_empty() {
        let sv = pattern_set(DetectedLanguage::Swedish);
        let text = "Dag 1\nKnäböj 3x10\nDag 2: Onsdag (vila)";
        let seg = segment(text, sv).unwrap();
        assert_eq!(seg.strategy, SegmentationStrategy::DayMarker);
        assert_eq!(seg.days.len(), 2);
        assert_eq!(seg.days[0].label, "Dag 1");
        assert_eq!(seg.days[0].exercises[0].name, "Knäböj");
    }

    #[test]
    fn test_weekdays() {
        let text = "Monday\nSquats 3x10\nTuesday: easy\nRun 5 km";
        let seg = segment(text, en()).unwrap();
        assert_eq!(seg.strategy, SegmentationStrategy::Weekday);
        assert_eq!(seg.days.len(), 2);
        assert_eq!(seg.days[1].label, "Tuesday: easy");
        assert_eq!(seg.days[1].intensity, "Easy");
    }

    #[test]
    fn test_sections_with_titles() {
        let text = "Upper body\nBench press 3x10\nPull-ups 3x8\n\nLower body\nSquats 4x8";
        let seg = segment(text, en()).unwrap();
        assert_eq!(seg.strategy, SegmentationStrategy::Section);
        assert_eq!(seg.days[0].label, "Upper body");
        assert_eq!(seg.days[1].label, "Lower body");
        assert_eq!(seg.days[0].exercises.len(), 2);
    }

    #[test]
    fn test_single_line_gets_synthetic_name() {
        let seg = segment("Sprint 3x200m with 60s rest", en()).unwrap();
        assert_eq!(seg.days.len(), 1);
        assert_eq!(seg.days[0].label, "Day 1 Training");
    }

    #[test]
    fn test_prose_fails() {
        assert!(segment("I went for a walk and felt great about life.", en()).is_none());
    }
}
