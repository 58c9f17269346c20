use serde::Serialize;
use std::fmt;

use crate::model::{DetectedLanguage, TextFormat, WorkoutDay};

/// Which segmentation path produced the days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationStrategy {
    Tabular,
    DayMarker,
    Weekday,
    Section,
    FallbackSections,
    FallbackUnstructured,
}

impl SegmentationStrategy {
    pub fn is_fallback(self) -> bool {
        matches!(
            self,
            SegmentationStrategy::FallbackSections | SegmentationStrategy::FallbackUnstructured
        )
    }
}

impl fmt::Display for SegmentationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentationStrategy::Tabular => "tabular",
            SegmentationStrategy::DayMarker => "day markers",
            SegmentationStrategy::Weekday => "weekdays",
            SegmentationStrategy::Section => "sections",
            SegmentationStrategy::FallbackSections => "fallback sections",
            SegmentationStrategy::FallbackUnstructured => "fallback (unstructured)",
        };
        write!(f, "{name}")
    }
}

/// A unit of text that was kept as a placeholder because it failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    pub line_text: String,
    pub reason: String,
}

/// Parsed days plus how they were obtained.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub days: Vec<WorkoutDay>,
    pub language: DetectedLanguage,
    pub format: TextFormat,
    pub strategy: SegmentationStrategy,
    /// Set when the days came from the fallback generator.
    pub low_confidence: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }
}
