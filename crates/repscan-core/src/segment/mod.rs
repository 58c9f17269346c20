pub mod narrative;
pub mod tabular;

use crate::lexicon::LanguagePatterns;
use crate::model::{Exercise, TextFormat};
use crate::outcome::{ParseWarning, SegmentationStrategy};

/// A day block before dates and ids are assigned.
#[derive(Debug, Clone)]
pub struct DayDraft {
    /// Header text of the block, e.g. "Day 1: Upper body" or "Monday".
    pub label: String,
    pub intensity: String,
    pub exercises: Vec<Exercise>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone)]
pub struct Segmentation {
    pub strategy: SegmentationStrategy,
    pub days: Vec<DayDraft>,
}

impl Segmentation {
    pub fn has_exercises(&self) -> bool {
        self.days.iter().any(|d| !d.exercises.is_empty())
    }
}

/// One way of cutting a narrative plan into day blocks.
pub trait SegmentStrategy {
    fn kind(&self) -> SegmentationStrategy;

    /// Returns `None` when the strategy's markers do not occur.
    fn attempt(&self, text: &str, patterns: &LanguagePatterns) -> Option<Vec<DayDraft>>;
}

/// Run the primary segmenters for the classified format.
///
/// Succeeds only when at least one exercise was extracted. A table that
/// yields nothing is retried as narrative text.
pub fn segment(
    text: &str,
    format: TextFormat,
    patterns: &LanguagePatterns,
) -> Option<Segmentation> {
    if format == TextFormat::Tabular {
        if let Some(days) = tabular::segment(text, patterns) {
            let segmentation = Segmentation {
                strategy: SegmentationStrategy::Tabular,
                days,
            };
            if segmentation.has_exercises() {
                return Some(segmentation);
            }
        }
        tracing::debug!("table produced no exercises, retrying as narrative");
    }
    narrative::segment(text, patterns)
}
