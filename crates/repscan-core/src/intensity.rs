use crate::lexicon::LanguagePatternSet;
use crate::model::IntensityLevel;

/// Level precedence when a text mentions more than one.
const PRECEDENCE: [IntensityLevel; 4] = [
    IntensityLevel::Rest,
    IntensityLevel::Easy,
    IntensityLevel::Hard,
    IntensityLevel::Medium,
];

const EASY_MAX_EXERCISES: usize = 2;
const HARD_MIN_EXERCISES: usize = 7;

/// Classify a narrative day from its header and content.
///
/// Returns the localized label; the language default when no term matches.
pub fn classify_narrative(text: &str, lexicon: &LanguagePatternSet) -> String {
    classify_level(text, lexicon)
        .map(|level| lexicon.label(level))
        .unwrap_or_else(|| lexicon.default_label())
        .to_string()
}

/// First level, in precedence order, with a term anywhere in the text.
///
/// Terms match as substrings so compounds such as "lättjogg" or
/// "lockerer" still count.
pub fn classify_level(text: &str, lexicon: &LanguagePatternSet) -> Option<IntensityLevel> {
    let lower = text.to_lowercase();
    PRECEDENCE.into_iter().find(|&level| {
        lexicon
            .patterns_for(level)
            .iter()
            .any(|term| lower.contains(term))
    })
}

/// Tabular days carry no intensity words; use the exercise count.
pub fn classify_by_count(exercise_count: usize, lexicon: &LanguagePatternSet) -> String {
    let level = if exercise_count <= EASY_MAX_EXERCISES {
        IntensityLevel::Easy
    } else if exercise_count >= HARD_MIN_EXERCISES {
        IntensityLevel::Hard
    } else {
        IntensityLevel::Medium
    };
    lexicon.label(level).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::builtin::lexicon;
    use crate::model::DetectedLanguage;

    #[test]
    fn test_default_label_when_nothing_matches() {
        let en = lexicon(DetectedLanguage::English);
        assert_eq!(classify_narrative("Day 1\nSquats 3x10", &en), "Medium");
        let sv = lexicon(DetectedLanguage::Swedish);
        assert_eq!(classify_narrative("Dag 1\nKnäböj 3x10", &sv), "Medel");
    }

    #[test]
    fn test_rest_beats_other_levels() {
        let en = lexicon(DetectedLanguage::English);
        assert_eq!(
            classify_level("Rest day, or an easy walk", &en),
            Some(IntensityLevel::Rest)
        );
    }

    #[test]
    fn test_easy_before_hard() {
        let en = lexicon(DetectedLanguage::English);
        assert_eq!(
            classify_level("Easy jog, then one hard hill", &en),
            Some(IntensityLevel::Easy)
        );
    }

    #[test]
    fn test_terms_match_inside_compounds() {
        let sv = lexicon(DetectedLanguage::Swedish);
        assert_eq!(classify_narrative("Lättjogg 30 min", &sv), "Lätt");
        let de = lexicon(DetectedLanguage::German);
        assert_eq!(
            classify_level("Lockerer Dauerlauf 40 min", &de),
            Some(IntensityLevel::Easy)
        );
        let en = lexicon(DetectedLanguage::English);
        assert_eq!(classify_level("Squats 3x10, bench 3x8", &en), None);
    }

    #[test]
    fn test_localized_label() {
        let sv = lexicon(DetectedLanguage::Swedish);
        assert_eq!(classify_narrative("Tungt benpass", &sv), "Tung");
        let de = lexicon(DetectedLanguage::German);
        assert_eq!(classify_narrative("Ruhetag", &de), "Ruhe");
    }

    #[test]
    fn test_classify_by_count() {
        let en = lexicon(DetectedLanguage::English);
        assert_eq!(classify_by_count(1, &en), "Easy");
        assert_eq!(classify_by_count(4, &en), "Medium");
        assert_eq!(classify_by_count(8, &en), "Hard");
    }
}
