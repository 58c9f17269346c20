pub mod builtin;

use crate::model::{DetectedLanguage, IntensityLevel};
use regex::Regex;
use std::sync::LazyLock;

/// Unit spellings shared by the numeric extractors, longest first.
pub const SECOND_UNITS: &str =
    "seconds|second|sekunder|sekunden|sekuntia|segundos|secondes|secs|sec|sek|s";
pub const MINUTE_UNITS: &str =
    "minutes|minute|minuter|minuten|minutter|minutos|minuuttia|mins|min";
pub const HOUR_UNITS: &str = "hours|hour|timmar|timme|stunden|stunde|horas|heures|timer|tuntia|hrs|hr|h";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityLabels {
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub rest: &'static str,
}

/// Immutable lexicon for one language. All terms are lowercase.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePatternSet {
    pub language: DetectedLanguage,
    pub day_markers: &'static [&'static str],
    pub weekdays: [&'static str; 7],
    pub easy_patterns: &'static [&'static str],
    pub medium_patterns: &'static [&'static str],
    pub hard_patterns: &'static [&'static str],
    pub rest_patterns: &'static [&'static str],
    pub rep_patterns: &'static [&'static str],
    pub set_patterns: &'static [&'static str],
    pub per_side_patterns: &'static [&'static str],
    pub rest_words: &'static [&'static str],
    pub round_words: &'static [&'static str],
    pub exercise_markers: &'static [&'static str],
    pub day_prefix: &'static str,
    pub training_suffix: &'static str,
    pub default_intensity: IntensityLevel,
    pub intensity_labels: IntensityLabels,
    pub sprint_name: &'static str,
}

impl LanguagePatternSet {
    pub fn label(&self, level: IntensityLevel) -> &'static str {
        match level {
            IntensityLevel::Easy => self.intensity_labels.easy,
            IntensityLevel::Medium => self.intensity_labels.medium,
            IntensityLevel::Hard => self.intensity_labels.hard,
            IntensityLevel::Rest => self.intensity_labels.rest,
        }
    }

    pub fn default_label(&self) -> &'static str {
        self.label(self.default_intensity)
    }

    pub fn patterns_for(&self, level: IntensityLevel) -> &'static [&'static str] {
        match level {
            IntensityLevel::Easy => self.easy_patterns,
            IntensityLevel::Medium => self.medium_patterns,
            IntensityLevel::Hard => self.hard_patterns,
            IntensityLevel::Rest => self.rest_patterns,
        }
    }

    /// "Dag 3 Träning"
    pub fn synthetic_day_name(&self, index: usize) -> String {
        format!("{} {} {}", self.day_prefix, index, self.training_suffix)
    }
}

/// A lexicon together with its regexes, compiled once per language.
///
/// Set, rep, per-side, rest and round vocabularies are merged with the
/// English ones, since OCR'd plans routinely mix in English shorthand.
#[derive(Debug)]
pub struct LanguagePatterns {
    pub lexicon: LanguagePatternSet,
    /// "Day 3: Upper body" with the number in group 1 and the rest in group 2.
    pub day_marker: Regex,
    /// "Dag 1: Måndag (Styrka)". Only present for Swedish.
    pub swedish_day: Option<Regex>,
    /// A line opening with a weekday; the rest of the line in group 2.
    pub weekday: Regex,
    pub sets: Regex,
    pub reps: Regex,
    /// A bare set or rep keyword, without a number.
    pub set_rep_word: Regex,
    pub per_side: Regex,
    /// "60s rest", "90 sek vila"
    pub rest_after: Regex,
    /// "rest 60s", "vila: 90"
    pub rest_before: Regex,
    /// A line made only of an intensity word or label.
    pub intensity_word: Regex,
    /// "Core training: 3 rounds of" with title, count and trailing text groups.
    pub circuit_header: Regex,
    pub score_day: Regex,
    pub score_intensity: Regex,
    pub score_exercise: Regex,
}

static STORE: LazyLock<Vec<LanguagePatterns>> = LazyLock::new(|| {
    DetectedLanguage::ALL
        .into_iter()
        .map(|lang| LanguagePatterns::compile(builtin::lexicon(lang)))
        .collect()
});

/// The compiled pattern set for a language.
pub fn pattern_set(language: DetectedLanguage) -> &'static LanguagePatterns {
    let idx = DetectedLanguage::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or(0);
    &STORE[idx]
}

/// Every compiled pattern set, in [`DetectedLanguage::ALL`] order.
pub fn all_pattern_sets() -> &'static [LanguagePatterns] {
    &STORE
}

impl LanguagePatterns {
    fn compile(lexicon: LanguagePatternSet) -> Self {
        let english = builtin::lexicon(DetectedLanguage::English);
        let merged = |own: &[&'static str], en: &[&'static str]| -> Vec<&'static str> {
            own.iter().chain(en.iter()).copied().collect()
        };

        let markers = prefix_alternation(lexicon.day_markers);
        let weekdays = word_alternation(&lexicon.weekdays);
        let rest = word_alternation(&merged(lexicon.rest_words, english.rest_words));
        let rounds = word_alternation(&merged(lexicon.round_words, english.round_words));
        let time_units = format!("{SECOND_UNITS}|{MINUTE_UNITS}");

        let mut intensity_terms: Vec<&str> = vec![
            lexicon.intensity_labels.easy,
            lexicon.intensity_labels.medium,
            lexicon.intensity_labels.hard,
            english.intensity_labels.easy,
            english.intensity_labels.medium,
            english.intensity_labels.hard,
        ];
        intensity_terms.extend(lexicon.easy_patterns);
        intensity_terms.extend(lexicon.medium_patterns);
        intensity_terms.extend(lexicon.hard_patterns);
        let intensity_terms: Vec<String> = intensity_terms.iter().map(|t| t.to_lowercase()).collect();
        let intensity_refs: Vec<&str> = intensity_terms.iter().map(String::as_str).collect();

        let mut day_terms: Vec<&str> = lexicon.day_markers.to_vec();
        day_terms.extend(lexicon.weekdays);
        let mut scored_intensity: Vec<&str> = Vec::new();
        for level in [
            IntensityLevel::Easy,
            IntensityLevel::Medium,
            IntensityLevel::Hard,
            IntensityLevel::Rest,
        ] {
            scored_intensity.extend(lexicon.patterns_for(level));
        }

        let swedish_day = (lexicon.language == DetectedLanguage::Swedish).then(|| {
            compile(&format!(
                r"(?im)^[ \t\-•*#]*dag[ \t]*(\d{{1,2}})[ \t]*[:.\-–]?[ \t]*({weekdays})[ \t]*(?:\(([^)\n]*)\))?[ \t]*[:.\-–]?[ \t]*(.*)$"
            ))
        });

        LanguagePatterns {
            day_marker: compile(&format!(
                r"(?im)^[ \t\-•*#]*(?:{markers})[ \t]*(\d{{1,2}})\b[ \t]*[:.\-–)]?[ \t]*(.*)$"
            )),
            swedish_day,
            weekday: compile(&format!(
                r"(?im)^[ \t\-•*#]*({weekdays})[ \t]*[:.,\-–]?[ \t]*(.*)$"
            )),
            sets: compile(&format!(
                r"(?i)(\d+)\s*(?:{})",
                suffix_alternation(&merged(lexicon.set_patterns, english.set_patterns))
            )),
            reps: compile(&format!(
                r"(?i)(\d+)\s*(?:{})",
                suffix_alternation(&merged(lexicon.rep_patterns, english.rep_patterns))
            )),
            set_rep_word: compile(&format!(
                "(?i){}",
                word_alternation(
                    &[
                        merged(lexicon.set_patterns, english.set_patterns),
                        merged(lexicon.rep_patterns, english.rep_patterns),
                    ]
                    .concat()
                )
            )),
            per_side: compile(&format!(
                "(?i){}",
                word_alternation(&merged(lexicon.per_side_patterns, english.per_side_patterns))
            )),
            rest_after: compile(&format!(
                r"(?i)(\d+)\s*({time_units})\b\.?\s*(?:of\s+)?(?:{rest})"
            )),
            rest_before: compile(&format!(
                r"(?i)(?:{rest})\s*[:\-]?\s*(\d+)\s*(?:({time_units})\b)?"
            )),
            intensity_word: compile(&format!(
                r"(?i)^\s*(?:{})\s*[:.!]?\s*$",
                word_alternation(&intensity_refs)
            )),
            circuit_header: compile(&format!(
                r"(?i)^(.*?)[:\-–]?\s*(\d{{1,2}})\s*(?:x\s*)?(?:{rounds})(?:\s+(?:of|av|de|von|af|med|with))?\s*:?\s*(.*)$"
            )),
            score_day: compile(&format!("(?i){}", word_alternation(&day_terms))),
            score_intensity: compile(&format!("(?i){}", word_alternation(&scored_intensity))),
            score_exercise: compile(&format!(
                "(?i){}",
                word_alternation(lexicon.exercise_markers)
            )),
            lexicon,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Lexicon terms are escaped before they reach a pattern.
    Regex::new(pattern).expect("lexicon pattern must compile")
}

/// Alternation of escaped terms, longest first, bounded by `\b` where the
/// term edge is a word character.
pub(crate) fn word_alternation(terms: &[&str]) -> String {
    alternation(terms, true, true)
}

/// Like [`word_alternation`] but without a leading boundary, for unit words
/// glued to a number ("12reps").
pub(crate) fn suffix_alternation(terms: &[&str]) -> String {
    alternation(terms, false, true)
}

/// Leading boundary only, for markers glued to a number ("Day2").
pub(crate) fn prefix_alternation(terms: &[&str]) -> String {
    alternation(terms, true, false)
}

fn alternation(terms: &[&str], leading_boundary: bool, trailing_boundary: bool) -> String {
    let mut sorted: Vec<&str> = terms.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));

    sorted
        .iter()
        .map(|term| {
            let escaped = regex::escape(term);
            let starts_word = term.chars().next().is_some_and(char::is_alphanumeric);
            let ends_word = term.chars().last().is_some_and(char::is_alphanumeric);
            let start = if leading_boundary && starts_word { r"\b" } else { "" };
            let end = if trailing_boundary && ends_word { r"\b" } else { "" };
            format!("{start}{escaped}{end}")
        })
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_compiles() {
        assert_eq!(all_pattern_sets().len(), DetectedLanguage::ALL.len());
        for lang in DetectedLanguage::ALL {
            assert_eq!(pattern_set(lang).lexicon.language, lang);
        }
    }

    #[test]
    fn test_day_marker_captures_number_and_rest() {
        let p = pattern_set(DetectedLanguage::English);
        let caps = p.day_marker.captures("Day 2: Lower body").unwrap();
        assert_eq!(&caps[1], "2");
        assert_eq!(&caps[2], "Lower body");
        assert!(p.day_marker.captures("Today we rest").is_none());
        assert_eq!(&p.day_marker.captures("DAY3 - Legs").unwrap()[1], "3");
    }

    #[test]
    fn test_swedish_day_pattern() {
        let p = pattern_set(DetectedLanguage::Swedish);
        let re = p.swedish_day.as_ref().unwrap();
        let caps = re.captures("Dag 1: Måndag (Styrka)").unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(caps[2].to_lowercase(), "måndag");
        assert_eq!(&caps[3], "Styrka");
        assert!(pattern_set(DetectedLanguage::English).swedish_day.is_none());
    }

    #[test]
    fn test_reps_without_space() {
        let p = pattern_set(DetectedLanguage::English);
        let caps = p.reps.captures("Squats 12reps").unwrap();
        assert_eq!(&caps[1], "12");
    }

    #[test]
    fn test_per_side_merges_english() {
        let p = pattern_set(DetectedLanguage::Swedish);
        assert!(p.per_side.is_match("Utfall 10 per ben"));
        assert!(p.per_side.is_match("Lunges 10 each leg"));
        assert!(!p.per_side.is_match("Knäböj 3x10"));
    }

    #[test]
    fn test_rest_patterns() {
        let p = pattern_set(DetectedLanguage::English);
        assert_eq!(&p.rest_after.captures("3x10 with 60s rest").unwrap()[1], "60");
        assert_eq!(&p.rest_before.captures("Rest: 90 sec").unwrap()[1], "90");
    }

    #[test]
    fn test_alternation_prefers_longest_term() {
        let alt = word_alternation(&["set", "sets"]);
        assert!(alt.starts_with(r"\bsets\b"));
    }

    #[test]
    fn test_synthetic_day_name() {
        let p = pattern_set(DetectedLanguage::Swedish);
        assert_eq!(p.lexicon.synthetic_day_name(2), "Dag 2 Träning");
    }
}
