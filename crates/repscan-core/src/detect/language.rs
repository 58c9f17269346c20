use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use crate::lexicon::{all_pattern_sets, word_alternation};
use crate::model::DetectedLanguage;

const NORDIC_DIACRITICS: &[char] = &['å', 'ä', 'ö', 'ø', 'æ', 'é', 'ü', 'ð', 'þ'];
const NORDIC_MULTIPLIER: f64 = 1.5;
const SECONDARY_WEIGHT: f64 = 2.0;

/// Curated terms that separate the Nordic languages from one another.
const NORDIC_TERMS: &[(DetectedLanguage, &[&str])] = &[
    (
        DetectedLanguage::Swedish,
        &[
            "träning", "övning", "övningar", "vila", "knäböj", "marklyft", "bänkpress", "måndag",
            "lördag", "söndag", "sekunder", "upprepningar", "uppvärmning", "lätt", "tung",
            "och", "för",
        ],
    ),
    (
        DetectedLanguage::Norwegian,
        &[
            "trening", "øvelse", "øvelser", "hvile", "mandag", "lørdag", "søndag", "knebøy",
            "markløft", "benkpress", "oppvarming", "lett", "sett", "og", "gjentakelser",
        ],
    ),
    (
        DetectedLanguage::Danish,
        &[
            "træning", "øvelse", "øvelser", "hvile", "mandag", "lørdag", "søndag", "dødløft",
            "bænkpres", "opvarmning", "sæt", "gentagelser", "og", "hård",
        ],
    ),
    (
        DetectedLanguage::Finnish,
        &[
            "harjoitus", "treeni", "lepo", "maanantai", "tiistai", "keskiviikko", "torstai",
            "perjantai", "lauantai", "sunnuntai", "kyykky", "maastaveto", "lämmittely",
            "toistoa", "sarjaa", "kevyt", "raskas",
        ],
    ),
];

const SWEDISH_SPECIFIC_TERMS: &[&str] = &[
    "träning", "träningspass", "övning", "övningar", "knäböj", "marklyft", "bänkpress",
    "utfall", "armhävningar", "sekunder", "upprepningar", "uppvärmning", "nedvarvning",
    "måndag", "tisdag", "lördag", "söndag", "vila", "passet", "styrka",
];

static NORDIC_SCORERS: LazyLock<Vec<(DetectedLanguage, Regex)>> = LazyLock::new(|| {
    NORDIC_TERMS
        .iter()
        .filter_map(|(lang, terms)| {
            Regex::new(&format!("(?i){}", word_alternation(terms)))
                .ok()
                .map(|re| (*lang, re))
        })
        .collect()
});

static SWEDISH_TERMS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", word_alternation(SWEDISH_SPECIFIC_TERMS))).ok()
});

/// "200 meter", "30 sekunder": numeric idioms that lean Swedish.
static SWEDISH_NUMERIC_IDIOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:meter|sekunder|sek|minuter)\b").unwrap()
});

/// Per-language detection scores, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageScores {
    pub scores: Vec<(DetectedLanguage, f64)>,
    pub diacritics: usize,
    pub detected: DetectedLanguage,
}

/// Detect the language of a workout plan.
///
/// Deterministic and case-insensitive; defaults to English when nothing
/// matches.
pub fn detect_language(text: &str) -> DetectedLanguage {
    score_languages(text).detected
}

/// Run the detector and keep the intermediate scores.
pub fn score_languages(text: &str) -> LanguageScores {
    let diacritics = count_diacritics(text);
    let scores: Vec<(DetectedLanguage, f64)> = all_pattern_sets()
        .iter()
        .map(|p| {
            let day = p.score_day.find_iter(text).count() as f64;
            let intensity = p.score_intensity.find_iter(text).count() as f64;
            let exercise = p.score_exercise.find_iter(text).count() as f64;
            let mut score = day * 2.0 + intensity + exercise;
            if p.lexicon.language.is_nordic() {
                score *= NORDIC_MULTIPLIER;
            }
            if p.lexicon.language == DetectedLanguage::Swedish {
                score += SWEDISH_NUMERIC_IDIOM.find_iter(text).count() as f64;
            }
            (p.lexicon.language, score)
        })
        .collect();

    let detected = decide(text, diacritics, &scores);
    debug!(
        language = %detected,
        diacritics,
        "language detection finished"
    );

    LanguageScores {
        scores,
        diacritics,
        detected,
    }
}

fn decide(text: &str, diacritics: usize, scores: &[(DetectedLanguage, f64)]) -> DetectedLanguage {
    if diacritics > 3 {
        if let Some((lang, score)) = best_nordic(text) {
            if score > 4.0 {
                return lang;
            }
        }
    }

    let swedish_terms = SWEDISH_TERMS
        .as_ref()
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0);
    if swedish_terms > 5 {
        return DetectedLanguage::Swedish;
    }

    let mut best = (DetectedLanguage::English, 0.0_f64);
    for &(lang, score) in scores {
        if score > best.1 {
            best = (lang, score);
        }
    }

    if best.1 < 5.0 && diacritics > 1 {
        return DetectedLanguage::Swedish;
    }
    best.0
}

/// Secondary scorer over the curated Nordic term lists.
fn best_nordic(text: &str) -> Option<(DetectedLanguage, f64)> {
    let mut best: Option<(DetectedLanguage, f64)> = None;
    for (lang, re) in NORDIC_SCORERS.iter() {
        let score = re.find_iter(text).count() as f64 * SECONDARY_WEIGHT;
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((*lang, score));
        }
    }
    best
}

fn count_diacritics(text: &str) -> usize {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| NORDIC_DIACRITICS.contains(c))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_defaults_to_english() {
        assert_eq!(
            detect_language("The quick brown fox jumps over the lazy dog"),
            DetectedLanguage::English
        );
        assert_eq!(detect_language(""), DetectedLanguage::English);
    }

    #[test]
    fn test_english_plan() {
        let text = "Day 1: Upper body\nBench press 3x10\nDay 2: Legs\nSquats 4x8";
        assert_eq!(detect_language(text), DetectedLanguage::English);
    }

    #[test]
    fn test_swedish_plan() {
        let text = "Dag 1: Måndag (Styrka)\nKnäböj 3 set x 12 reps\nMarklyft 3x8\nVila 90 sekunder";
        assert_eq!(detect_language(text), DetectedLanguage::Swedish);
    }

    #[test]
    fn test_spanish_plan() {
        let text = "Día 1: Piernas\nSentadillas 4 series de 10 repeticiones\nDía 2: descanso\nLunes y miércoles";
        assert_eq!(detect_language(text), DetectedLanguage::Spanish);
    }

    #[test]
    fn test_german_plan() {
        let text = "Tag 1: Beine\nKniebeugen 3 Sätze 10 Wiederholungen\nTag 2: Kreuzheben\nMontag leicht";
        assert_eq!(detect_language(text), DetectedLanguage::German);
    }

    #[test]
    fn test_finnish_plan() {
        let text = "Päivä 1: maanantai\nKyykky 3 sarjaa 10 toistoa\nPäivä 2: lepopäivä";
        assert_eq!(detect_language(text), DetectedLanguage::Finnish);
    }

    #[test]
    fn test_norwegian_by_nordic_terms() {
        let text = "Mandag: knebøy og markløft, 3 sett\nLørdag: hvile og lett trening";
        assert_eq!(detect_language(text), DetectedLanguage::Norwegian);
    }

    #[test]
    fn test_diacritics_without_hits_lean_swedish() {
        assert_eq!(detect_language("Fröken Åsa åt glass"), DetectedLanguage::Swedish);
    }

    #[test]
    fn test_scores_are_reported() {
        let scores = score_languages("Day 1\nDay 2");
        assert_eq!(scores.scores.len(), 8);
        assert_eq!(scores.detected, DetectedLanguage::English);
        let en = scores
            .scores
            .iter()
            .find(|(l, _)| *l == DetectedLanguage::English)
            .map(|(_, s)| *s);
        assert_eq!(en, Some(4.0));
    }
}
