use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::LanguagePatterns;
use crate::model::{DetectedLanguage, IntensityLevel};

use super::{fitness_term, is_structural_header};

const MAX_NAME_CHARS: usize = 30;
const MAX_LABEL_CHARS: usize = 12;

static SETS_OF_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+\s*(?:sets?|series|serier|séries|sätze|sett|sæt|sarjaa)\s+(?:of|de|av|à|mit|af)\s+(?:\d+\s*)?(?:(?:reps?|repetitions?)\s+)?(?:of\s+)?([^\d,;:]+)",
    )
    .unwrap()
});

static LABEL_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:]+):\s*(.+)$").unwrap());

static LEADING_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[\d.,:/]+\s*(?:[x×]\s*[\d.,]+)?\s*(?:(?:secs?|s|mins?|km|m|kg|lbs?|reps?|sets?|st|x)\b\.?)?\s*)+",
    )
    .unwrap()
});

static TRAILING_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\s,;:\-–(]*(?:\d+\s*(?:[x×]\s*\d+)?\s*(?:sets?|reps?|x)?\s*)+$").unwrap()
});

/// OCR splits Swedish compounds: "knä böj", "bänk press".
static SWEDISH_COMPOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(knä|bänk|mark|axel|bröst|rygg|mag|höft|vad|arm)\s+(böj|press|lyft|lyftning|hävningar|curl|spark|rodd)\b",
    )
    .unwrap()
});

/// Words that can never be an exercise name on their own.
const RESERVED: &[&str] = &["x", "of", "and", "with", "och", "med", "min", "sec"];

type NameStrategy = fn(&str, &LanguagePatterns) -> Option<String>;

/// Pull an exercise name out of one unit of text.
///
/// Strategies run in order and the first candidate that survives
/// [`clean_name`] wins.
pub fn extract_name(text: &str, patterns: &LanguagePatterns) -> Option<String> {
    const STRATEGIES: [NameStrategy; 6] = [
        before_digits_or_colon,
        before_set_rep_word,
        after_sets_of,
        after_label_colon,
        fitness_term_scan,
        first_segment,
    ];
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text, patterns).and_then(|c| clean_name(&c, patterns)))
}

fn before_digits_or_colon(text: &str, _: &LanguagePatterns) -> Option<String> {
    let end = text
        .find(|c: char| c.is_ascii_digit() || c == ':')
        .unwrap_or(text.len());
    Some(text[..end].to_string())
}

fn before_set_rep_word(text: &str, patterns: &LanguagePatterns) -> Option<String> {
    let m = patterns.set_rep_word.find(text)?;
    let before = text[..m.start()].trim_end_matches(|c: char| c.is_ascii_digit() || c.is_whitespace());
    Some(before.to_string())
}

fn after_sets_of(text: &str, _: &LanguagePatterns) -> Option<String> {
    SETS_OF_NAME.captures(text).map(|c| c[1].to_string())
}

fn after_label_colon(text: &str, _: &LanguagePatterns) -> Option<String> {
    let caps = LABEL_COLON.captures(text)?;
    if caps[1].trim().chars().count() > MAX_LABEL_CHARS {
        return None;
    }
    let remainder = LEADING_NUMERIC.replace(caps[2].trim(), "");
    let end = remainder
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(remainder.len());
    Some(remainder[..end].to_string())
}

fn fitness_term_scan(text: &str, _: &LanguagePatterns) -> Option<String> {
    fitness_term(text).map(capitalize)
}

fn first_segment(text: &str, _: &LanguagePatterns) -> Option<String> {
    text.split([',', ':']).next().map(str::to_string)
}

/// Trim a candidate into a usable name, or reject it.
pub fn clean_name(candidate: &str, patterns: &LanguagePatterns) -> Option<String> {
    let stripped = TRAILING_FRAGMENT.replace(candidate.trim(), "");
    let stripped = LEADING_NUMERIC.replace(stripped.trim(), "");
    let trimmed = stripped.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '–' | ':' | ',' | '.' | '(' | ')' | '•' | '*' | '/')
    });
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().filter(|c| c.is_alphabetic()).count() < 2 {
        return None;
    }
    if is_reserved(&collapsed, patterns) {
        return None;
    }

    let repaired = if patterns.lexicon.language == DetectedLanguage::Swedish {
        SWEDISH_COMPOUND.replace_all(&collapsed, "${1}${2}").into_owned()
    } else {
        collapsed
    };
    Some(truncate_at_word(&repaired, MAX_NAME_CHARS))
}

fn is_reserved(name: &str, patterns: &LanguagePatterns) -> bool {
    let lower = name.to_lowercase();
    let lexicon = &patterns.lexicon;

    if RESERVED.contains(&lower.as_str()) || is_structural_header(name) {
        return true;
    }
    if patterns.set_rep_word.find(&lower).is_some_and(|m| m.as_str().len() == lower.len()) {
        return true;
    }
    if lexicon.rest_words.contains(&lower.as_str()) || lexicon.round_words.contains(&lower.as_str()) {
        return true;
    }
    [
        IntensityLevel::Easy,
        IntensityLevel::Medium,
        IntensityLevel::Hard,
        IntensityLevel::Rest,
    ]
    .into_iter()
    .any(|level| {
        lexicon.label(level).to_lowercase() == lower
            || lexicon.patterns_for(level).contains(&lower.as_str())
    }) || patterns.intensity_word.is_match(name)
}

fn truncate_at_word(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let chars: Vec<char> = name.chars().collect();
    let cut: String = chars[..max_chars].iter().collect();
    if chars[max_chars].is_whitespace() {
        return cut.trim_end().to_string();
    }
    match cut.rfind(' ') {
        Some(idx) if idx > 0 => cut[..idx].trim_end().to_string(),
        _ => cut,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
