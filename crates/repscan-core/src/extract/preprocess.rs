use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::lexicon::LanguagePatterns;
use crate::model::DetectedLanguage;

use super::{is_fitness_term, is_structural_header};

const MAX_NAME_ONLY_CHARS: usize = 40;
const MAX_EMBEDDED_FRAGMENT_CHARS: usize = 30;

static INLINE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[•·]\s*").unwrap());

/// "- ", "• ", "1. ", "2) " at the start of a line.
static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-–•·*]+|\d{1,2}[.)])\s+").unwrap());

static TIMES_SIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\s*[xX×*]\s*(\d)").unwrap());

static COLON_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\d\s])\s*:\s*").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Recurring OCR misreads in Swedish plans.
const SWEDISH_TYPOS: &[(&str, &str)] = &[
    ("knaboj", "knäböj"),
    ("knäboj", "knäböj"),
    ("knaböj", "knäböj"),
    ("bankpress", "bänkpress"),
    ("rnarklyft", "marklyft"),
    ("ovningar", "övningar"),
    ("ovning", "övning"),
    ("overning", "övning"),
    ("upprepnigar", "upprepningar"),
    ("sekuner", "sekunder"),
    ("vi1a", "vila"),
    ("arrnhävningar", "armhävningar"),
];

static SWEDISH_TYPO_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SWEDISH_TYPOS
        .iter()
        .filter_map(|(typo, fix)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(typo)))
                .ok()
                .map(|re| (re, *fix))
        })
        .collect()
});

/// Turn a day block into cleaned candidate lines.
///
/// Splits on newlines and semicolons (and inline bullets), repairs OCR
/// digit confusions, normalizes spacing, then merges an intensity word or a
/// bare name with the line that follows it.
pub fn prepare_lines(content: &str, patterns: &LanguagePatterns) -> Vec<String> {
    let language = patterns.lexicon.language;
    let lines: Vec<String> = content
        .split(['\n', ';'])
        .flat_map(|line| INLINE_BULLET.split(line))
        .map(|line| LEADING_BULLET.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .map(|line| normalize_line(&line, language))
        .filter(|line| !line.is_empty())
        .collect();
    merge_lines(lines, patterns)
}

/// Character-level OCR repair and spacing normalization for one line.
pub fn normalize_line(line: &str, language: DetectedLanguage) -> String {
    let fixed = fix_ocr_digits(line);
    let fixed = TIMES_SIGN.replace_all(&fixed, "${1}x${2}");
    let fixed = COLON_SPACING.replace_all(&fixed, "${1}: ");
    let fixed = WHITESPACE_RUN.replace_all(&fixed, " ");
    let fixed = fixed.trim();
    if language == DetectedLanguage::Swedish {
        fix_swedish_typos(fixed)
    } else {
        fixed.to_string()
    }
}

/// Replace O/o with 0 and l/I/| with 1 where they sit next to digits.
///
/// A letter after a digit is fixed when followed by a digit, another
/// confusable, a space, an `x`, a comma or the end. A letter before a digit is fixed unless it
/// follows another letter.
pub fn fix_ocr_digits(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    // Already-repaired output, so "1Ol" chains.
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        let fixed = match c {
            'O' | 'o' | 'l' | 'I' | '|' => {
                let next = chars.get(i + 1).copied();
                let after_digit = prev.is_some_and(|p| p.is_ascii_digit())
                    && next.map_or(true, |n| {
                        n.is_ascii_digit() || matches!(n, ' ' | 'x' | ',' | 'O' | 'o' | 'l' | 'I' | '|')
                    });
                let before_digit = next.is_some_and(|n| n.is_ascii_digit())
                    && !prev.is_some_and(char::is_alphabetic);
                match c {
                    _ if !(after_digit || before_digit) => c,
                    'O' | 'o' => '0',
                    _ => '1',
                }
            }
            _ => c,
        };
        out.push(fixed);
        prev = Some(fixed);
    }

    out
}

fn fix_swedish_typos(line: &str) -> String {
    let mut fixed = line.to_string();
    for (re, replacement) in SWEDISH_TYPO_PATTERNS.iter() {
        fixed = re
            .replace_all(&fixed, |caps: &Captures| {
                let starts_upper = caps[0].chars().next().is_some_and(char::is_uppercase);
                if starts_upper {
                    capitalize(replacement)
                } else {
                    (*replacement).to_string()
                }
            })
            .into_owned();
    }
    fixed
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn merge_lines(lines: Vec<String>, patterns: &LanguagePatterns) -> Vec<String> {
    let mut merged = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        let Some(next) = iter.peek() else {
            merged.push(line);
            break;
        };

        if patterns.intensity_word.is_match(&line)
            && !patterns.intensity_word.is_match(next)
            && !is_structural_header(next)
        {
            let label = line.trim_end_matches([':', '.', '!']).trim();
            merged.push(format!("{label}: {next}"));
            iter.next();
        } else if is_name_only(&line, patterns) && starts_with_count(next) {
            merged.push(format!("{line} {next}"));
            iter.next();
        } else {
            merged.push(line);
        }
    }

    merged
}

/// A short line with letters and nothing else, e.g. "Bench press".
fn is_name_only(line: &str, patterns: &LanguagePatterns) -> bool {
    line.chars().count() <= MAX_NAME_ONLY_CHARS
        && line.chars().any(char::is_alphabetic)
        && !line.chars().any(|c| c.is_ascii_digit() || c == ',')
        && !line.ends_with(':')
        && !is_structural_header(line)
        && !patterns.intensity_word.is_match(line)
        && !patterns.circuit_header.is_match(line)
}

fn starts_with_count(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == 'x' || c == 'X')
}

/// Split "Push-ups, squats, lunges" into separate units.
///
/// Only applies when every comma fragment is short and names a movement;
/// otherwise the line stays whole.
pub fn split_embedded(line: &str) -> Vec<String> {
    let fragments: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    let splittable = fragments.len() >= 2
        && fragments
            .iter()
            .all(|f| f.chars().count() <= MAX_EMBEDDED_FRAGMENT_CHARS && is_fitness_term(f));

    if splittable {
        fragments.into_iter().map(str::to_string).collect()
    } else {
        vec![line.to_string()]
    }
}
