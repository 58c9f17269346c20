use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use crate::error::RepscanError;
use crate::lexicon::{LanguagePatterns, HOUR_UNITS, MINUTE_UNITS, SECOND_UNITS};
use crate::model::Exercise;

/// Rest given in seconds is only trusted up to this value.
const MAX_REST_SECONDS: u32 = 90;
const MAX_AXB_SETS: u32 = 10;

/// "3x10", "4 x 8"
pub(crate) static AXB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*[x×]\s*(\d{1,3})\b").unwrap());

/// "3x30s", "5 x 1km": sets times a timed or distance measure.
static AXB_MEASURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})\s*[x×]\s*(\d{{1,4}}(?:[.,]\d+)?\s*(?:{DISTANCE_UNITS}|{SECOND_UNITS}|{MINUTE_UNITS})\b)"
    ))
    .unwrap()
});

/// "3 sets of 10"
static SETS_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*sets?\s+of\s+(\d+)\b").unwrap());

const DISTANCE_UNITS: &str =
    "kilometers|kilometres|km|meters|metres|meter|m|yards|yard|yds|yd|miles|mile|mi|feet|ft";

static DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(\d+(?:[.,]\d+)?)\s*({DISTANCE_UNITS})\b")).unwrap()
});

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").unwrap());

static TIMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d+(?:[.,]\d+)?)\s*(?:({SECOND_UNITS})|({MINUTE_UNITS})|({HOUR_UNITS}))\b"
    ))
    .unwrap()
});

/// A seconds value trailing a set/rep shape: "3x10 60s".
static TRAILING_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(\d+)\s*(?:{SECOND_UNITS})\b")).unwrap()
});

static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,3})\b").unwrap());

/// Numeric facts found in one unit of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub distance: Option<String>,
    pub duration: Option<String>,
    pub rest: Option<String>,
}

impl Measurements {
    pub fn has_signal(&self) -> bool {
        self.sets.is_some()
            || self.reps.is_some()
            || self.distance.is_some()
            || self.duration.is_some()
            || self.rest.is_some()
    }

    /// Anything besides rest.
    pub fn has_work(&self) -> bool {
        self.sets.is_some() || self.reps.is_some() || self.distance.is_some() || self.duration.is_some()
    }

    pub fn apply_to(&self, exercise: &mut Exercise) {
        if let Some(sets) = self.sets {
            exercise.sets = sets;
        }
        if let Some(reps) = self.reps {
            exercise.reps = reps;
        }
        if let Some(ref distance) = self.distance {
            exercise.distance = distance.clone();
        } else if let Some(ref duration) = self.duration {
            exercise.duration = duration.clone();
        }
        if let Some(ref rest) = self.rest {
            exercise.rest_interval = rest.clone();
        }
        exercise.normalize_fields();
    }
}

/// A rest value and where it was found, so other extractors can skip it.
#[derive(Debug, Clone, PartialEq)]
pub struct RestMatch {
    pub interval: String,
    pub span: Range<usize>,
}

/// Extract sets, reps, distance, duration and rest from one unit.
///
/// A set-by-rep shape beats separately worded sets and reps. Duration is
/// only considered when no distance was found, and both ignore the text
/// that held the rest value.
pub fn extract_measurements(
    text: &str,
    patterns: &LanguagePatterns,
) -> Result<Measurements, RepscanError> {
    let mut m = Measurements::default();
    let mut excluded: Vec<Range<usize>> = Vec::new();

    let timed_axb = AXB_MEASURE.captures(text).filter(|c| in_axb_range(c, text).unwrap_or(false));
    let axb = if timed_axb.is_none() {
        first_valid_axb(text)?
    } else {
        None
    };

    if let Some(ref caps) = timed_axb {
        m.sets = Some(parse_count(&caps[1], text)?);
        if let Some(whole) = caps.get(0) {
            excluded.push(whole.start()..caps.get(1).map_or(whole.start(), |g| g.end()));
        }
    } else if let Some((sets, reps, span)) = axb.clone() {
        m.sets = Some(sets);
        m.reps = Some(reps);
        excluded.push(span);
    } else if let Some(caps) = SETS_OF.captures(text) {
        m.sets = Some(parse_count(&caps[1], text)?);
        m.reps = Some(parse_count(&caps[2], text)?);
        if let Some(whole) = caps.get(0) {
            excluded.push(whole.range());
        }
    } else {
        if let Some(caps) = patterns.sets.captures(text) {
            m.sets = Some(parse_count(&caps[1], text)?);
            if let Some(whole) = caps.get(0) {
                excluded.push(whole.range());
            }
        }
        if let Some(caps) = patterns.reps.captures(text) {
            m.reps = Some(parse_count(&caps[1], text)?);
            if let Some(whole) = caps.get(0) {
                excluded.push(whole.range());
            }
        }
    }

    let trailing_from = axb.as_ref().map(|(_, _, span)| span.end);
    if let Some(rest) = find_rest(text, patterns, trailing_from)? {
        m.rest = Some(rest.interval);
        excluded.push(rest.span);
    }

    if let Some(caps) = find_outside(&DISTANCE, text, &excluded) {
        m.distance = Some(format_distance(&caps[1], &caps[2]));
    } else if let Some(duration) = find_duration(text, &excluded)? {
        m.duration = Some(duration);
    }

    if !m.has_work() {
        let bare: Vec<Captures> = BARE_NUMBER
            .captures_iter(text)
            .filter(|c| c.get(0).is_some_and(|g| !overlaps(&g.range(), &excluded)))
            .collect();
        if let [only] = bare.as_slice() {
            m.reps = Some(parse_count(&only[1], text)?);
        }
    }

    Ok(m)
}

fn in_axb_range(caps: &Captures, text: &str) -> Result<bool, RepscanError> {
    let sets = parse_count(&caps[1], text)?;
    Ok((1..=MAX_AXB_SETS).contains(&sets))
}

fn first_valid_axb(text: &str) -> Result<Option<(u32, u32, Range<usize>)>, RepscanError> {
    for caps in AXB.captures_iter(text) {
        let sets = parse_count(&caps[1], text)?;
        let reps = parse_count(&caps[2], text)?;
        if (1..=MAX_AXB_SETS).contains(&sets) && reps >= 1 {
            let span = caps.get(0).map_or(0..0, |g| g.range());
            return Ok(Some((sets, reps, span)));
        }
    }
    Ok(None)
}

/// Find a rest interval.
///
/// Tries "<n><unit> rest", then "rest <n>[<unit>]", then (when a set/rep
/// shape ended at `trailing_from`) a bare seconds value after it.
pub fn find_rest(
    text: &str,
    patterns: &LanguagePatterns,
    trailing_from: Option<usize>,
) -> Result<Option<RestMatch>, RepscanError> {
    for caps in patterns.rest_after.captures_iter(text) {
        let value = parse_count(&caps[1], text)?;
        let unit = caps.get(2).map_or("", |u| u.as_str());
        let interval = if is_minute_unit(unit) {
            Some(format_minutes(value))
        } else if value <= MAX_REST_SECONDS {
            Some(format_rest_seconds(value))
        } else {
            None
        };
        if let (Some(interval), Some(whole)) = (interval, caps.get(0)) {
            return Ok(Some(RestMatch {
                interval,
                span: whole.range(),
            }));
        }
    }

    if let Some(caps) = patterns.rest_before.captures(text) {
        let value = parse_count(&caps[1], text)?;
        let interval = match caps.get(2).map(|u| u.as_str()) {
            Some(unit) if is_minute_unit(unit) => format_minutes(value),
            _ if value <= MAX_REST_SECONDS => format_rest_seconds(value),
            _ => format_clock(value),
        };
        if let Some(whole) = caps.get(0) {
            return Ok(Some(RestMatch {
                interval,
                span: whole.range(),
            }));
        }
    }

    if let Some(from) = trailing_from {
        if let Some(caps) = TRAILING_SECONDS.captures(&text[from..]) {
            let value = parse_count(&caps[1], text)?;
            if value <= MAX_REST_SECONDS {
                let span = caps
                    .get(0)
                    .map_or(from..from, |g| g.start() + from..g.end() + from);
                return Ok(Some(RestMatch {
                    interval: format_rest_seconds(value),
                    span,
                }));
            }
        }
    }

    Ok(None)
}

fn find_duration(text: &str, excluded: &[Range<usize>]) -> Result<Option<String>, RepscanError> {
    if let Some(caps) = find_outside(&CLOCK, text, excluded) {
        let minutes = parse_count(&caps[1], text)?;
        let seconds = parse_count(&caps[2], text)?;
        if seconds < 60 {
            return Ok(Some(format!("{minutes:02}:{seconds:02}")));
        }
    }

    if let Some(caps) = find_outside(&TIMED, text, excluded) {
        let value = parse_decimal(&caps[1], text)?;
        let seconds = if caps.get(2).is_some() {
            value
        } else if caps.get(3).is_some() {
            value * 60.0
        } else {
            value * 3600.0
        };
        return Ok(Some(format_clock(seconds.round() as u32)));
    }

    Ok(None)
}

/// Normalize a duration cell or phrase: "45 sec", "1:30", "2 min".
pub fn parse_duration(text: &str) -> Result<Option<String>, RepscanError> {
    find_duration(text, &[])
}

/// Normalize a distance phrase: "400 m" becomes "400m".
pub fn parse_distance(text: &str) -> Option<String> {
    DISTANCE
        .captures(text)
        .map(|caps| format_distance(&caps[1], &caps[2]))
}

/// Whether the text contains a set/rep shape in any form.
pub fn has_set_rep_shape(text: &str, patterns: &LanguagePatterns) -> bool {
    AXB.is_match(text) || patterns.sets.is_match(text) || patterns.reps.is_match(text)
}

fn find_outside<'t>(re: &Regex, text: &'t str, excluded: &[Range<usize>]) -> Option<Captures<'t>> {
    re.captures_iter(text)
        .find(|c| c.get(0).is_some_and(|g| !overlaps(&g.range(), excluded)))
}

fn overlaps(range: &Range<usize>, excluded: &[Range<usize>]) -> bool {
    excluded
        .iter()
        .any(|e| range.start < e.end && e.start < range.end)
}

fn is_minute_unit(unit: &str) -> bool {
    let lower = unit.to_lowercase();
    MINUTE_UNITS.split('|').any(|u| u == lower)
}

fn format_distance(value: &str, unit: &str) -> String {
    let unit = match unit.to_lowercase().as_str() {
        "kilometers" | "kilometres" | "km" => "km",
        "yards" | "yard" | "yds" | "yd" => "yd",
        "miles" | "mile" | "mi" => "mi",
        "feet" | "ft" => "ft",
        _ => "m",
    };
    format!("{}{unit}", value.replace(',', "."))
}

/// "MM:SS" with minute rollover.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Rest in seconds keeps the raw seconds: 60 becomes "00:60".
pub fn format_rest_seconds(seconds: u32) -> String {
    format!("00:{seconds:02}")
}

fn format_minutes(minutes: u32) -> String {
    format!("{minutes:02}:00")
}

pub(crate) fn parse_count(digits: &str, line: &str) -> Result<u32, RepscanError> {
    digits
        .trim()
        .parse::<u32>()
        .map_err(|_| RepscanError::InvalidNumber {
            text: digits.to_string(),
            line: line.to_string(),
        })
}

fn parse_decimal(digits: &str, line: &str) -> Result<f64, RepscanError> {
    let value = digits
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| RepscanError::InvalidNumber {
            text: digits.to_string(),
            line: line.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) / 3600.0 {
        return Err(RepscanError::InvalidNumber {
            text: digits.to_string(),
            line: line.to_string(),
        });
    }
    Ok(value)
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
    fn test_axb_gives_sets_and_reps() {
        let m = extract_measurements("Bench press 3x10", en()).unwrap();
        assert_eq!(m.sets, Some(3));
        assert_eq!(m.reps, Some(10));
        assert_eq!(m.duration, None);
    }

    #[test]
    fn test_axb_beats_worded_counts() {
        let m = extract_measurements("Squats 4x8 (5 sets if fresh)", en()).unwrap();
        assert_eq!(m.sets, Some(4));
        assert_eq!(m.reps, Some(8));
    }

    #[test]
    fn test_axb_with_too_many_sets_is_ignored() {
        let m = extract_measurements("Row 12x10", en()).unwrap();
        assert_eq!(m.sets, None);
    }

    #[test]
    fn test_worded_sets_and_reps() {
        let m = extract_measurements("Lunges 3 sets 12 reps", en()).unwrap();
        assert_eq!(m.sets, Some(3));
        assert_eq!(m.reps, Some(12));
        let m = extract_measurements("3 sets of 15 push-ups", en()).unwrap();
        assert_eq!((m.sets, m.reps), (Some(3), Some(15)));
    }

    #[test]
    fn test_timed_sets() {
        let m = extract_measurements("Plank 3x30s", en()).unwrap();
        assert_eq!(m.sets, Some(3));
        assert_eq!(m.reps, None);
        assert_eq!(m.duration.as_deref(), Some("00:30"));
    }

    #[test]
    fn test_distance_and_units() {
        let m = extract_measurements("Easy run 5 km", en()).unwrap();
        assert_eq!(m.distance.as_deref(), Some("5km"));
        assert_eq!(parse_distance("400 meters").as_deref(), Some("400m"));
        assert_eq!(parse_distance("2,5 miles").as_deref(), Some("2.5mi"));
    }

    #[test]
    fn test_distance_suppresses_duration() {
        let m = extract_measurements("Run 3 km in 15 min", en()).unwrap();
        assert_eq!(m.distance.as_deref(), Some("3km"));
        assert_eq!(m.duration, None);
    }

    #[test]
    fn test_duration_rolls_over() {
        let m = extract_measurements("Wall sit 90 sec", en()).unwrap();
        assert_eq!(m.duration.as_deref(), Some("01:30"));
        assert_eq!(parse_duration("1:30").unwrap().as_deref(), Some("01:30"));
        assert_eq!(parse_duration("1.5 min").unwrap().as_deref(), Some("01:30"));
    }

    #[test]
    fn test_rest_seconds_do_not_roll_over() {
        let m = extract_measurements("Squats 3x10, 60s rest", en()).unwrap();
        assert_eq!(m.rest.as_deref(), Some("00:60"));
        assert_eq!(m.duration, None);
    }

    #[test]
    fn test_rest_before_value() {
        let m = extract_measurements("Deadlift 5x5 rest 2 min", en()).unwrap();
        assert_eq!(m.rest.as_deref(), Some("02:00"));
        assert_eq!(m.duration, None);
    }

    #[test]
    fn test_rest_after_over_limit_is_ignored() {
        let m = extract_measurements("Bike 120 sec rest", en()).unwrap();
        assert_eq!(m.rest, None);
        assert_eq!(m.duration.as_deref(), Some("02:00"));
    }

    #[test]
    fn test_trailing_seconds_after_axb_is_rest() {
        let m = extract_measurements("Pull-ups 4x6 45s", en()).unwrap();
        assert_eq!(m.rest.as_deref(), Some("00:45"));
        assert_eq!(m.duration, None);
    }

    #[test]
    fn test_single_bare_number_is_reps() {
        let m = extract_measurements("Push-ups 20", en()).unwrap();
        assert_eq!(m.reps, Some(20));
        let m = extract_measurements("Week 1 of 4", en()).unwrap();
        assert!(!m.has_signal());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = extract_measurements("Squats 99999999999 reps", en()).unwrap_err();
        assert!(matches!(err, RepscanError::InvalidNumber { .. }));
    }

    #[test]
    fn test_apply_keeps_exclusivity() {
        let m = extract_measurements("Run 2 km", en()).unwrap();
        let mut ex = Exercise::new("Run");
        m.apply_to(&mut ex);
        assert!(!ex.is_reps);
        assert_eq!(ex.distance, "2km");
        assert!(ex.duration.is_empty());
    }
}
