use std::collections::BTreeMap;

use crate::model::TextFormat;
use crate::segment::tabular::header_keyword_hits;

/// Number of non-empty lines inspected when classifying.
const SAMPLE_SIZE: usize = 5;
/// Lines that must agree with the dominant column count.
const MIN_CONSISTENT_LINES: usize = 3;
const MIN_HEADER_KEYWORDS: usize = 2;

pub fn classify_format(text: &str) -> TextFormat {
    if is_tabular(text) {
        TextFormat::Tabular
    } else {
        TextFormat::Narrative
    }
}

/// Decide whether the text is a table of rows and columns.
///
/// Either the sampled lines share a column layout and one column holds
/// exercise names, or the first line is a header naming at least two
/// workout columns and every following sampled line is split into cells.
pub fn is_tabular(text: &str) -> bool {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_SIZE)
        .collect();
    if lines.len() < 2 {
        return false;
    }

    let counts: Vec<usize> = lines.iter().map(|l| separator_count(l)).collect();
    if has_consistent_columns(&counts) && has_name_column(&lines) {
        return true;
    }

    header_keyword_hits(lines[0]) >= MIN_HEADER_KEYWORDS && counts[1..].iter().all(|&c| c > 0)
}

/// Split a line into cells at tabs or runs of 2+ spaces.
pub fn split_columns(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut gap_start = 0;
    let mut space_count = 0;
    let mut saw_tab = false;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if space_count == 0 {
                gap_start = i;
                saw_tab = false;
            }
            space_count += 1;
            saw_tab |= c == '\t';
            if space_count >= 2 || saw_tab {
                if let Some(s) = start.take() {
                    segments.push(&line[s..gap_start]);
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(line[s..].trim_end());
    }

    segments
}

fn separator_count(line: &str) -> usize {
    split_columns(line).len().saturating_sub(1)
}

fn has_consistent_columns(counts: &[usize]) -> bool {
    let mut freq: BTreeMap<usize, usize> = BTreeMap::new();
    for &c in counts {
        *freq.entry(c).or_default() += 1;
    }
    // Highest frequency wins; ties go to the smaller count.
    let mode = freq
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(count, _)| *count)
        .unwrap_or(0);
    if mode == 0 {
        return false;
    }
    counts.iter().filter(|c| c.abs_diff(mode) <= 1).count() >= MIN_CONSISTENT_LINES
}

fn has_name_column(lines: &[&str]) -> bool {
    let rows: Vec<Vec<&str>> = lines.iter().map(|l| split_columns(l)).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    (0..width).any(|col| {
        let cells: Vec<&str> = rows.iter().filter_map(|r| r.get(col).copied()).collect();
        let named = cells.iter().filter(|c| looks_like_name(c)).count();
        named >= 2 && named * 2 > cells.len()
    })
}

/// A cell with at least three letters and no digits.
pub(crate) fn looks_like_name(cell: &str) -> bool {
    cell.chars().filter(|c| c.is_alphabetic()).count() >= 3
        && !cell.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_columns_tabs_and_gaps() {
        assert_eq!(split_columns("Squats\t4\t12"), vec!["Squats", "4", "12"]);
        assert_eq!(
            split_columns("Bench press   3   10 "),
            vec!["Bench press", "3", "10"]
        );
        assert_eq!(split_columns("  single line "), vec!["single line"]);
        assert!(split_columns("").is_empty());
    }

    #[test]
    fn test_tab_separated_header_is_tabular() {
        let text = "Exercise\tSets\tReps\nSquats\t4\t12\nLunges\t3\t10\nPlank\t3\t30s";
        assert_eq!(classify_format(text), TextFormat::Tabular);
    }

    #[test]
    fn test_header_with_single_spaces_is_tabular() {
        let text = "Day Exercise Sets Reps\nMonday  Squats  4  12";
        assert!(is_tabular(text));
    }

    #[test]
    fn test_narrative_plan() {
        let text = "Day 1: Upper body\nBench press 3x10\nPull-ups 3x8\n\nDay 2: Legs\nSquats 4x8";
        assert_eq!(classify_format(text), TextFormat::Narrative);
    }

    #[test]
    fn test_numbers_only_columns_are_not_a_table() {
        // Consistent gaps but no column of names.
        let text = "1  2  3\n4  5  6\n7  8  9";
        assert!(!is_tabular(text));
    }

    #[test]
    fn test_single_line_is_not_tabular() {
        assert!(!is_tabular("Exercise\tSets\tReps"));
        assert!(!is_tabular(""));
    }
}
