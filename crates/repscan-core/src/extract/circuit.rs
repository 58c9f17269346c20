use tracing::debug;

use crate::lexicon::LanguagePatterns;
use crate::model::Exercise;

use super::is_structural_header;
use super::narrative::{parse_unit, standalone_rest};
use super::preprocess::split_embedded;

/// Tag exercises that sit under a "N rounds" header.
///
/// Members run from the header to the next header. A member that was
/// already extracted (same lowercase name and reps) is tagged in place;
/// anything new, such as text on the header line itself, is added.
pub fn apply_circuits(lines: &[String], exercises: &mut Vec<Exercise>, patterns: &LanguagePatterns) {
    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = patterns.circuit_header.captures(&lines[i]) else {
            i += 1;
            continue;
        };
        let Ok(rounds) = caps[2].parse::<u32>() else {
            i += 1;
            continue;
        };
        let title = caps[1]
            .trim()
            .trim_end_matches([':', '-', '–', ','])
            .trim()
            .to_string();

        let mut members: Vec<String> = Vec::new();
        // "Run 400m, 3 rounds": the title is itself the exercise.
        if title.chars().any(|c| c.is_ascii_digit()) {
            members.push(title);
        }
        let trailing = caps[3].trim();
        if !trailing.is_empty() {
            members.extend(split_embedded(trailing));
        }

        let mut j = i + 1;
        while j < lines.len()
            && !is_structural_header(&lines[j])
            && !patterns.circuit_header.is_match(&lines[j])
        {
            members.extend(split_embedded(&lines[j]));
            j += 1;
        }

        debug!(rounds, members = members.len(), "circuit block");
        for member in &members {
            tag_member(member, rounds, exercises, patterns);
        }
        i = j;
    }
}

fn tag_member(
    unit: &str,
    rounds: u32,
    exercises: &mut Vec<Exercise>,
    patterns: &LanguagePatterns,
) {
    // Rest lines were attached to the previous exercise by the main pass.
    if standalone_rest(unit, patterns).is_some() {
        return;
    }
    // Failures were already reported by the main pass.
    let Ok(Some(mut candidate)) = parse_unit(unit, patterns) else {
        return;
    };
    let note = format!("Circuit: {rounds} rounds");
    let key = dedup_key(&candidate);

    if let Some(existing) = exercises.iter_mut().find(|e| dedup_key(e) == key) {
        if existing.sets <= 1 {
            existing.sets = rounds;
        }
        existing.append_note(&note);
        return;
    }

    if candidate.name.is_empty() {
        candidate.name = format!("Core Exercise {}", exercises.len() + 1);
    }
    if candidate.sets <= 1 {
        candidate.sets = rounds;
    }
    candidate.append_note(&note);
    exercises.push(candidate);
}

fn dedup_key(exercise: &Exercise) -> (String, u32) {
    (exercise.name.to_lowercase(), exercise.reps)
}

#[cfg(test)]
mod tests {
    use crate::extract::narrative::extract_exercises;
    use crate::lexicon::pattern_set;
    use crate::model::DetectedLanguage;

    #[test]
    fn test_members_are_tagged_not_duplicated() {
        let content = "Core training: 3 rounds of\nPlank 30s\nPush-ups 10\nSquats 3x15";
        let extraction = extract_exercises(content, pattern_set(DetectedLanguage::English));
        assert_eq!(extraction.exercises.len(), 3);
        let plank = &extraction.exercises[0];
        assert_eq!(plank.name, "Plank");
        assert_eq!(plank.sets, 3);
        assert_eq!(plank.notes, "Circuit: 3 rounds");
        assert_eq!(extraction.exercises[1].sets, 3);
        assert_eq!(extraction.exercises[2].sets, 3);
    }

    #[test]
    fn test_header_line_content_is_added() {
        let content = "3 rounds: burpees 10";
        let extraction = extract_exercises(content, pattern_set(DetectedLanguage::English));
        assert_eq!(extraction.exercises.len(), 1);
        let ex = &extraction.exercises[0];
        assert_eq!(ex.name, "burpees");
        assert_eq!((ex.sets, ex.reps), (3, 10));
    }

    #[test]
    fn test_rest_line_is_not_a_member() {
        let content = "Core training: 3 rounds of\nPlank 30s\nPush-ups 10\nRest 60s";
        let extraction = extract_exercises(content, pattern_set(DetectedLanguage::English));
        assert_eq!(extraction.exercises.len(), 2);
        assert_eq!(extraction.exercises[1].name, "Push-ups");
        assert_eq!(extraction.exercises[1].rest_interval, "00:60");
    }

    #[test]
    fn test_unnamed_member_gets_position() {
        let content = "Squats 3x10\n2 rounds: 20 reps";
        let extraction = extract_exercises(content, pattern_set(DetectedLanguage::English));
        let last = extraction.exercises.last().unwrap();
        assert_eq!(last.name, "Core Exercise 2");
        assert_eq!((last.sets, last.reps), (2, 20));
    }

    #[test]
    fn test_swedish_rounds() {
        let content = "3 varv:\nArmhävningar 10\nKnäböj 15";
        let extraction = extract_exercises(content, pattern_set(DetectedLanguage::Swedish));
        assert_eq!(extraction.exercises.len(), 2);
        assert!(extraction.exercises.iter().all(|e| e.sets == 3));
    }
}
