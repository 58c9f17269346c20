use repscan_core::model::Exercise;
use repscan_core::outcome::ParseOutcome;

pub fn format_outcome(outcome: &ParseOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Language: {}  Format: {}  Strategy: {}\n",
        outcome.language, outcome.format, outcome.strategy
    ));
    if outcome.low_confidence {
        out.push_str("Low confidence: no structure recognized, review [FALLBACK] entries\n");
    }

    for day in &outcome.days {
        out.push_str(&format!("\n=== {} [{}] ===\n\n", day.name, day.intensity));

        let max_name = day
            .exercises
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(10);
        for ex in &day.exercises {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                ex.name,
                describe(ex),
                width = max_name
            ));
            if !ex.notes.is_empty() {
                out.push_str(&format!("  {:<width$}  ({})\n", "", ex.notes, width = max_name));
            }
        }
    }

    if !outcome.warnings.is_empty() {
        out.push_str(&format!("\n{} line(s) kept as placeholders:\n", outcome.warnings.len()));
        for w in &outcome.warnings {
            out.push_str(&format!("  {}: {}\n", w.line_text, w.reason));
        }
    }

    out
}

fn describe(ex: &Exercise) -> String {
    let mut parts = Vec::new();
    if ex.sets > 0 {
        parts.push(format!("{} sets", ex.sets));
    }
    if ex.is_reps {
        if ex.reps > 0 {
            parts.push(format!("{} reps", ex.reps));
        }
    } else if !ex.distance.is_empty() {
        parts.push(ex.distance.clone());
    } else {
        parts.push(ex.duration.clone());
    }
    if ex.per_side {
        parts.push("per side".into());
    }
    if !ex.rest_interval.is_empty() {
        parts.push(format!("rest {}", ex.rest_interval));
    }
    if parts.is_empty() {
        "-".into()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reps_and_rest() {
        let mut ex = Exercise::new("Squats");
        ex.sets = 3;
        ex.reps = 10;
        ex.rest_interval = "01:30".into();
        assert_eq!(describe(&ex), "3 sets, 10 reps, rest 01:30");
    }

    #[test]
    fn test_describe_distance() {
        let mut ex = Exercise::new("Run");
        ex.sets = 1;
        ex.distance = "5km".into();
        ex.normalize_fields();
        assert_eq!(describe(&ex), "1 sets, 5km");
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&Exercise::new("Stretch")), "-");
    }
}
