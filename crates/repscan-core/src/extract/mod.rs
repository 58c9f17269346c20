pub mod circuit;
pub mod name;
pub mod narrative;
pub mod numbers;
pub mod preprocess;
pub mod tabular;

use regex::Regex;
use std::sync::LazyLock;

use crate::model::Exercise;
use crate::outcome::ParseWarning;

/// Exercises from one day block, plus the units that failed to parse.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub exercises: Vec<Exercise>,
    pub warnings: Vec<ParseWarning>,
}

/// Common movements across the supported languages.
static FITNESS_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"squats?|push[\s\-]?ups?|pull[\s\-]?ups?|chin[\s\-]?ups?|lunges?|deadlifts?|",
        r"bench\s+press|overhead\s+press|press|rows?|rowing|planks?|burpees?|crunch(?:es)?|",
        r"sit[\s\-]?ups?|curls?|dips?|jumping\s+jacks|mountain\s+climbers?|kettlebells?|",
        r"dumbbells?|barbells?|runs?|running|jog(?:ging)?|sprints?|bike|cycling|swim(?:ming)?|",
        r"skipping|jump\s+rope|box\s+jumps?|step[\s\-]?ups?|thrusters?|snatch(?:es)?|cleans?|swings?|",
        r"knäböj|marklyft|bänkpress|armhävningar|utfall|plankan?|rodd|chins|situps|löpning|",
        r"sentadillas?|flexiones|zancadas|peso\s+muerto|dominadas|plancha|",
        r"pompes|fentes|tractions|gainage|",
        r"kniebeugen?|liegestütze|ausfallschritte|klimmzüge|kreuzheben|bankdrücken|",
        r"knebøy|markløft|armhevinger|benkpress|",
        r"dødløft|armbøjninger|bænkpres|udfald|",
        r"kyykky|askelkyykky|punnerrukset|leuanveto|maastaveto|lankku|soutu|juoksu",
        r")\b"
    ))
    .unwrap()
});

/// A whole line that only names a workout section ("Warm-up:", "Styrka").
static STRUCTURAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\s*(?:",
        r"warm[\s\-]?ups?|cool[\s\-]?downs?|strength(?:\s+training)?|cardio|conditioning|finisher|",
        r"accessory(?:\s+work)?|main\s+(?:set|workout)|mobility|stretching|core|",
        r"uppvärmning|nedvarvning|styrka|styrketräning|kondition|rörlighet|stretch|",
        r"calentamiento|enfriamiento|fuerza|estiramientos|",
        r"échauffement|retour\s+au\s+calme|renforcement|musculation|étirements|",
        r"aufwärmen|abwärmen|krafttraining|kraft|dehnen|",
        r"oppvarming|nedtrapping|styrke|styrketrening|tøying|",
        r"opvarmning|nedkøling|styrketræning|udstrækning|",
        r"lämmittely|jäähdyttely|voimaharjoittelu|venyttely",
        r")\s*[:.\-–]?\s*$"
    ))
    .unwrap()
});

pub fn is_fitness_term(text: &str) -> bool {
    FITNESS_TERMS.is_match(text)
}

/// The first fitness term in the text, as written.
pub fn fitness_term(text: &str) -> Option<&str> {
    FITNESS_TERMS.find(text).map(|m| m.as_str())
}

pub fn is_structural_header(line: &str) -> bool {
    STRUCTURAL_HEADER.is_match(line)
}
