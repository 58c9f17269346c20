use crate::lexicon::{IntensityLabels, LanguagePatternSet};
use crate::model::{DetectedLanguage, IntensityLevel};

/// Built-in lexicon for a language.
pub fn lexicon(language: DetectedLanguage) -> LanguagePatternSet {
    match language {
        DetectedLanguage::English => ENGLISH,
        DetectedLanguage::Spanish => SPANISH,
        DetectedLanguage::French => FRENCH,
        DetectedLanguage::German => GERMAN,
        DetectedLanguage::Swedish => SWEDISH,
        DetectedLanguage::Norwegian => NORWEGIAN,
        DetectedLanguage::Danish => DANISH,
        DetectedLanguage::Finnish => FINNISH,
    }
}

const ENGLISH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::English,
    day_markers: &["day", "session", "workout"],
    weekdays: [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ],
    easy_patterns: &["easy", "light", "gentle", "low intensity", "recovery run"],
    medium_patterns: &["medium", "moderate", "tempo", "steady"],
    hard_patterns: &["hard", "intense", "heavy", "high intensity", "max effort"],
    rest_patterns: &["rest day", "day off", "off day", "recovery day", "full rest"],
    rep_patterns: &["reps", "rep", "repetitions", "repetition"],
    set_patterns: &["sets", "set"],
    per_side_patterns: &[
        "per side", "each side", "per leg", "each leg", "per arm", "each arm", "per hand",
        "each hand", "/side", "/leg", "/arm",
    ],
    rest_words: &["rest", "recovery", "break"],
    round_words: &["rounds", "round", "circuits"],
    exercise_markers: &[
        "squat", "squats", "push-ups", "push ups", "pushups", "pull-ups", "lunges", "deadlift",
        "bench press", "plank", "burpees", "sit-ups", "crunches", "rows", "curls", "sprint",
        "exercise", "reps", "sets",
    ],
    day_prefix: "Day",
    training_suffix: "Training",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Easy",
        medium: "Medium",
        hard: "Hard",
        rest: "Rest",
    },
    sprint_name: "Sprint intervals",
};

const SPANISH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::Spanish,
    day_markers: &["día", "dia", "sesión", "sesion"],
    weekdays: [
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
        "domingo",
    ],
    easy_patterns: &["fácil", "facil", "suave", "ligero", "baja intensidad"],
    medium_patterns: &["medio", "moderado", "moderada"],
    hard_patterns: &["difícil", "dificil", "intenso", "intensa", "duro", "alta intensidad"],
    rest_patterns: &["día de descanso", "dia de descanso", "descanso total", "día libre"],
    rep_patterns: &["repeticiones", "repes", "reps"],
    set_patterns: &["series", "serie"],
    per_side_patterns: &[
        "por lado", "cada lado", "por pierna", "cada pierna", "por brazo", "cada brazo",
    ],
    rest_words: &["descanso", "descansar", "pausa"],
    round_words: &["rondas", "ronda", "vueltas"],
    exercise_markers: &[
        "sentadilla", "sentadillas", "flexiones", "zancadas", "peso muerto", "dominadas",
        "plancha", "press de banca", "ejercicio", "ejercicios", "entrenamiento",
        "calentamiento", "repeticiones",
    ],
    day_prefix: "Día",
    training_suffix: "Entrenamiento",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Fácil",
        medium: "Medio",
        hard: "Difícil",
        rest: "Descanso",
    },
    sprint_name: "Intervalos de sprint",
};

const FRENCH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::French,
    day_markers: &["jour", "séance", "seance"],
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    easy_patterns: &["facile", "léger", "légère", "doux", "faible intensité"],
    medium_patterns: &["moyen", "moyenne", "modéré", "modérée"],
    hard_patterns: &["difficile", "intense", "dur", "dure", "haute intensité"],
    rest_patterns: &["jour de repos", "repos complet", "jour off"],
    rep_patterns: &["répétitions", "repetitions", "rép", "reps"],
    set_patterns: &["séries", "série"],
    per_side_patterns: &[
        "par côté", "chaque côté", "par jambe", "chaque jambe", "par bras", "chaque bras",
    ],
    rest_words: &["repos", "récupération", "récup", "pause"],
    round_words: &["tours", "tour"],
    exercise_markers: &[
        "pompes", "fentes", "tractions", "soulevé de terre", "gainage", "développé couché",
        "exercice", "exercices", "entraînement", "échauffement", "répétitions",
    ],
    day_prefix: "Jour",
    training_suffix: "Entraînement",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Facile",
        medium: "Moyen",
        hard: "Difficile",
        rest: "Repos",
    },
    sprint_name: "Intervalles de sprint",
};

const GERMAN: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::German,
    day_markers: &["tag", "einheit"],
    weekdays: [
        "montag",
        "dienstag",
        "mittwoch",
        "donnerstag",
        "freitag",
        "samstag",
        "sonntag",
    ],
    easy_patterns: &["leicht", "locker", "ruhig", "niedrige intensität"],
    medium_patterns: &["mittel", "moderat", "mäßig"],
    hard_patterns: &["schwer", "hart", "intensiv", "hohe intensität"],
    rest_patterns: &["ruhetag", "pausentag", "trainingsfrei"],
    rep_patterns: &["wiederholungen", "wdh", "reps"],
    set_patterns: &["sätze", "satz", "serien"],
    per_side_patterns: &[
        "pro seite", "jede seite", "pro bein", "jedes bein", "pro arm", "jeder arm",
    ],
    rest_words: &["pause", "ruhe", "erholung"],
    round_words: &["runden", "runde"],
    exercise_markers: &[
        "kniebeugen", "kniebeuge", "liegestütze", "ausfallschritte", "klimmzüge", "kreuzheben",
        "bankdrücken", "rudern", "übung", "übungen", "aufwärmen", "wiederholungen", "sätze",
    ],
    day_prefix: "Tag",
    training_suffix: "Training",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Leicht",
        medium: "Mittel",
        hard: "Schwer",
        rest: "Ruhe",
    },
    sprint_name: "Sprintintervalle",
};

const SWEDISH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::Swedish,
    day_markers: &["dag", "pass", "träningspass"],
    weekdays: [
        "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag",
    ],
    easy_patterns: &["lätt", "lugn", "lugnt", "låg intensitet", "återhämtningspass"],
    medium_patterns: &["medel", "måttlig", "mellan"],
    hard_patterns: &["tung", "tungt", "hård", "hårt", "intensiv", "hög intensitet"],
    rest_patterns: &["vilodag", "ledig dag", "återhämtningsdag", "vila hela dagen"],
    rep_patterns: &["repetitioner", "upprepningar", "reps", "rep", "ggr", "gånger"],
    set_patterns: &["set", "serier", "omgångar"],
    per_side_patterns: &[
        "per sida", "varje sida", "per ben", "varje ben", "per arm", "varje arm", "/sida",
        "/ben", "/arm",
    ],
    rest_words: &["vila", "vilotid", "paus"],
    round_words: &["varv", "rundor"],
    exercise_markers: &[
        "knäböj", "marklyft", "bänkpress", "armhävningar", "utfall", "plankan", "rodd",
        "situps", "löpning", "övning", "övningar", "träning", "uppvärmning",
    ],
    day_prefix: "Dag",
    training_suffix: "Träning",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Lätt",
        medium: "Medel",
        hard: "Tung",
        rest: "Vila",
    },
    sprint_name: "Sprintervaller",
};

const NORWEGIAN: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::Norwegian,
    day_markers: &["dag", "økt"],
    weekdays: [
        "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag",
    ],
    easy_patterns: &["lett", "rolig", "lav intensitet"],
    medium_patterns: &["middels", "moderat"],
    hard_patterns: &["tung", "tungt", "hardt", "intensiv", "høy intensitet"],
    rest_patterns: &["hviledag", "fridag", "hvile hele dagen"],
    rep_patterns: &["repetisjoner", "gjentakelser", "reps", "ganger"],
    set_patterns: &["sett", "serier"],
    per_side_patterns: &[
        "per side", "hver side", "per bein", "hvert bein", "per arm", "hver arm",
    ],
    rest_words: &["hvile", "pause"],
    round_words: &["runder", "runde"],
    exercise_markers: &[
        "knebøy", "markløft", "benkpress", "armhevinger", "planken", "roing", "øvelse",
        "øvelser", "trening", "oppvarming", "løping",
    ],
    day_prefix: "Dag",
    training_suffix: "Trening",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Lett",
        medium: "Middels",
        hard: "Tung",
        rest: "Hvile",
    },
    sprint_name: "Sprintintervaller",
};

const DANISH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::Danish,
    day_markers: &["dag", "træningsdag"],
    weekdays: [
        "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag",
    ],
    easy_patterns: &["rolig", "lettere", "let træning", "lav intensitet"],
    medium_patterns: &["mellem", "moderat"],
    hard_patterns: &["hård", "hårdt", "intens", "høj intensitet"],
    rest_patterns: &["hviledag", "fridag"],
    rep_patterns: &["gentagelser", "reps", "gange"],
    set_patterns: &["sæt", "serier"],
    per_side_patterns: &[
        "per side", "hver side", "per ben", "hvert ben", "per arm", "hver arm",
    ],
    rest_words: &["hvile", "pause"],
    round_words: &["runder", "runde"],
    exercise_markers: &[
        "dødløft", "bænkpres", "armbøjninger", "udfald", "planke", "roning", "øvelse",
        "øvelser", "træning", "opvarmning", "løb",
    ],
    day_prefix: "Dag",
    training_suffix: "Træning",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Let",
        medium: "Mellem",
        hard: "Hård",
        rest: "Hvile",
    },
    sprint_name: "Sprintintervaller",
};

const FINNISH: LanguagePatternSet = LanguagePatternSet {
    language: DetectedLanguage::Finnish,
    day_markers: &["päivä", "paiva", "treeni"],
    weekdays: [
        "maanantai",
        "tiistai",
        "keskiviikko",
        "torstai",
        "perjantai",
        "lauantai",
        "sunnuntai",
    ],
    easy_patterns: &["kevyt", "helppo", "rauhallinen", "matala teho"],
    medium_patterns: &["keskitaso", "kohtalainen", "keskiraskas"],
    hard_patterns: &["raskas", "kova", "intensiivinen", "korkea teho"],
    rest_patterns: &["lepopäivä", "vapaapäivä"],
    rep_patterns: &["toistoa", "toistot", "toisto", "kertaa"],
    set_patterns: &["sarjaa", "sarjat", "sarja"],
    per_side_patterns: &[
        "per puoli", "kummallekin puolelle", "molemmin puolin", "per jalka", "per käsi",
    ],
    rest_words: &["lepo", "palautus", "tauko"],
    round_words: &["kierrosta", "kierrokset", "kierros"],
    exercise_markers: &[
        "kyykky", "maastaveto", "penkkipunnerrus", "punnerrukset", "leuanveto", "askelkyykky",
        "lankku", "soutu", "harjoitus", "harjoitukset", "lämmittely", "juoksu",
    ],
    day_prefix: "Päivä",
    training_suffix: "Harjoitus",
    default_intensity: IntensityLevel::Medium,
    intensity_labels: IntensityLabels {
        easy: "Kevyt",
        medium: "Keskitaso",
        hard: "Raskas",
        rest: "Lepo",
    },
    sprint_name: "Sprinttiintervallit",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_lexicon() {
        for lang in DetectedLanguage::ALL {
            let set = lexicon(lang);
            assert_eq!(set.language, lang);
            assert!(!set.day_markers.is_empty());
            assert!(!set.rest_words.is_empty());
        }
    }

    #[test]
    fn test_lexicon_terms_are_lowercase() {
        for lang in DetectedLanguage::ALL {
            let set = lexicon(lang);
            for term in set.day_markers.iter().chain(set.weekdays.iter()) {
                assert_eq!(*term, term.to_lowercase(), "{lang}: {term}");
            }
        }
    }
}
