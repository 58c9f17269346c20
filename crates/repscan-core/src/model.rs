use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::RepscanError;

/// Languages with a lexicon in [`crate::lexicon`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedLanguage {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "es")]
    Spanish,
    #[serde(alias = "fr")]
    French,
    #[serde(alias = "de")]
    German,
    #[serde(alias = "sv")]
    Swedish,
    #[serde(alias = "no", alias = "nb")]
    Norwegian,
    #[serde(alias = "da")]
    Danish,
    #[serde(alias = "fi")]
    Finnish,
}

impl DetectedLanguage {
    /// Every supported language, in tie-break order for detection.
    pub const ALL: [DetectedLanguage; 8] = [
        DetectedLanguage::English,
        DetectedLanguage::Spanish,
        DetectedLanguage::French,
        DetectedLanguage::German,
        DetectedLanguage::Swedish,
        DetectedLanguage::Norwegian,
        DetectedLanguage::Danish,
        DetectedLanguage::Finnish,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            DetectedLanguage::English => "en",
            DetectedLanguage::Spanish => "es",
            DetectedLanguage::French => "fr",
            DetectedLanguage::German => "de",
            DetectedLanguage::Swedish => "sv",
            DetectedLanguage::Norwegian => "no",
            DetectedLanguage::Danish => "da",
            DetectedLanguage::Finnish => "fi",
        }
    }

    pub fn is_nordic(self) -> bool {
        matches!(
            self,
            DetectedLanguage::Swedish
                | DetectedLanguage::Norwegian
                | DetectedLanguage::Danish
                | DetectedLanguage::Finnish
        )
    }

    /// Accepts an ISO code or the English language name, case-insensitive.
    pub fn from_str_loose(s: &str) -> Option<DetectedLanguage> {
        let lower = s.trim().to_lowercase();
        DetectedLanguage::ALL
            .into_iter()
            .find(|lang| lang.code() == lower || lang.to_string().to_lowercase() == lower)
            .or_else(|| match lower.as_str() {
                "nb" | "nn" | "norsk" => Some(DetectedLanguage::Norwegian),
                "svenska" => Some(DetectedLanguage::Swedish),
                _ => None,
            })
    }
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectedLanguage::English => "English",
            DetectedLanguage::Spanish => "Spanish",
            DetectedLanguage::French => "French",
            DetectedLanguage::German => "German",
            DetectedLanguage::Swedish => "Swedish",
            DetectedLanguage::Norwegian => "Norwegian",
            DetectedLanguage::Danish => "Danish",
            DetectedLanguage::Finnish => "Finnish",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DetectedLanguage {
    type Err = RepscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectedLanguage::from_str_loose(s).ok_or_else(|| RepscanError::UnknownLanguage(s.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Tabular,
    Narrative,
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFormat::Tabular => write!(f, "tabular"),
            TextFormat::Narrative => write!(f, "narrative"),
        }
    }
}

/// Coarse difficulty of a training day. Days carry the localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Easy,
    Medium,
    Hard,
    Rest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub is_reps: bool,
    pub reps: u32,
    /// e.g. "200m", "5km". Empty for rep-based exercises.
    pub distance: String,
    /// "MM:SS". Empty for rep-based exercises.
    pub duration: String,
    /// "MM:SS", or empty when the text gave no rest.
    pub rest_interval: String,
    pub notes: String,
    pub per_side: bool,
    #[serde(default)]
    pub media_links: Vec<String>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Exercise {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            sets: 0,
            is_reps: true,
            reps: 0,
            distance: String::new(),
            duration: String::new(),
            rest_interval: String::new(),
            notes: String::new(),
            per_side: false,
            media_links: Vec::new(),
        }
    }

    /// A synthetic record standing in for content that could not be parsed.
    pub fn placeholder(name: impl Into<String>, note: impl Into<String>) -> Self {
        let mut exercise = Exercise::new(name);
        exercise.sets = 1;
        exercise.notes = note.into();
        exercise
    }

    /// True when any numeric field was filled in.
    pub fn has_measure(&self) -> bool {
        self.sets > 0
            || self.reps > 0
            || !self.distance.is_empty()
            || !self.duration.is_empty()
            || !self.rest_interval.is_empty()
    }

    pub fn append_note(&mut self, note: &str) {
        if note.is_empty() || self.notes.contains(note) {
            return;
        }
        if !self.notes.is_empty() {
            self.notes.push_str("; ");
        }
        self.notes.push_str(note);
    }

    /// Enforce the reps/distance/duration exclusivity.
    ///
    /// Distance wins over duration; with neither present the exercise is
    /// rep-based.
    pub fn normalize_fields(&mut self) {
        if !self.distance.is_empty() {
            self.is_reps = false;
            self.duration.clear();
        } else if !self.duration.is_empty() {
            self.is_reps = false;
        } else {
            self.is_reps = true;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub intensity: String,
    pub original_language: DetectedLanguage,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        intensity: impl Into<String>,
        original_language: DetectedLanguage,
        exercises: Vec<Exercise>,
    ) -> Self {
        WorkoutDay {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            intensity: intensity.into(),
            original_language,
            exercises,
        }
    }
}
