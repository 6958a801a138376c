use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported target languages
///
/// The set is fixed at compile time. Each variant maps to its own storage
/// table and to the human-readable name used when building provider prompts.
/// Adding a language means adding a variant here; the compiler then points
/// at every match that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    Spanish,
    Chinese,
    Italian,
}

impl Language {
    /// All supported languages, in schema creation order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::Chinese,
        Language::Italian,
    ];

    /// Wire identifier, also used as the storage table name
    pub fn identifier(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Chinese => "chinese",
            Language::Italian => "italian",
        }
    }

    /// Storage table name for this language
    ///
    /// Statically known per variant, so table names never come from
    /// request input.
    pub fn table_name(&self) -> &'static str {
        self.identifier()
    }

    /// Human-readable name used in provider prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Chinese => "Chinese",
            Language::Italian => "Italian",
        }
    }

    /// Whether prompts for this language must ask for a native-script
    /// rendering plus a parenthesized phonetic transliteration
    pub fn wants_transliteration(&self) -> bool {
        matches!(self, Language::Chinese)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "french" => Ok(Language::French),
            "spanish" => Ok(Language::Spanish),
            "chinese" => Ok(Language::Chinese),
            "italian" => Ok(Language::Italian),
            _ => Err(anyhow!("Unsupported language: {}", s)),
        }
    }
}
