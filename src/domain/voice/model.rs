use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catalog grouping a voice is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceCategory {
    Narration,
    Conversational,
    Characters,
    News,
    Educational,
    Meditation,
    Advertisement,
    SocialMedia,
}

impl VoiceCategory {
    pub const ALL: [VoiceCategory; 8] = [
        VoiceCategory::Narration,
        VoiceCategory::Conversational,
        VoiceCategory::Characters,
        VoiceCategory::News,
        VoiceCategory::Educational,
        VoiceCategory::Meditation,
        VoiceCategory::Advertisement,
        VoiceCategory::SocialMedia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceCategory::Narration => "narration",
            VoiceCategory::Conversational => "conversational",
            VoiceCategory::Characters => "characters",
            VoiceCategory::News => "news",
            VoiceCategory::Educational => "educational",
            VoiceCategory::Meditation => "meditation",
            VoiceCategory::Advertisement => "advertisement",
            VoiceCategory::SocialMedia => "social-media",
        }
    }
}

impl std::fmt::Display for VoiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VoiceCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        VoiceCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("unknown voice category: {}", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBracket {
    Young,
    MiddleAged,
    Old,
}

/// Immutable catalog entry, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRecord {
    pub id: String,
    pub name: String,
    pub category: VoiceCategory,
    pub accent: String,
    pub language: String,
    pub gender: Gender,
    pub age: AgeBracket,
    pub description: String,
    pub tags: Vec<String>,
    pub use_cases: Vec<String>,
}

/// Catalog entry as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceView {
    pub id: String,
    pub name: String,
    pub category: VoiceCategory,
    pub accent: String,
    pub language: String,
    pub gender: Gender,
    pub age: AgeBracket,
    pub description: String,
    pub tags: Vec<String>,
    pub use_cases: Vec<String>,
    pub usage_count: u32,
    pub preview_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VoiceView {
    pub fn from_record(record: VoiceRecord, queried_at: DateTime<Utc>) -> Self {
        let usage_count = usage_count(&record.name);
        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            accent: record.accent,
            language: record.language,
            gender: record.gender,
            age: record.age,
            description: record.description,
            tags: record.tags,
            use_cases: record.use_cases,
            usage_count,
            preview_url: None,
            created_at: queried_at,
        }
    }
}

/// Pseudo usage count shown next to a voice. Stable for a given name.
pub fn usage_count(name: &str) -> u32 {
    let hash = name
        .bytes()
        .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(u32::from(byte)));
    1_000 + hash % 49_000
}
