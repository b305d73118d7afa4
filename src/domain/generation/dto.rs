use super::error::GenerationServiceError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use uuid::Uuid;

/// Longest text accepted in a single generation
pub const MAX_TEXT_CHARS: usize = 5_000;

const DEFAULT_STABILITY: f32 = 0.5;
const DEFAULT_SIMILARITY_BOOST: f32 = 0.5;

/// Request for POST /api/generate
///
/// Required fields are optional here so a missing value becomes a 400 with a
/// readable message instead of a deserialization rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub settings: Option<VoiceSettings>,
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    #[serde(default = "default_stability")]
    pub stability: f32,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f32,
}

fn default_stability() -> f32 {
    DEFAULT_STABILITY
}

fn default_similarity_boost() -> f32 {
    DEFAULT_SIMILARITY_BOOST
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }
}

impl VoiceSettings {
    fn validate(&self) -> Result<(), GenerationServiceError> {
        for (name, value) in [
            ("stability", self.stability),
            ("similarityBoost", self.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenerationServiceError::Invalid(format!(
                    "{} must be between 0 and 1",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Snapshot stored alongside a history entry
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "stability": self.stability,
            "similarityBoost": self.similarity_boost,
        })
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationInput {
    pub text: String,
    pub voice_id: String,
    pub voice_name: Option<String>,
    pub settings: VoiceSettings,
}

impl GenerationInput {
    pub fn char_count(&self) -> i32 {
        i32::try_from(self.text.chars().count()).unwrap_or(i32::MAX)
    }
}

impl GenerationRequest {
    pub fn validate(self) -> Result<GenerationInput, GenerationServiceError> {
        let text = self
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| GenerationServiceError::Invalid("text is required".to_string()))?;

        let voice_id = self
            .voice_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GenerationServiceError::Invalid("voiceId is required".to_string()))?;

        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(GenerationServiceError::TooLong(format!(
                "Text must be {} characters or less, got {}",
                MAX_TEXT_CHARS, char_count
            )));
        }

        let settings = self.settings.unwrap_or_default();
        settings.validate()?;

        Ok(GenerationInput {
            text,
            voice_id,
            voice_name: self.voice_name.filter(|name| !name.trim().is_empty()),
            settings,
        })
    }
}

/// Raw provider output for one generation
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    pub audio_data: Vec<u8>,
    pub char_count: i32,
}

/// Generation that was uploaded and recorded in history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredGeneration {
    pub audio_url: String,
    pub character_count: i32,
    pub credits_used: i32,
    pub history_id: Uuid,
}

/// Voice as listed by the speech provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderVoice {
    pub voice_id: String,
    pub name: String,
    pub category: Option<String>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Response for GET /api/voices/provider
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderVoicesResponse {
    pub voices: Vec<ProviderVoice>,
}
