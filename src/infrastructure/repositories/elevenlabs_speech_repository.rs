use super::speech_repository::{SpeechProviderError, SpeechRepository};
use crate::domain::generation::{ProviderVoice, VoiceSettings, AUDIO_CONTENT_TYPE};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const API_KEY_HEADER: &str = "xi-api-key";

/// Longest upstream error body kept in logs
const MAX_LOGGED_BODY: usize = 500;

#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: WireVoiceSettings,
}

#[derive(Debug, Serialize)]
struct WireVoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct VoicesBody {
    voices: Vec<WireVoice>,
}

#[derive(Debug, Deserialize)]
struct WireVoice {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    labels: HashMap<String, String>,
}

impl From<WireVoice> for ProviderVoice {
    fn from(voice: WireVoice) -> Self {
        Self {
            voice_id: voice.voice_id,
            name: voice.name,
            category: voice.category,
            preview_url: voice.preview_url,
            labels: voice.labels,
        }
    }
}

/// ElevenLabs implementation of the speech repository
pub struct ElevenLabsSpeechRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model_id: String,
}

impl ElevenLabsSpeechRepository {
    pub fn new(
        http_client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        model_id: String,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model_id,
        }
    }

    fn api_key(&self) -> Result<&str, SpeechProviderError> {
        self.api_key.as_deref().ok_or_else(|| {
            SpeechProviderError::NotConfigured("ELEVENLABS_API_KEY is not set".to_string())
        })
    }

    fn text_to_speech_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.base_url,
            urlencoding::encode(voice_id)
        )
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.base_url)
    }

    /// Turn a non-success response into an error, keeping the body for the logs only
    async fn upstream_error(response: reqwest::Response) -> SpeechProviderError {
        let status = response.status().as_u16();
        let mut body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if body.len() > MAX_LOGGED_BODY {
            let cut = (0..=MAX_LOGGED_BODY)
                .rev()
                .find(|index| body.is_char_boundary(*index))
                .unwrap_or(0);
            body.truncate(cut);
        }
        SpeechProviderError::Upstream { status, body }
    }
}

#[async_trait]
impl SpeechRepository for ElevenLabsSpeechRepository {
    async fn synthesize(
        &self,
        voice_id: &str,
        text: &str,
        settings: &VoiceSettings,
    ) -> Result<Vec<u8>, SpeechProviderError> {
        let api_key = self.api_key()?;
        let start_time = std::time::Instant::now();

        let body = TextToSpeechBody {
            text,
            model_id: &self.model_id,
            voice_settings: WireVoiceSettings {
                stability: settings.stability,
                similarity_boost: settings.similarity_boost,
            },
        };

        tracing::debug!(
            voice_id = voice_id,
            model = %self.model_id,
            text_length = text.len(),
            "Calling ElevenLabs text-to-speech"
        );

        let response = self
            .http_client
            .post(self.text_to_speech_url(voice_id))
            .header(API_KEY_HEADER, api_key)
            .header(reqwest::header::ACCEPT, AUDIO_CONTENT_TYPE)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let err = Self::upstream_error(response).await;
            tracing::error!(
                provider = "elevenlabs",
                voice_id = voice_id,
                error = %err,
                "Text-to-speech call rejected"
            );
            return Err(err);
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechProviderError::Decode(e.to_string()))?
            .to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "elevenlabs",
            model = %self.model_id,
            voice_id = voice_id,
            latency_ms = duration.as_millis(),
            characters_count = text.chars().count(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }

    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, SpeechProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .http_client
            .get(self.voices_url())
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| SpeechProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let body: VoicesBody = response
            .json()
            .await
            .map_err(|e| SpeechProviderError::Decode(e.to_string()))?;

        tracing::debug!(count = body.voices.len(), "Provider voices fetched");

        Ok(body.voices.into_iter().map(ProviderVoice::from).collect())
    }
}
