use crate::domain::generation::{ProviderVoice, VoiceSettings};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SpeechProviderError {
    #[error("speech provider not configured: {0}")]
    NotConfigured(String),
    #[error("request to speech provider failed: {0}")]
    Request(String),
    #[error("speech provider returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("unexpected speech provider response: {0}")]
    Decode(String),
}

/// Repository for speech synthesis.
/// Abstracts the third-party provider (ElevenLabs or a compatible API).
///
/// The provider API key lives only inside implementations and never travels
/// to clients.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `text` with the given voice.
    ///
    /// Returns the complete MPEG audio buffer; nothing is streamed.
    async fn synthesize(
        &self,
        voice_id: &str,
        text: &str,
        settings: &VoiceSettings,
    ) -> Result<Vec<u8>, SpeechProviderError>;

    /// List the voices the provider account can use
    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, SpeechProviderError>;
}
