pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    GeneratedAudio, GenerationInput, GenerationRequest, ProviderVoice, ProviderVoicesResponse,
    StoredGeneration, VoiceSettings, MAX_TEXT_CHARS,
};
pub use error::GenerationServiceError;
pub use service::{GenerationService, GenerationServiceApi, AUDIO_CONTENT_TYPE};
