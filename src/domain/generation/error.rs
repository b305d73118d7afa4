use crate::error::AppError;
use crate::infrastructure::repositories::{SpeechProviderError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum GenerationServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too long: {0}")]
    TooLong(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("speech provider error: {0}")]
    Provider(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechProviderError> for GenerationServiceError {
    fn from(err: SpeechProviderError) -> Self {
        match err {
            SpeechProviderError::NotConfigured(msg) => GenerationServiceError::Configuration(msg),
            other => GenerationServiceError::Provider(other.to_string()),
        }
    }
}

impl From<StorageError> for GenerationServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotConfigured(msg) => GenerationServiceError::Configuration(msg),
            other => GenerationServiceError::Storage(other.to_string()),
        }
    }
}

impl From<AppError> for GenerationServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => GenerationServiceError::Invalid(msg),
            _ => GenerationServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<GenerationServiceError> for AppError {
    fn from(err: GenerationServiceError) -> Self {
        match err {
            GenerationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            GenerationServiceError::TooLong(msg) => AppError::PayloadTooLarge(msg),
            GenerationServiceError::Configuration(msg) => AppError::Configuration(msg),
            GenerationServiceError::Provider(msg) | GenerationServiceError::Storage(msg) => {
                AppError::ExternalService(msg)
            }
            GenerationServiceError::Dependency(msg) => AppError::Internal(msg),
            GenerationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
