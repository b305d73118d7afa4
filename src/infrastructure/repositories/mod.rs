pub mod elevenlabs_speech_repository;
pub mod history_repository;
pub mod speech_repository;
pub mod storage_repository;
pub mod voice_catalog_repository;

pub use elevenlabs_speech_repository::ElevenLabsSpeechRepository;
pub use history_repository::{HistoryRepository, PgHistoryRepository};
pub use speech_repository::{SpeechProviderError, SpeechRepository};
pub use storage_repository::{AudioStorageRepository, StorageError, SupabaseStorageRepository};
pub use voice_catalog_repository::StaticVoiceCatalogRepository;
