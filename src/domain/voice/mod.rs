pub mod filters;
pub mod model;
pub mod service;

pub use filters::QueryFilters;
pub use model::{usage_count, AgeBracket, Gender, VoiceCategory, VoiceRecord, VoiceView};
pub use service::{CatalogFacets, VoiceCatalogService, VoiceQueryResult};

/// Source of catalog records.
///
/// Implementations hand out an owned copy on every call so queries never touch
/// the shared collection.
pub trait VoiceCatalogRepository: Send + Sync {
    fn all_voices(&self) -> Vec<VoiceRecord>;
}
