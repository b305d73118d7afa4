pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{HistoryItem, HistoryResponse};
pub use error::HistoryServiceError;
pub use model::{GenerationHistoryEntry, GenerationStatus, NewHistoryEntry};
pub use service::{HistoryService, HistoryServiceApi};
