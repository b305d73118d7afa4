use super::{QueryFilters, VoiceCatalogRepository, VoiceCategory, VoiceView};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Distinct values across the whole catalog, used for UI filter controls
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    pub categories: Vec<VoiceCategory>,
    pub languages: Vec<String>,
    pub accents: Vec<String>,
    pub use_cases: Vec<String>,
}

/// Result of one catalog query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceQueryResult {
    pub voices: Vec<VoiceView>,
    pub total: usize,
    pub total_all: usize,
    #[serde(flatten)]
    pub facets: CatalogFacets,
}

pub struct VoiceCatalogService {
    repository: Arc<dyn VoiceCatalogRepository>,
    facets: CatalogFacets,
}

impl VoiceCatalogService {
    pub fn new(repository: Arc<dyn VoiceCatalogRepository>) -> Self {
        // The catalog never changes after startup, so facets are computed once.
        let facets = Self::compute_facets(repository.as_ref());
        Self { repository, facets }
    }

    pub fn facets(&self) -> &CatalogFacets {
        &self.facets
    }

    /// Filter the catalog. Facets always describe the full catalog.
    pub fn query(&self, filters: &QueryFilters) -> VoiceQueryResult {
        let all_voices = self.repository.all_voices();
        let total_all = all_voices.len();
        let queried_at = Utc::now();

        let voices: Vec<VoiceView> = all_voices
            .into_iter()
            .filter(|voice| filters.matches(voice))
            .map(|voice| VoiceView::from_record(voice, queried_at))
            .collect();

        tracing::debug!(
            filters = ?filters,
            matched = voices.len(),
            total_all,
            "Voice catalog queried"
        );

        VoiceQueryResult {
            total: voices.len(),
            total_all,
            voices,
            facets: self.facets.clone(),
        }
    }

    pub fn find(&self, voice_id: &str) -> Option<VoiceView> {
        self.repository
            .all_voices()
            .into_iter()
            .find(|voice| voice.id == voice_id)
            .map(|voice| VoiceView::from_record(voice, Utc::now()))
    }

    fn compute_facets(repository: &dyn VoiceCatalogRepository) -> CatalogFacets {
        let mut languages = BTreeSet::new();
        let mut accents = BTreeSet::new();
        let mut use_cases = BTreeSet::new();

        for voice in repository.all_voices() {
            languages.insert(voice.language);
            accents.insert(voice.accent);
            use_cases.extend(voice.use_cases);
        }

        CatalogFacets {
            categories: VoiceCategory::ALL.to_vec(),
            languages: languages.into_iter().collect(),
            accents: accents.into_iter().collect(),
            use_cases: use_cases.into_iter().collect(),
        }
    }
}
