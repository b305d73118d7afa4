use super::model::{VoiceCategory, VoiceRecord};

/// Sentinel clients send for "no constraint" on a dimension
const ALL_SENTINEL: &str = "all";

/// Normalised catalog filters. Every dimension is optional and they combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilters {
    pub category: Option<VoiceCategory>,
    pub language: Option<String>,
    pub use_case: Option<String>,
    search: Option<String>,
}

impl QueryFilters {
    /// Build filters from raw query values.
    ///
    /// Blank values, `all`, and categories that do not exist are treated as
    /// absent rather than rejected.
    pub fn from_raw(
        category: Option<&str>,
        language: Option<&str>,
        use_case: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            category: normalize(category).and_then(|value| value.parse().ok()),
            language: normalize(language),
            use_case: normalize(use_case),
            search: normalize(search).map(|value| value.to_lowercase()),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.language.is_none()
            && self.use_case.is_none()
            && self.search.is_none()
    }

    pub fn matches(&self, voice: &VoiceRecord) -> bool {
        if let Some(category) = self.category {
            if voice.category != category {
                return false;
            }
        }

        if let Some(language) = &self.language {
            if voice.language.to_lowercase() != language.to_lowercase() {
                return false;
            }
        }

        if let Some(use_case) = &self.use_case {
            if !voice.use_cases.iter().any(|candidate| candidate == use_case) {
                return false;
            }
        }

        match &self.search {
            Some(term) => matches_search(voice, term),
            None => true,
        }
    }
}

/// `term` is already lowercase
fn matches_search(voice: &VoiceRecord, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&voice.name)
        || contains(&voice.description)
        || contains(voice.category.as_str())
        || contains(&voice.accent)
        || voice.tags.iter().any(|tag| contains(tag))
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(ALL_SENTINEL))
        .map(str::to_string)
}
