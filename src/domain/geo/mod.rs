pub mod currency;

pub use currency::{Currency, CurrencyResolver, GeoLookup, GeoLookupError, SessionStore, CURRENCY_CACHE_KEY};

use serde::{Deserialize, Serialize};

/// Header the edge proxy sets with the caller's two-letter country code
pub const COUNTRY_HEADER: &str = "x-vercel-ip-country";

/// Country assumed when the edge header is missing or unusable
pub const DEFAULT_COUNTRY: &str = "IN";

/// Response for GET /api/geo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResponse {
    pub country: String,
}

/// Resolve the caller's country from the edge header value.
pub fn resolve_country(header_value: Option<&str>) -> String {
    header_value
        .map(str::trim)
        .filter(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|code| code.to_ascii_uppercase())
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}
