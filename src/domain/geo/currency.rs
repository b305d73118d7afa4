use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Session storage key the resolved currency is cached under
pub const CURRENCY_CACHE_KEY: &str = "decible_currency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }

    /// India prices in rupees, everyone else in dollars
    pub fn for_country(country: &str) -> Self {
        if country.trim().eq_ignore_ascii_case("IN") {
            Currency::Inr
        } else {
            Currency::Usd
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            other => Err(format!("unsupported currency: {}", other)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("geo lookup failed: {0}")]
pub struct GeoLookupError(pub String);

/// Source of the caller's country code, normally GET /api/geo
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn country(&self) -> Result<String, GeoLookupError>;
}

/// Key/value storage that lives as long as one browsing session
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String);
}

/// Picks the display currency for a session.
///
/// The first successful lookup is cached in the session store; later calls
/// never hit the network. A failed lookup resolves to INR and is not cached.
pub struct CurrencyResolver {
    geo: Arc<dyn GeoLookup>,
    session: Arc<dyn SessionStore>,
}

impl CurrencyResolver {
    pub fn new(geo: Arc<dyn GeoLookup>, session: Arc<dyn SessionStore>) -> Self {
        Self { geo, session }
    }

    pub async fn resolve(&self) -> Currency {
        if let Some(cached) = self.session.get(CURRENCY_CACHE_KEY).await {
            match cached.parse::<Currency>() {
                Ok(currency) => return currency,
                Err(e) => tracing::warn!(error = %e, "Ignoring invalid cached currency"),
            }
        }

        match self.geo.country().await {
            Ok(country) => {
                let currency = Currency::for_country(&country);
                self.session
                    .set(CURRENCY_CACHE_KEY, currency.as_str().to_string())
                    .await;
                currency
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geo lookup failed, assuming INR");
                Currency::Inr
            }
        }
    }
}
