use axum::{http::HeaderMap, Json};

use crate::domain::geo::{resolve_country, GeoResponse, COUNTRY_HEADER};

/// GET /api/geo - Country of the caller as reported by the edge
pub async fn get_geo(headers: HeaderMap) -> Json<GeoResponse> {
    let header_value = headers.get(COUNTRY_HEADER).and_then(|v| v.to_str().ok());
    let country = resolve_country(header_value);

    tracing::debug!(header = ?header_value, country = %country, "Geo resolved");

    Json(GeoResponse { country })
}
