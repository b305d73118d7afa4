pub mod http_geo_lookup;
pub mod session_store;

pub use http_geo_lookup::HttpGeoLookup;
pub use session_store::MokaSessionStore;
