pub mod auth;
pub mod generation;
pub mod geo;
pub mod history;
pub mod voice;
