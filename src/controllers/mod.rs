pub mod generation;
pub mod geo;
pub mod health;
pub mod history;
pub mod voices;
