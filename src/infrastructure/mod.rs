pub mod auth;
pub mod backend;
pub mod config;
pub mod db;
pub mod geo;
pub mod http;
pub mod repositories;
