pub mod api;
pub mod card;
pub mod config;
pub mod matching;
pub mod models;
pub mod normalizer;
pub mod server;
