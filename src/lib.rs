pub mod config;
pub mod constants;
pub mod data;
pub mod models;
pub mod plot;
