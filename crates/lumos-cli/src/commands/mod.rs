pub mod config;
pub mod enhance;
pub mod stats;
