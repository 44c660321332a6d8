pub mod config;
pub mod resolve;
pub mod stats;
pub mod user;
