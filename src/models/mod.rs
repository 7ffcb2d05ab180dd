// src/models/mod.rs

//! Domain models for the hot-list fetcher.

mod config;
mod entry;

// Re-export all public types
pub use config::HotListConfig;
pub use entry::HotEntry;
