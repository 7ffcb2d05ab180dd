//! Utility functions and helpers.

pub mod http;
pub mod url;
pub mod user_agent;

pub use user_agent::pick_user_agent;
