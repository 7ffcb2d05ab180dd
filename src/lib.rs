// src/lib.rs

//! Douyin hot-list fetcher library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod presenter;
pub mod services;
pub mod utils;
