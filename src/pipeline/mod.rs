//! Pipeline entry points.
//!
//! - `run_hot`: fetch the hot list and normalize it

pub mod hot;

pub use hot::{parse_limit, run_hot};
