//! Shared types, lookup tables, and pure helpers for Karnataka Disaster Watch
//!
//! This crate contains everything that does not perform I/O, so it can be
//! used by both the backend and the browser (via WASM).

pub mod catalog;
pub mod error;
pub mod format;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use error::*;
pub use format::*;
pub use models::*;
pub use types::*;
pub use validation::*;
