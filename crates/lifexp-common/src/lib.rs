//! lifexp-common — Shared error types used across all lifexp crates.

pub mod error;

pub use error::{ApiError, LifexpError, Result};
