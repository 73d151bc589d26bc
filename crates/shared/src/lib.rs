//! # Classroom Shared
//!
//! Common types used across the classroom exercises: the keyed
//! repository contract, its error taxonomy and runner configuration.

pub mod config;
pub mod error;
pub mod repository;

// Re-exports
pub use config::*;
pub use error::*;
pub use repository::*;
