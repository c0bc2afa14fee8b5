//! # glossa-core
//!
//! Core types, configuration, and error handling shared by the Glossa crates.

pub mod config;
pub mod error;
pub mod language;

pub use error::GlossaError;
pub use language::Language;
