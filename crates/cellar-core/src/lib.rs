//! Core types, configuration, and errors for the cellar rack generator.
//!
//! This crate provides the foundational types used across all other cellar crates:
//! - Geometry and color value types
//! - The immutable generation configuration
//! - Error types

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
