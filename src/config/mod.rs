//! Configuration parsing and validation
//!
//! This module handles parsing of bikeshare.yml configuration files,
//! validation of city overrides, and resolution of the data directory.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
