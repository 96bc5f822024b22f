//! CLI interface and argument parsing
//!
//! This module handles command-line flags and wires configuration into an
//! interactive session.

pub mod app;

// Re-export main types
pub use app::*;
