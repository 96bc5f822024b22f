//! Interactive session
//!
//! This module owns all user-facing I/O: prompting, rendering results, and
//! the restart loop.

pub mod context;
pub mod controller;
pub mod prompt;
pub mod report;

// Re-export main types
pub use context::*;
pub use controller::*;
pub use prompt::*;
