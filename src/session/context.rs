//! Session context
//!
//! The context holds what stays fixed across restarts: the loader with its
//! city table, and how chatty the output should be.

use crate::data::{CityTable, Loader};

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Prompts and results only
    Quiet = 1,
    Normal = 2,
    /// Adds computation times
    Verbose = 3,
}

/// State shared by every pass of a session
#[derive(Debug, Clone)]
pub struct Context {
    /// Reads city files
    pub loader: Loader,

    /// Verbosity level
    pub verbosity: Verbosity,
}

impl Context {
    /// Create a new context with default settings
    pub fn new(table: CityTable) -> Self {
        Context {
            loader: Loader::new(table),
            verbosity: Verbosity::Normal,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Whether informational lines (row counts, empty-page notices) are shown
    pub fn show_info(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    /// Whether computation times are shown
    pub fn show_timing(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
