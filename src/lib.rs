//! Bikeshare - interactive exploration of US bikeshare trips
//!
//! Loads a city's trip records, filters them by month and weekday, pages
//! through raw rows on request, and reports the most common travel times,
//! stations and trips, duration totals, and user types.

// Public modules
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod session;
pub mod stats;
pub mod ui;

// Re-export commonly used types
pub use error::{BikeshareError, Result};

/// Current version of bikeshare
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
