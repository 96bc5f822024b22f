//! Trip data: city lookup, loading, filtering and paging
//!
//! ```text
//!  city name ──► CityTable ──► CSV file
//!                                 │
//!                                 ▼
//!                  loader: parse + derive month/day/hour
//!                                 │
//!                                 ▼
//!                  filter: month, then day ──► View
//!                                                │
//!                                                ▼
//!                                  pager: 5 rows at a time
//! ```

pub mod city;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pager;

// Re-export main types
pub use city::*;
pub use filter::*;
pub use loader::*;
pub use model::*;
pub use pager::*;
