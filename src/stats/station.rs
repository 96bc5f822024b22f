//! Popular stations and trips

use crate::data::View;
use crate::stats::{mode, value_counts};

/// Most common start station, end station, and start→end pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub trip: (String, String),
    /// How many trips took the most common pair
    pub trip_count: usize,
}

pub fn station_stats(view: &View<'_>) -> Option<StationStats> {
    let start_station = mode(view.iter().map(|t| t.start_station()))?;
    let end_station = mode(view.iter().map(|t| t.end_station()))?;

    // Group by (start, end) and take the largest group.
    let ((from, to), trip_count) = value_counts(
        view.iter().map(|t| (t.start_station(), t.end_station())),
    )
    .into_iter()
    .next()?;

    Some(StationStats {
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        trip: (from.to_string(), to.to_string()),
        trip_count,
    })
}
