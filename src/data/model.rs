//! Trip records, the loaded dataset, and filtered views over it

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::data::city::City;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a 1-based month, if it is one
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Full English name of a weekday (`Monday`, not `Mon`)
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One trip as it appears in a city's data file
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Seconds, never negative
    pub trip_duration: f64,
    /// Empty cells in the source become `None`
    pub user_type: Option<String>,
}

/// A trip plus the fields derived from its start time.
///
/// Derived fields are private and computed in [`Trip::new`], so they can
/// never drift from `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    row: usize,
    record: TripRecord,
    month: u32,
    day_of_week: Weekday,
    hour: u32,
}

impl Trip {
    /// Derive month, weekday and hour from the record's start time
    pub fn new(row: usize, record: TripRecord) -> Self {
        let start = record.start_time;
        Trip {
            row,
            month: start.month(),
            day_of_week: start.weekday(),
            hour: start.hour(),
            record,
        }
    }

    /// 0-based position of the trip in the source file
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn record(&self) -> &TripRecord {
        &self.record
    }

    /// 1-based month of the start time
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// 0-23
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn start_station(&self) -> &str {
        &self.record.start_station
    }

    pub fn end_station(&self) -> &str {
        &self.record.end_station
    }

    pub fn trip_duration(&self) -> f64 {
        self.record.trip_duration
    }

    pub fn user_type(&self) -> Option<&str> {
        self.record.user_type.as_deref()
    }
}

/// All trips of one city, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: City,
    trips: Vec<Trip>,
}

impl Dataset {
    /// Build a dataset from records, numbering rows in the given order
    pub fn from_records(city: City, records: Vec<TripRecord>) -> Self {
        let trips = records
            .into_iter()
            .enumerate()
            .map(|(row, record)| Trip::new(row, record))
            .collect();
        Dataset { city, trips }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of trips
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// A view over every trip
    pub fn view(&self) -> View<'_> {
        View {
            trips: &self.trips,
            indices: (0..self.trips.len()).collect(),
        }
    }

    /// A view over the trips whose positions are listed in `indices`
    pub fn select(&self, indices: &[usize]) -> View<'_> {
        View {
            trips: &self.trips,
            indices: indices
                .iter()
                .copied()
                .filter(|&idx| idx < self.trips.len())
                .collect(),
        }
    }
}

/// Read-only subset of a [`Dataset`], sharing its trips.
///
/// Holds positions into the dataset rather than copies, so narrowing a view
/// never touches the underlying trips.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    trips: &'a [Trip],
    indices: Vec<usize>,
}

impl<'a> View<'a> {
    /// Number of trips in the view
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Trip at `pos` within the view
    pub fn get(&self, pos: usize) -> Option<&'a Trip> {
        let trips = self.trips;
        self.indices.get(pos).map(|&idx| &trips[idx])
    }

    /// Trips in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &'a Trip> + '_ {
        let trips = self.trips;
        self.indices.iter().map(move |&idx| &trips[idx])
    }

    /// Trips at view positions `start..end`, clamped to the view length
    pub fn range(&self, start: usize, end: usize) -> impl Iterator<Item = &'a Trip> + '_ {
        let end = end.min(self.indices.len());
        let start = start.min(end);
        let trips = self.trips;
        self.indices[start..end].iter().map(move |&idx| &trips[idx])
    }

    /// Keep only the trips matching `predicate`, preserving order
    pub fn retain<F>(&self, mut predicate: F) -> View<'a>
    where
        F: FnMut(&Trip) -> bool,
    {
        View {
            trips: self.trips,
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&idx| predicate(&self.trips[idx]))
                .collect(),
        }
    }

    /// Dataset positions of the trips in this view
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    /// Record starting at the given date and hour
    pub fn record(
        (y, m, d): (i32, u32, u32),
        hour: u32,
        from: &str,
        to: &str,
        duration: f64,
        user_type: Option<&str>,
    ) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(hour, 15, 0))
            .unwrap();
        TripRecord {
            start_time: start,
            end_time: start + chrono::Duration::seconds(duration as i64),
            start_station: from.to_string(),
            end_station: to.to_string(),
            trip_duration: duration,
            user_type: user_type.map(str::to_string),
        }
    }
}
