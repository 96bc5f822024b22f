//! Month and weekday filters

use chrono::Weekday;
use std::fmt;

use crate::data::model::{month_name, weekday_name, Trip, View, MONTH_NAMES};

/// Months with published trip data
pub const FILTER_MONTHS: usize = 6;

/// Keyword that disables a filter
pub const ALL: &str = "all";

/// Month selection as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month, January through June
    Month(u32),
    /// Text that names none of the filterable months; matches nothing
    Unknown(String),
}

impl MonthFilter {
    /// Parse `all` or a month name from January to June, ignoring case
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        if normalized == ALL {
            return MonthFilter::All;
        }
        MONTH_NAMES[..FILTER_MONTHS]
            .iter()
            .position(|name| name.to_lowercase() == normalized)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
            .unwrap_or(MonthFilter::Unknown(normalized))
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(month) => trip.month() == *month,
            MonthFilter::Unknown(_) => false,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all months"),
            MonthFilter::Month(month) => write!(f, "{}", month_name(*month).unwrap_or("?")),
            MonthFilter::Unknown(text) => write!(f, "'{}'", text),
        }
    }
}

/// Weekday selection as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
    /// Text that names no weekday; matches nothing
    Unknown(String),
}

impl DayFilter {
    /// Parse `all` or a full English weekday name, ignoring case
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        if normalized == ALL {
            return DayFilter::All;
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == normalized)
            .map(DayFilter::Day)
            .unwrap_or(DayFilter::Unknown(normalized))
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(day) => trip.day_of_week() == *day,
            DayFilter::Unknown(_) => false,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "all days"),
            DayFilter::Day(day) => write!(f, "{}", weekday_name(*day)),
            DayFilter::Unknown(text) => write!(f, "'{}'", text),
        }
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Combined month and weekday filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    /// Filter from raw user input
    pub fn parse(month: &str, day: &str) -> Self {
        TripFilter {
            month: MonthFilter::parse(month),
            day: DayFilter::parse(day),
        }
    }

    /// Filter that keeps every trip
    pub fn all() -> Self {
        TripFilter {
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    /// Narrow `view` by month, then by day. Row order is preserved.
    pub fn apply<'a>(&self, view: &View<'a>) -> View<'a> {
        let by_month = match self.month {
            MonthFilter::All => view.clone(),
            _ => view.retain(|trip| self.month.matches(trip)),
        };
        log::debug!("month filter {} kept {} trips", self.month, by_month.len());

        let by_day = match self.day {
            DayFilter::All => by_month,
            _ => by_month.retain(|trip| self.day.matches(trip)),
        };
        log::debug!("day filter {} kept {} trips", self.day, by_day.len());

        by_day
    }
}

impl Default for TripFilter {
    fn default() -> Self {
        Self::all()
    }
}
