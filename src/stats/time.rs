//! Most frequent times of travel

use chrono::Weekday;

use crate::data::{month_name, weekday_name, View};
use crate::stats::mode;

/// Most common month, weekday and start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1-based
    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl TimeStats {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }

    /// Hour as `HH:00`
    pub fn hour_label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

pub fn time_stats(view: &View<'_>) -> Option<TimeStats> {
    Some(TimeStats {
        month: mode(view.iter().map(|t| t.month()))?,
        day_of_week: mode(view.iter().map(|t| t.day_of_week()))?,
        hour: mode(view.iter().map(|t| t.hour()))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;
    use crate::data::{City, Dataset};

    #[test]
    fn test_time_stats() {
        let ds = Dataset::from_records(
            City::NewYorkCity,
            vec![
                record((2017, 3, 6), 9, "A", "B", 1.0, None),  // Mon
                record((2017, 3, 7), 17, "A", "B", 1.0, None), // Tue
                record((2017, 4, 7), 17, "A", "B", 1.0, None), // Fri
                record((2017, 3, 14), 6, "A", "B", 1.0, None), // Tue
            ],
        );
        let stats = time_stats(&ds.view()).unwrap();
        assert_eq!(stats.month, 3);
        assert_eq!(stats.month_name(), "March");
        assert_eq!(stats.day_of_week, Weekday::Tue);
        assert_eq!(stats.day_name(), "Tuesday");
        assert_eq!(stats.hour, 17);
        assert_eq!(stats.hour_label(), "17:00");
    }

    #[test]
    fn test_ties_go_to_first_row() {
        let ds = Dataset::from_records(
            City::NewYorkCity,
            vec![
                record((2017, 2, 5), 5, "A", "B", 1.0, None), // Sun
                record((2017, 1, 2), 4, "A", "B", 1.0, None), // Mon
            ],
        );
        let stats = time_stats(&ds.view()).unwrap();
        assert_eq!(stats.month, 2);
        assert_eq!(stats.day_of_week, Weekday::Sun);
        assert_eq!(stats.hour_label(), "05:00");
    }

    #[test]
    fn test_empty() {
        let ds = Dataset::from_records(City::NewYorkCity, Vec::new());
        assert_eq!(time_stats(&ds.view()), None);
    }
}
