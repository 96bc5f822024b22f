//! Total and average trip duration

use crate::data::View;

/// Duration totals in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

pub fn duration_stats(view: &View<'_>) -> Option<DurationStats> {
    if view.is_empty() {
        return None;
    }
    let total: f64 = view.iter().map(|t| t.trip_duration()).sum();
    let count = view.len();
    Some(DurationStats {
        total,
        mean: total / count as f64,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::record;
    use crate::data::{City, Dataset};

    fn dataset(durations: &[f64]) -> Dataset {
        let records = durations
            .iter()
            .map(|&d| record((2017, 1, 2), 8, "A", "B", d, None))
            .collect();
        Dataset::from_records(City::Washington, records)
    }

    #[test]
    fn test_sum_and_mean() {
        let ds = dataset(&[100.0, 200.0, 300.0]);
        let stats = duration_stats(&ds.view()).unwrap();
        assert_eq!(stats.total, 600.0);
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_sum_is_mean_times_count() {
        let ds = dataset(&[0.5, 1234.25, 17.0, 99.9, 3600.0]);
        let stats = duration_stats(&ds.view()).unwrap();
        assert!((stats.mean * stats.count as f64 - stats.total).abs() < 1e-9);
    }

    #[test]
    fn test_empty() {
        let ds = dataset(&[]);
        assert_eq!(duration_stats(&ds.view()), None);
    }
}
