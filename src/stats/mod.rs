//! Descriptive statistics over a filtered view
//!
//! Every group is a pure function of a [`View`] and returns `None` when the
//! view is empty. Ties in modes and counts go to the value seen first in
//! dataset row order.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use duration::*;
pub use station::*;
pub use time::*;
pub use user::*;

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::data::View;

/// Count each distinct value, most frequent first. Equal counts keep the
/// order in which the values were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, or `None` for no values
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Statistic group names, in report order
pub const GROUPS: [&str; 4] = ["time", "station", "duration", "user type"];

/// All four statistic groups for one view
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub time: Option<TimeStats>,
    pub station: Option<StationStats>,
    pub duration: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl Summary {
    pub fn compute(view: &View<'_>) -> Self {
        Self::compute_timed(view).0
    }

    /// Like [`Summary::compute`], also returning how long each group took,
    /// in [`GROUPS`] order
    pub fn compute_timed(view: &View<'_>) -> (Self, [Duration; 4]) {
        let (time, time_took) = timed(|| time_stats(view));
        let (station, station_took) = timed(|| station_stats(view));
        let (duration, duration_took) = timed(|| duration_stats(view));
        let (users, users_took) = timed(|| user_stats(view));
        (
            Summary {
                time,
                station,
                duration,
                users,
            },
            [time_took, station_took, duration_took, users_took],
        )
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}
