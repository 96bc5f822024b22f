//! User type breakdown

use crate::data::View;
use crate::stats::value_counts;

/// Trips per user type, most frequent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub counts: Vec<(String, usize)>,
    /// Trips with no user type recorded
    pub missing: usize,
}

impl UserStats {
    /// Trips counted, including those without a user type
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum::<usize>() + self.missing
    }
}

pub fn user_stats(view: &View<'_>) -> Option<UserStats> {
    if view.is_empty() {
        return None;
    }
    let counts = value_counts(view.iter().filter_map(|t| t.user_type()))
        .into_iter()
        .map(|(kind, n)| (kind.to_string(), n))
        .collect();
    let missing = view.iter().filter(|t| t.user_type().is_none()).count();
    Some(UserStats { counts, missing })
}
