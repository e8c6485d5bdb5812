use crate::format::{format_inr, round_half_up};
use crate::models::Series;
use serde::{Deserialize, Serialize};

/// Headline numbers for a (possibly filtered) series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    /// Most recent value, billions of US$.
    pub current: f64,
    /// Percent change against the previous observation, 2 decimals.
    pub growth_rate_percent: f64,
    pub formatted_current: String,
}

/// India's standing among world economies, shown next to the computed cards.
/// Not derived from the series.
pub const GLOBAL_RANK: &str = "5th";
pub const GLOBAL_RANK_LABEL: &str = "Global Economy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl SummaryStats {
    /// Zero growth counts as `Up`.
    pub fn trend(&self) -> Trend {
        if self.growth_rate_percent >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Summarize a series ordered most recent first.
///
/// Returns `None` for an empty series. With no previous observation, or a
/// previous value of zero, growth is reported as `0`.
pub fn summarize(series: &Series) -> Option<SummaryStats> {
    let current = series.latest()?.value;
    let previous = series.observations().get(1).map_or(0.0, |o| o.value);
    let growth_rate_percent = if previous != 0.0 {
        round_half_up((current - previous) / previous * 100.0, 2)
    } else {
        0.0
    };
    Some(SummaryStats {
        current,
        growth_rate_percent,
        formatted_current: format_inr(current),
    })
}
