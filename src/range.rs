//! Trailing time-window selection over a [`Series`].

use crate::models::Series;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which trailing window of the series to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeSelector {
    /// Every observation.
    #[default]
    All,
    /// Observations from `reference_year - 5` onwards.
    Last5Years,
    /// Observations from `reference_year - 10` onwards.
    Last10Years,
}

impl RangeSelector {
    pub const VARIANTS: [RangeSelector; 3] = [Self::All, Self::Last5Years, Self::Last10Years];

    /// Number of trailing years kept, `None` for `All`.
    pub fn years(self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Last5Years => Some(5),
            Self::Last10Years => Some(10),
        }
    }

    /// Short tag used on the command line and on the range buttons.
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Last5Years => "5y",
            Self::Last10Years => "10y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Last5Years => "5Y",
            Self::Last10Years => "10Y",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
    #[error("invalid range selector {0:?}, expected one of: all, 5y, 10y")]
    InvalidSelector(String),
}

impl FromStr for RangeSelector {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "5y" => Ok(Self::Last5Years),
            "10y" => Ok(Self::Last10Years),
            _ => Err(ParseRangeError::InvalidSelector(s.to_string())),
        }
    }
}

/// Narrow `series` to the window named by `selector`, counted back from `reference_year`.
///
/// Relative order is preserved and `All` returns the series unchanged.
pub fn filter(series: &Series, selector: RangeSelector, reference_year: i32) -> Series {
    let Some(years) = selector.years() else {
        return series.clone();
    };
    let cutoff = reference_year - years;
    let out: Series = series
        .iter()
        .filter(|o| o.year >= cutoff)
        .cloned()
        .collect();
    log::debug!(
        "range {}: kept {} of {} observations (year >= {})",
        selector,
        out.len(),
        series.len(),
        cutoff
    );
    out
}

/// Current calendar year from the local clock.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!("ALL".parse::<RangeSelector>(), Ok(RangeSelector::All));
        assert_eq!(" 5y".parse::<RangeSelector>(), Ok(RangeSelector::Last5Years));
        assert_eq!("10Y".parse::<RangeSelector>(), Ok(RangeSelector::Last10Years));
    }

    #[test]
    fn unknown_tag_is_invalid_selector() {
        let err = "20y".parse::<RangeSelector>().unwrap_err();
        assert_eq!(err, ParseRangeError::InvalidSelector("20y".into()));
    }
}
