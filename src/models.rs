use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// World Bank indicator id for GDP in current US$.
pub const GDP_INDICATOR: &str = "NY.GDP.MKTP.CD";

/// ISO3 code of the only country this crate charts.
pub const INDIA_ISO3: &str = "IND";

/// The API reports GDP in US$; observations carry billions of US$.
pub const USD_PER_BILLION: f64 = 1.0e9;

/// Metadata section returned by the API (position 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: u32,
    pub pages: u32,
    /// Some responses encode `per_page` as a string, others as a number.
    /// Accept both and normalize to `u32`.
    #[serde(deserialize_with = "de_u32_from_string_or_number")]
    pub per_page: u32,
    pub total: u32,
}

/// Serde helper: parse `u32` from either a JSON number or a string.
fn de_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U32Visitor;

    impl<'de> Visitor<'de> for U32Visitor {
        type Value = u32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v).map_err(|_| E::custom("negative or oversized value for u32"))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U32Visitor)
}

/// Serde helper: observation values arrive as a number, a numeric string, or `null`.
fn de_opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct OptF64Visitor;

    impl<'de> Visitor<'de> for OptF64Visitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(OptF64Visitor)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeName {
    pub id: String,
    pub value: String,
}

/// Raw entry from the API (position 1 array).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub indicator: CodeName,
    #[serde(default)]
    pub country: CodeName,
    #[serde(default)]
    pub countryiso3code: String,
    pub date: String,
    #[serde(default, deserialize_with = "de_opt_f64_from_string_or_number")]
    pub value: Option<f64>,
    pub unit: Option<String>,
    #[serde(rename = "obs_status")]
    pub obs_status: Option<String>,
    pub decimal: Option<i32>,
}

/// Reasons a raw entry cannot become an [`Observation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The API reported no value for this date (not yet published).
    #[error("no value reported for {date}")]
    MissingValue { date: String },
    #[error("unparseable date: {0:?}")]
    UnparseableDate(String),
    #[error("invalid GDP value {value} for {date}")]
    InvalidValue { date: String, value: f64 },
}

static LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{4})").expect("valid year regex"));

/// Extract the calendar year from an API date such as `"2023"` or `"2023-01-01"`.
pub fn parse_year(date: &str) -> Option<i32> {
    LEADING_YEAR
        .captures(date)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// One normalized GDP data point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Date string exactly as reported by the API.
    pub date: String,
    /// GDP in billions of US$.
    pub value: f64,
    pub year: i32,
}

impl Observation {
    pub fn new(date: impl Into<String>, value: f64, year: i32) -> Self {
        Self {
            date: date.into(),
            value,
            year,
        }
    }
}

impl TryFrom<Entry> for Observation {
    type Error = NormalizeError;

    fn try_from(e: Entry) -> Result<Self, Self::Error> {
        let year = parse_year(&e.date).ok_or_else(|| NormalizeError::UnparseableDate(e.date.clone()))?;
        let raw = e
            .value
            .ok_or_else(|| NormalizeError::MissingValue { date: e.date.clone() })?;
        if !raw.is_finite() || raw < 0.0 {
            return Err(NormalizeError::InvalidValue {
                date: e.date,
                value: raw,
            });
        }
        Ok(Self {
            value: raw / USD_PER_BILLION,
            date: e.date,
            year,
        })
    }
}

/// GDP observations ordered most recent first.
///
/// A `Series` is never mutated once built; range filtering produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Wrap observations that are already in descending date order.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Build a series from observations in any order (stable sort, newest first).
    pub fn from_unordered(mut observations: Vec<Observation>) -> Self {
        observations.sort_by(|a, b| b.year.cmp(&a.year));
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation.
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Largest value, used for y-axis scaling.
    pub fn max_value(&self) -> Option<f64> {
        self.observations
            .iter()
            .map(|o| o.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// `(oldest, newest)` year.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.observations.iter().map(|o| o.year).min()?;
        let max = self.observations.iter().map(|o| o.year).max()?;
        Some((min, max))
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
