//! Synchronous client for India's GDP series from the **World Bank Indicators API (v2)**.
//!
//! The client issues exactly one request per fetch and normalizes the reply into a
//! [`Series`](crate::models::Series) of billions of US$, most recent first.
//!
//! ### Notes
//! - The API sometimes serializes `per_page` as a **string**; we accept both string/number.
//! - Observation values may be numbers, numeric strings, or `null`. Null observations
//!   (years not yet published) are dropped during normalization.
//! - There is no retry: a failed request is reported to the caller as-is.
//!
//! Typical usage:
//! ```no_run
//! # use india_gdp::{Client, RangeSelector};
//! let client = Client::default();
//! let series = client.fetch_series()?;
//! let recent = india_gdp::range::filter(&series, RangeSelector::Last5Years, 2024);
//! let stats = india_gdp::stats::summarize(&recent);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{Entry, GDP_INDICATOR, INDIA_ISO3, Meta, NormalizeError, Observation, Series};
use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Sixty years covers the whole published GDP history in a single page.
pub const DEFAULT_PER_PAGE: u32 = 60;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub country: String,
    pub indicator: String,
    pub per_page: u32,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("india-gdp/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.worldbank.org/v2".into(),
            country: INDIA_ISO3.into(),
            indicator: GDP_INDICATOR.into(),
            per_page: DEFAULT_PER_PAGE,
            http,
        }
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(code: &str) -> String {
    percent_encoding::utf8_percent_encode(code.trim(), SAFE).to_string()
}

impl Client {
    /// Point the client at another API root (a mirror, or a local test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Request URL for the configured country and indicator.
    pub fn url(&self) -> String {
        format!(
            "{}/country/{}/indicator/{}?format=json&per_page={}",
            self.base_url.trim_end_matches('/'),
            enc(&self.country),
            enc(&self.indicator),
            self.per_page
        )
    }

    /// Fetch the raw JSON envelope with a single GET.
    pub fn fetch_envelope(&self) -> Result<Value> {
        let url = self.url();
        log::debug!("GET {}", url);
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("request failed with HTTP {}", status);
        }
        resp.json().context("decode json")
    }

    /// Fetch and normalize the full series.
    pub fn fetch_series(&self) -> Result<Series> {
        let v = self
            .fetch_envelope()
            .context("Failed to fetch India's GDP data. Please try again later.")?;
        let (meta, entries) = parse_envelope(&v)?;
        if meta.pages > 1 {
            log::warn!(
                "response has {} pages, only the first {} rows were requested",
                meta.pages,
                meta.per_page
            );
        }
        let series = normalize(entries)?;
        log::info!("fetched {} GDP observations", series.len());
        Ok(series)
    }
}

/// Split the API envelope `[Meta, [Entry, ...]]` into its parts.
///
/// An error payload (a `message` object at position 0) is surfaced as an error.
pub fn parse_envelope(v: &Value) -> Result<(Meta, Vec<Entry>)> {
    let arr = v
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("unexpected response shape: not a top-level array"))?;
    if arr.is_empty() {
        bail!("unexpected response: empty array");
    }

    // If first element has "message", surface API error.
    if arr[0].get("message").is_some() {
        bail!("world bank api error: {}", arr[0]);
    }

    let meta: Meta = serde_json::from_value(arr[0].clone()).context("parse meta")?;
    let entries: Vec<Entry> = match arr.get(1) {
        Some(Value::Null) | None => vec![],
        Some(list) => serde_json::from_value(list.clone()).context("parse entries")?,
    };
    Ok((meta, entries))
}

/// Turn raw entries into a series in billions of US$, newest first.
///
/// Entries without a value are skipped. Unparseable dates and negative or
/// non-finite values are errors.
pub fn normalize(entries: Vec<Entry>) -> Result<Series> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        match Observation::try_from(entry) {
            Ok(obs) => out.push(obs),
            Err(NormalizeError::MissingValue { date }) => {
                log::warn!("skipping {}: no value reported", date);
            }
            Err(e) => return Err(e).context("normalize observation"),
        }
    }
    Ok(Series::from_unordered(out))
}

/// Load a previously downloaded API response and normalize it.
pub fn load_series_from_file<P: AsRef<Path>>(path: P) -> Result<Series> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let v: Value =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    let (_meta, entries) = parse_envelope(&v)?;
    normalize(entries)
}
