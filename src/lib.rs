//! india_gdp
//!
//! A small Rust library for retrieving, filtering, summarizing, and charting
//! India's GDP (World Bank indicator `NY.GDP.MKTP.CD`). Pairs with the
//! `india-gdp` CLI and the `india-gdp-gui` desktop viewer.
//!
//! ### Features
//! - Fetch the full GDP series in one request and normalize it to billions of US$
//! - Narrow it to the last 5 or 10 years relative to an injected reference year
//! - Headline numbers: current value, annual growth, rupee formatting
//! - Render an SVG bar chart from the filtered series
//!
//! ### Example
//! ```no_run
//! use india_gdp::{Client, RangeSelector};
//!
//! let client = Client::default();
//! let series = client.fetch_series()?;
//! let recent = india_gdp::range::filter(&series, RangeSelector::Last10Years, 2024);
//! if let Some(stats) = india_gdp::stats::summarize(&recent) {
//!     println!("{} ({:.2}%)", stats.formatted_current, stats.growth_rate_percent);
//! }
//! india_gdp::viz::render_bar_chart(&recent, "gdp.svg", &Default::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod format;
pub mod models;
pub mod range;
pub mod stats;
pub mod viz;

pub use api::Client;
pub use models::{Observation, Series};
pub use range::RangeSelector;
pub use stats::{SummaryStats, Trend};
