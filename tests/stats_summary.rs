use india_gdp::models::{Observation, Series};
use india_gdp::stats::{SummaryStats, Trend, summarize};
use india_gdp::{RangeSelector, range};

fn series(values: &[f64]) -> Series {
    // Newest first: the first value gets the latest year.
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let year = 2024 - i as i32;
            Observation::new(year.to_string(), *v, year)
        })
        .collect()
}

#[test]
fn empty_series_has_no_stats() {
    assert_eq!(summarize(&Series::default()), None);
}

#[test]
fn single_observation_has_zero_growth() {
    let s = summarize(&series(&[100.0])).unwrap();
    assert_eq!(s.current, 100.0);
    assert_eq!(s.growth_rate_percent, 0.0);
}

#[test]
fn growth_against_previous_observation() {
    let s = summarize(&series(&[110.0, 100.0])).unwrap();
    assert_eq!(s.current, 110.0);
    assert_eq!(s.growth_rate_percent, 10.0);
    assert_eq!(s.trend(), Trend::Up);
}

#[test]
fn zero_previous_falls_back_to_zero_growth() {
    let s = summarize(&series(&[100.0, 0.0])).unwrap();
    assert_eq!(s.growth_rate_percent, 0.0);
    assert!(s.growth_rate_percent.is_finite());
}

#[test]
fn growth_is_rounded_to_two_decimals() {
    // (2674.85 - 2835.61) / 2835.61 * 100 = -5.6693...
    let s = summarize(&series(&[2674.851578587, 2835.606256558])).unwrap();
    assert_eq!(s.growth_rate_percent, -5.67);
    assert_eq!(s.trend(), Trend::Down);
}

#[test]
fn only_the_two_newest_observations_matter() {
    let a = summarize(&series(&[110.0, 100.0, 1.0])).unwrap();
    let b = summarize(&series(&[110.0, 100.0, 9999.0])).unwrap();
    assert_eq!(a, b);
}

#[test]
fn formatted_current_uses_rupee_units() {
    let s = summarize(&series(&[15.0, 10.0])).unwrap();
    assert_eq!(s.formatted_current, "₹1.13 Trillion");
    let s = summarize(&series(&[1.0])).unwrap();
    assert_eq!(s.formatted_current, "₹75");
}

#[test]
fn summarize_is_idempotent() {
    let s = series(&[3549.9, 3353.5, 3167.3]);
    let first: SummaryStats = summarize(&s).unwrap();
    let second = summarize(&s).unwrap();
    assert_eq!(first, second);
}

#[test]
fn filtered_view_is_summarized_from_its_own_newest_rows() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ind_gdp.json");
    let full = india_gdp::api::load_series_from_file(path).unwrap();

    let recent = range::filter(&full, RangeSelector::Last5Years, 2024);
    assert_eq!(recent.len(), 5);
    let s = summarize(&recent).unwrap();
    assert_eq!(s.formatted_current, "₹266.24 Trillion");
    assert_eq!(s.growth_rate_percent, 5.86);

    // Nothing is left once the window starts after the newest row.
    let past = range::filter(&full, RangeSelector::Last5Years, 2100);
    assert_eq!(summarize(&past), None);
}
