use india_gdp::models::{Observation, Series};
use india_gdp::range::{ParseRangeError, filter};
use india_gdp::RangeSelector;

/// Thirty years of synthetic data, newest first.
fn thirty_years() -> Series {
    (1995..=2024)
        .rev()
        .map(|y| Observation::new(y.to_string(), (y - 1990) as f64 * 100.0, y))
        .collect()
}

#[test]
fn all_is_identity() {
    let s = thirty_years();
    assert_eq!(filter(&s, RangeSelector::All, 2024), s);
    assert_eq!(filter(&s, RangeSelector::All, 1900), s);
}

#[test]
fn trailing_windows_are_order_preserving_partitions() {
    let s = thirty_years();
    for (sel, k) in [(RangeSelector::Last5Years, 5), (RangeSelector::Last10Years, 10)] {
        for reference in [2024, 2020, 2000, 1990] {
            let out = filter(&s, sel, reference);
            let expected: Vec<&Observation> =
                s.iter().filter(|o| o.year >= reference - k).collect();
            let got: Vec<&Observation> = out.iter().collect();
            assert_eq!(got, expected, "{sel} relative to {reference}");
            assert!(out.iter().all(|o| o.year >= reference - k));
        }
    }
}

#[test]
fn last_five_years_is_inclusive_of_cutoff() {
    let s = thirty_years();
    let out = filter(&s, RangeSelector::Last5Years, 2024);
    let years: Vec<i32> = out.iter().map(|o| o.year).collect();
    assert_eq!(years, vec![2024, 2023, 2022, 2021, 2020, 2019]);
}

#[test]
fn window_past_the_data_is_empty() {
    let s = thirty_years();
    assert!(filter(&s, RangeSelector::Last10Years, 2100).is_empty());
}

#[test]
fn empty_series_stays_empty() {
    let empty = Series::default();
    for sel in RangeSelector::VARIANTS {
        assert!(filter(&empty, sel, 2024).is_empty());
    }
}

#[test]
fn filtering_does_not_touch_the_input() {
    let s = thirty_years();
    let before = s.clone();
    let _ = filter(&s, RangeSelector::Last5Years, 2024);
    assert_eq!(s, before);
}

#[test]
fn unknown_selector_string_is_rejected() {
    assert_eq!(
        "1y".parse::<RangeSelector>(),
        Err(ParseRangeError::InvalidSelector("1y".into()))
    );
}
