//! Pixel geometry for the bar chart: scales, ticks, hit testing, and the
//! entrance animation. Backend-agnostic so the desktop viewer and tests can
//! share it.

use super::types::{BAR_FILL, Y_HEADROOM};
use crate::format::{format_inr, format_usd_billions};
use crate::models::{Observation, Series};

/// Seconds each bar takes to grow to full height.
pub const BAR_GROW_SECS: f64 = 1.0;
/// Delay between consecutive bars starting to grow.
pub const BAR_STAGGER_SECS: f64 = 0.05;

/// Axis-aligned rectangle in pixels, `y0 <= y1` (screen y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BarRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Upper end of the value axis: the tallest bar plus 10% headroom.
pub fn y_domain_max(series: &Series) -> f64 {
    match series.max_value() {
        Some(m) if m > 0.0 => m * Y_HEADROOM,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    width: f64,
    height: f64,
    padding: f64,
    min_year: i32,
    max_year: i32,
    y_max: f64,
    bar_width: f64,
}

impl BarLayout {
    /// `None` for an empty series.
    pub fn new(series: &Series, width: f64, height: f64, padding: f64) -> Option<Self> {
        let (min_year, max_year) = series.year_span()?;
        let inner = (width - 2.0 * padding).max(1.0);
        let slots = (max_year - min_year + 1) as f64;
        Some(Self {
            width,
            height,
            padding,
            min_year,
            max_year,
            y_max: y_domain_max(series),
            bar_width: inner / slots * BAR_FILL,
        })
    }

    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Screen y of the value axis zero line.
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// Centre of the slot for `year`.
    pub fn x_for_year(&self, year: i32) -> f64 {
        let inner = self.width - 2.0 * self.padding;
        let slots = (self.max_year - self.min_year + 1) as f64;
        let slot = inner / slots;
        self.padding + slot * ((year - self.min_year) as f64 + 0.5)
    }

    pub fn y_for_value(&self, v: f64) -> f64 {
        let inner = self.height - 2.0 * self.padding;
        self.baseline() - (v / self.y_max).clamp(0.0, 1.0) * inner
    }

    /// Bar for `obs` grown to `progress` in `0..=1`.
    pub fn bar_rect(&self, obs: &Observation, progress: f64) -> BarRect {
        let cx = self.x_for_year(obs.year);
        let full_top = self.y_for_value(obs.value);
        let base = self.baseline();
        let top = base - (base - full_top) * progress.clamp(0.0, 1.0);
        BarRect {
            x0: cx - self.bar_width / 2.0,
            y0: top,
            x1: cx + self.bar_width / 2.0,
            y1: base,
        }
    }

    /// Index (in series order) of the fully grown bar under `(x, y)`.
    pub fn hit_test(&self, series: &Series, x: f64, y: f64) -> Option<usize> {
        series
            .iter()
            .position(|o| self.bar_rect(o, 1.0).contains(x, y))
    }

    /// Round-number ticks from zero up to the top of the value axis.
    pub fn value_ticks(&self, approx_count: usize) -> Vec<f64> {
        let step = nice_step(self.y_max, approx_count.max(1));
        let mut out = Vec::new();
        let mut v = 0.0;
        while v <= self.y_max + step * 1e-9 {
            out.push(v);
            v += step;
        }
        out
    }

    /// Years that get an axis label: every `every` years, aligned to multiples of it.
    pub fn year_ticks(&self, every: i32) -> Vec<i32> {
        let every = every.max(1);
        let first = self.min_year + (every - self.min_year.rem_euclid(every)) % every;
        (first..=self.max_year).step_by(every as usize).collect()
    }
}

/// Tick spacing of 1, 2, or 5 times a power of ten.
fn nice_step(max: f64, count: usize) -> f64 {
    let raw = max / count as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm >= 50f64.sqrt() {
        10.0
    } else if norm >= 10f64.sqrt() {
        5.0
    } else if norm >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    mult * mag
}

/// Cubic ease-in-out.
fn ease_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Growth of bar `index` after `elapsed` seconds of the entrance animation.
pub fn bar_progress(index: usize, elapsed: f64) -> f64 {
    let t = (elapsed - index as f64 * BAR_STAGGER_SECS) / BAR_GROW_SECS;
    ease_cubic(t.clamp(0.0, 1.0))
}

/// Whether all `bars` have finished growing.
pub fn animation_done(bars: usize, elapsed: f64) -> bool {
    let last = bars.saturating_sub(1) as f64;
    elapsed >= last * BAR_STAGGER_SECS + BAR_GROW_SECS
}

/// Tooltip text for a hovered bar: header, rupee row, dollar row.
pub fn tooltip_lines(obs: &Observation) -> [String; 3] {
    [
        obs.date.clone(),
        format!("GDP: {}", format_inr(obs.value)),
        format!("USD: {}", format_usd_billions(obs.value)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Series {
        Series::new(vec![
            Observation::new("2022", 3000.0, 2022),
            Observation::new("2021", 2000.0, 2021),
            Observation::new("2020", 1000.0, 2020),
        ])
    }

    #[test]
    fn value_axis_has_headroom() {
        let l = BarLayout::new(&series(), 960.0, 540.0, 70.0).unwrap();
        assert!((l.y_max() - 3300.0).abs() < 1e-9);
        assert_eq!(l.y_for_value(0.0), 470.0);
    }

    #[test]
    fn bars_sit_in_year_slots() {
        let s = series();
        let l = BarLayout::new(&s, 960.0, 540.0, 70.0).unwrap();
        let slot = 820.0 / 3.0;
        assert!((l.x_for_year(2020) - (70.0 + slot / 2.0)).abs() < 1e-9);
        assert!((l.bar_width() - slot * 0.8).abs() < 1e-9);
        let newest = l.bar_rect(&s.observations()[0], 1.0);
        let oldest = l.bar_rect(&s.observations()[2], 1.0);
        assert!(newest.x0 > oldest.x1);
        assert!(newest.height() > oldest.height());
    }

    #[test]
    fn hit_test_finds_bar_under_pointer() {
        let s = series();
        let l = BarLayout::new(&s, 960.0, 540.0, 70.0).unwrap();
        let x = l.x_for_year(2021);
        assert_eq!(l.hit_test(&s, x, l.baseline() - 1.0), Some(1));
        assert_eq!(l.hit_test(&s, x, 1.0), None);
    }

    #[test]
    fn ticks_are_round_numbers() {
        let l = BarLayout::new(&series(), 960.0, 540.0, 70.0).unwrap();
        let ticks = l.value_ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!((ticks[1] - 500.0).abs() < 1e-9);
        assert!(*ticks.last().unwrap() <= l.y_max());
        assert_eq!(l.year_ticks(5), vec![2020]);
    }

    #[test]
    fn animation_staggers_bars() {
        assert_eq!(bar_progress(0, 0.0), 0.0);
        assert_eq!(bar_progress(0, 1.0), 1.0);
        assert!(bar_progress(1, 0.5) < bar_progress(0, 0.5));
        assert!(!animation_done(3, 1.05));
        assert!(animation_done(3, 1.2));
    }
}
