//! Public types and constants for the chart renderer.

use plotters::style::RGBColor;

/// 8-bit RGB colour shared by the SVG renderer and the desktop viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }

    /// Lighten towards white by `amount` in `0..=1` (hover highlight).
    pub fn brighten(self, amount: f64) -> Rgb {
        let a = amount.clamp(0.0, 1.0);
        let up = |c: u8| (c as f64 + (255.0 - c as f64) * a).round() as u8;
        Rgb(up(self.0), up(self.1), up(self.2))
    }

    /// Linear blend with `other`, `t = 0` is `self`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Theme colours. Bars fade from `primary` (top) to `secondary` (baseline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
    pub grid: Rgb,
    pub background: Rgb,
    pub success: Rgb,
    pub danger: Rgb,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            primary: Rgb(99, 102, 241),   // indigo    (#6366F1)
            secondary: Rgb(168, 85, 247), // violet    (#A855F7)
            text: Rgb(226, 232, 240),     // slate-200 (#E2E8F0)
            grid: Rgb(71, 85, 105),       // slate-600 (#475569)
            background: Rgb(15, 23, 42),  // slate-900 (#0F172A)
            success: Rgb(34, 197, 94),    // green     (#22C55E)
            danger: Rgb(239, 68, 68),     // red       (#EF4444)
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Rgb(79, 70, 229),
            secondary: Rgb(147, 51, 234),
            text: Rgb(15, 23, 42),
            grid: Rgb(203, 213, 225),
            background: Rgb(248, 250, 252),
            success: Rgb(22, 163, 74),
            danger: Rgb(220, 38, 38),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Geometry and colours handed to the renderer at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Space reserved around the plotting area for axes and labels.
    pub padding: u32,
    pub palette: Palette,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            padding: 70,
            palette: Palette::default(),
            title: "India GDP".into(),
        }
    }
}

impl ChartConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Fraction of each year slot filled by its bar.
pub const BAR_FILL: f64 = 0.8;

/// Headroom above the tallest bar.
pub const Y_HEADROOM: f64 = 1.1;
