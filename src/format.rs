//! Currency formatting for GDP figures.
//!
//! Values inside the crate are billions of US$. Display values are rupees,
//! converted at a fixed rate, with a unit switch to "Trillion" for large
//! magnitudes so economic figures stay readable.

use num_format::{CustomFormat, Grouping, Locale, ToFormattedString};

/// Approximate USD → INR conversion applied to every displayed rupee figure.
pub const USD_TO_INR: f64 = 75.0;

/// Converted values at or above this render as "Trillion".
pub const TRILLION_THRESHOLD: f64 = 1000.0;

pub const RUPEE: char = '₹';

/// Round half away from zero to `places` decimals.
pub fn round_half_up(x: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (x * factor).round() / factor
}

/// Format a GDP value (billions of US$) in rupees.
///
/// `15.0` → `"₹1.13 Trillion"`, `1.0` → `"₹75"`.
pub fn format_inr(billions_usd: f64) -> String {
    let inr = billions_usd * USD_TO_INR;
    if inr >= TRILLION_THRESHOLD {
        return format!("{RUPEE}{:.2} Trillion", round_half_up(inr / 1000.0, 2));
    }
    format_inr_whole(inr)
}

/// Indian-locale currency with no fraction digits, e.g. `"₹75"` or `"-₹1,250"`.
fn format_inr_whole(inr: f64) -> String {
    let rounded = inr.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}", indian_grouped(rounded.unsigned_abs()))
}

/// Group digits the Indian way (`12,34,567`).
fn indian_grouped(n: u64) -> String {
    match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(fmt) => n.to_formatted_string(&fmt),
        Err(_) => n.to_formatted_string(&Locale::en),
    }
}

/// Tooltip row for the raw dollar figure: `"$3353.5B"`.
pub fn format_usd_billions(billions_usd: f64) -> String {
    format!("${:.1}B", billions_usd)
}

/// Y-axis tick label, e.g. `"₹500B"`.
pub fn format_axis_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        return format!("{RUPEE}{}B", v.round() as i64);
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{RUPEE}{s}B")
}

/// Growth rate with sign-aware arrow, e.g. `"7.45% ↑"`.
pub fn format_growth(percent: f64) -> String {
    let arrow = if percent >= 0.0 { '↑' } else { '↓' };
    format!("{:.2}% {arrow}", percent)
}
