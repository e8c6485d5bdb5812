//! Visualization: render the GDP bar chart to **SVG**.
//!
//! - One bar per year, coloured with a vertical `primary → secondary` gradient
//! - Value axis from zero to the tallest bar plus 10%, ticks labelled `₹…B`
//! - Caption shows the most recent value in rupees
//!
//! Colours and geometry come from an explicit [`ChartConfig`]; nothing is read
//! from the environment.

pub mod layout;
pub mod types;

pub use layout::{BarLayout, BarRect, bar_progress, tooltip_lines, y_domain_max};
pub use types::{BAR_FILL, ChartConfig, Palette, Rgb};

use crate::format::format_axis_tick;
use crate::models::Series;
use crate::stats::summarize;
use anyhow::{Context, Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_svg::SVGBackend;

use std::path::Path;

/// Horizontal slices used to approximate the bar gradient.
const GRADIENT_STEPS: usize = 12;

/// Render `series` as an SVG bar chart at `out_path`.
pub fn render_bar_chart<P: AsRef<Path>>(
    series: &Series,
    out_path: P,
    config: &ChartConfig,
) -> Result<()> {
    if series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    let out_path = out_path.as_ref();
    let root = SVGBackend::new(out_path, (config.width, config.height)).into_drawing_area();
    draw_bar_chart(root, series, config)
        .with_context(|| format!("render chart to {}", out_path.display()))?;
    log::info!("wrote chart with {} bars to {}", series.len(), out_path.display());
    Ok(())
}

/// Render `series` as an SVG document held in memory.
pub fn render_bar_chart_svg(series: &Series, config: &ChartConfig) -> Result<String> {
    if series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (config.width, config.height))
            .into_drawing_area();
        draw_bar_chart(root, series, config)?;
    }
    Ok(buf)
}

/// Helper that draws to any Plotters backend.
fn draw_bar_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &Series,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (min_year, max_year) = series
        .year_span()
        .ok_or_else(|| anyhow!("no data to plot"))?;
    let y_max = y_domain_max(series);
    let palette = &config.palette;
    let text = palette.text.to_plotters();
    let grid = palette.grid.to_plotters();

    root.fill(&palette.background.to_plotters())
        .map_err(|e| anyhow!("{:?}", e))?;

    let caption = match summarize(series) {
        Some(stats) => format!("{} · {}", config.title, stats.formatted_current),
        None => config.title.clone(),
    };

    let pad = config.padding;
    let mut chart = ChartBuilder::on(&root)
        .margin(pad / 4)
        .caption(caption, ("sans-serif", 22).into_font().color(&text))
        .set_label_area_size(LabelAreaPosition::Left, pad)
        .set_label_area_size(LabelAreaPosition::Bottom, pad * 2 / 3)
        .build_cartesian_2d(
            (min_year as f64 - 0.5)..(max_year as f64 + 0.5),
            0.0..y_max,
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    // Only whole years get an x label.
    let x_label_fmt = |v: &f64| {
        if (v - v.round()).abs() < 1e-6 {
            format!("{}", v.round() as i64)
        } else {
            String::new()
        }
    };
    let y_label_fmt = |v: &f64| format_axis_tick(*v);
    let x_label_count = ((max_year - min_year + 1) as usize).min(12);

    chart
        .configure_mesh()
        .x_desc("Year")
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 13).into_font().color(&text))
        .axis_desc_style(("sans-serif", 15).into_font().color(&text))
        .bold_line_style(grid.mix(0.4))
        .light_line_style(TRANSPARENT)
        .axis_style(grid)
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let half = BAR_FILL / 2.0;
    for obs in series.iter() {
        let x = obs.year as f64;
        let slice = obs.value / GRADIENT_STEPS as f64;
        // Slice 0 sits on the baseline and takes the secondary colour.
        let rects = (0..GRADIENT_STEPS).map(|i| {
            let t = 1.0 - i as f64 / (GRADIENT_STEPS - 1) as f64;
            let color = palette.primary.lerp(palette.secondary, t).to_plotters();
            let y0 = slice * i as f64;
            let y1 = slice * (i + 1) as f64;
            Rectangle::new([(x - half, y0), (x + half, y1)], color.filled())
        });
        chart
            .draw_series(rects)
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
