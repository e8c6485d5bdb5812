/*!
 * Desktop viewer for india-gdp
 *
 * A cross-platform window showing India's GDP as an animated bar chart:
 * - All / 5Y / 10Y range buttons (re-filter without re-fetching)
 * - Current GDP, annual growth, and global rank cards
 * - Hover tooltips with rupee and dollar figures
 * - Light/dark theme and SVG export of the current view
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use india_gdp::format::{format_axis_tick, format_growth};
use india_gdp::viz::layout::animation_done;
use india_gdp::viz::{self, BarLayout, BarRect, ChartConfig, Palette, Rgb, bar_progress, tooltip_lines};
use india_gdp::{Client, RangeSelector, Series, SummaryStats, Trend, range, stats};
use std::sync::mpsc;
use std::thread;

/// Margin around the plotting area, in points.
const PADDING: f64 = 70.0;
const GRADIENT_STEPS: usize = 16;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title("India GDP"),
        ..Default::default()
    };

    eframe::run_native(
        "India GDP",
        options,
        Box::new(|_cc| Ok(Box::new(GdpApp::new()))),
    )
}

#[derive(Debug)]
enum FetchResult {
    Loaded(Series),
    Failed(String),
}

/// Main application state
struct GdpApp {
    // Data: the full series is fetched once, the view is re-derived on range change.
    full: Option<Series>,
    view: Series,
    summary: Option<SummaryStats>,
    range: RangeSelector,
    reference_year: i32,

    // UI state
    light_theme: bool,
    is_loading: bool,
    status_message: String,
    error_message: String,
    /// `ctx` time at which the bar entrance animation started.
    anim_start: Option<f64>,

    // Background fetch
    receiver: Option<mpsc::Receiver<FetchResult>>,
}

impl GdpApp {
    fn new() -> Self {
        let mut app = Self {
            full: None,
            view: Series::default(),
            summary: None,
            range: RangeSelector::All,
            reference_year: range::current_year(),
            light_theme: false,
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            anim_start: None,
            receiver: None,
        };
        app.start_fetch();
        app
    }

    fn start_fetch(&mut self) {
        self.is_loading = true;
        self.error_message.clear();

        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);

        thread::spawn(move || {
            let result = match Client::default().fetch_series() {
                Ok(series) => FetchResult::Loaded(series),
                Err(err) => FetchResult::Failed(format!("{:#}", err)),
            };
            let _ = sender.send(result);
        });
    }

    fn check_fetch_result(&mut self, now: f64) {
        if let Some(receiver) = &self.receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.receiver = None;

            match result {
                FetchResult::Loaded(series) => {
                    self.full = Some(series);
                    self.apply_range(self.range, now);
                }
                FetchResult::Failed(detail) => {
                    log::error!("failed to initialize chart: {}", detail);
                    self.error_message =
                        "Failed to fetch India's GDP data. Please try again later.".to_string();
                }
            }
        }
    }

    /// Re-filter the fetched series and restart the bar animation.
    fn apply_range(&mut self, selector: RangeSelector, now: f64) {
        self.range = selector;
        if let Some(full) = &self.full {
            self.view = range::filter(full, selector, self.reference_year);
            self.summary = stats::summarize(&self.view);
            self.anim_start = Some(now);
        }
    }

    fn palette(&self) -> Palette {
        if self.light_theme {
            Palette::light()
        } else {
            Palette::dark()
        }
    }

    fn save_chart(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name(format!("india_gdp_{}.svg", self.range.tag()));
        if let Some(home) = dirs::home_dir() {
            dialog = dialog.set_directory(home);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };

        let config = ChartConfig::default().with_palette(self.palette());
        match viz::render_bar_chart(&self.view, &path, &config) {
            Ok(()) => {
                self.status_message = format!("Saved chart to {}", path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save chart: {:#}", err);
                self.status_message.clear();
            }
        }
    }

    fn draw_chart(&self, ui: &mut egui::Ui, now: f64, palette: &Palette) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        let (w, h) = (rect.width() as f64, rect.height() as f64);
        let Some(layout) = BarLayout::new(&self.view, w, h, PADDING) else {
            return;
        };
        let at = |x: f64, y: f64| egui::pos2(rect.left() + x as f32, rect.top() + y as f32);
        let text = color(palette.text);
        let grid = color(palette.grid).gamma_multiply(0.5);
        let small = egui::FontId::proportional(12.0);

        for v in layout.value_ticks(10) {
            let y = layout.y_for_value(v);
            painter.line_segment([at(PADDING, y), at(w - PADDING, y)], egui::Stroke::new(1.0, grid));
            painter.text(
                at(PADDING - 6.0, y),
                egui::Align2::RIGHT_CENTER,
                format_axis_tick(v),
                small.clone(),
                text,
            );
        }
        for year in layout.year_ticks(5) {
            let x = layout.x_for_year(year);
            painter.line_segment([at(x, PADDING), at(x, layout.baseline())], egui::Stroke::new(1.0, grid));
            painter.text(
                at(x, layout.baseline() + 6.0),
                egui::Align2::CENTER_TOP,
                year.to_string(),
                small.clone(),
                text,
            );
        }
        painter.text(
            at(w / 2.0, h - PADDING / 4.0),
            egui::Align2::CENTER_BOTTOM,
            "Year",
            egui::FontId::proportional(14.0),
            text,
        );

        let elapsed = self.anim_start.map_or(f64::INFINITY, |start| now - start);
        let hovered = response.hover_pos().and_then(|p| {
            layout.hit_test(
                &self.view,
                (p.x - rect.left()) as f64,
                (p.y - rect.top()) as f64,
            )
        });

        for (i, obs) in self.view.iter().enumerate() {
            let bar = layout.bar_rect(obs, bar_progress(i, elapsed));
            paint_gradient_bar(&painter, rect.min, bar, palette, hovered == Some(i));
        }
        if !animation_done(self.view.len(), elapsed) {
            ui.ctx().request_repaint();
        }

        if let Some(i) = hovered {
            let [date, gdp, usd] = tooltip_lines(&self.view.observations()[i]);
            response.on_hover_ui_at_pointer(|ui| {
                ui.strong(date);
                ui.label(gdp);
                ui.label(usd);
            });
        }
    }
}

impl eframe::App for GdpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.check_fetch_result(now);

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        let palette = self.palette();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("India's GDP");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = if self.light_theme { "Dark theme" } else { "Light theme" };
                    if ui.button(theme_label).clicked() {
                        self.light_theme = !self.light_theme;
                        ctx.set_visuals(if self.light_theme {
                            egui::Visuals::light()
                        } else {
                            egui::Visuals::dark()
                        });
                    }
                    if ui
                        .add_enabled(!self.view.is_empty(), egui::Button::new("Save chart…"))
                        .clicked()
                    {
                        self.save_chart();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing Economic Data...");
                });
                return;
            }

            if !self.error_message.is_empty() {
                ui.colored_label(color(palette.danger), &self.error_message);
            }
            if !self.status_message.is_empty() {
                ui.colored_label(color(palette.success), &self.status_message);
            }
            if self.full.is_none() {
                return;
            }

            ui.horizontal(|ui| match &self.summary {
                Some(s) => {
                    stat_card(ui, &s.formatted_current, "Current GDP", color(palette.text));
                    let growth_color = match s.trend() {
                        Trend::Up => palette.success,
                        Trend::Down => palette.danger,
                    };
                    stat_card(
                        ui,
                        &format_growth(s.growth_rate_percent),
                        "Annual Growth",
                        color(growth_color),
                    );
                    stat_card(
                        ui,
                        stats::GLOBAL_RANK,
                        stats::GLOBAL_RANK_LABEL,
                        color(palette.text),
                    );
                }
                None => {
                    ui.label("No data in selected range");
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for sel in RangeSelector::VARIANTS {
                    if ui.selectable_label(self.range == sel, sel.label()).clicked() {
                        self.apply_range(sel, now);
                    }
                }
            });

            ui.add_space(8.0);
            self.draw_chart(ui, now, &palette);
        });
    }
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn stat_card(ui: &mut egui::Ui, value: &str, label: &str, value_color: egui::Color32) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(value).size(22.0).strong().color(value_color));
            ui.label(egui::RichText::new(label).weak());
        });
    });
}

/// Bar filled top-to-bottom from `primary` to `secondary`, brightened when hovered.
fn paint_gradient_bar(
    painter: &egui::Painter,
    origin: egui::Pos2,
    bar: BarRect,
    palette: &Palette,
    hovered: bool,
) {
    let height = bar.height();
    if height <= 0.0 {
        return;
    }
    let step = height / GRADIENT_STEPS as f64;
    for k in 0..GRADIENT_STEPS {
        let t = k as f64 / (GRADIENT_STEPS - 1) as f64;
        let mut rgb = palette.primary.lerp(palette.secondary, t);
        if hovered {
            rgb = rgb.brighten(0.2);
        }
        let y0 = bar.y0 + step * k as f64;
        let slice = egui::Rect::from_min_max(
            egui::pos2(origin.x + bar.x0 as f32, origin.y + y0 as f32),
            egui::pos2(origin.x + bar.x1 as f32, origin.y + (y0 + step) as f32),
        );
        painter.rect_filled(slice, egui::Rounding::ZERO, color(rgb));
    }
}
