use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use india_gdp::format::{format_growth, format_inr, format_usd_billions};
use india_gdp::viz::{ChartConfig, Palette};
use india_gdp::{Client, RangeSelector, Series, SummaryStats, api, range, stats, viz};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "india-gdp",
    version,
    about = "Fetch, filter, summarize & chart India's GDP from the World Bank API"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the GDP series (and optionally plot it) and print headline stats.
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Theme {
    Dark,
    Light,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Time range: all, 5y, or 10y
    #[arg(short, long, default_value = "all")]
    range: RangeSelector,
    /// Reference year for the 5y/10y windows (defaults to the current year)
    #[arg(short = 'y', long)]
    year: Option<i32>,
    /// Read a saved World Bank API response (JSON) instead of fetching.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Override the API root (default https://api.worldbank.org/v2).
    #[arg(long)]
    base_url: Option<String>,
    /// Write the bar chart to the given .svg path.
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the chart (default 960).
    #[arg(long, default_value_t = 960)]
    width: u32,
    /// Height of the chart (default 540).
    #[arg(long, default_value_t = 540)]
    height: u32,
    /// Chart colour theme.
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
    /// Print observations and stats as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Also print every observation in range.
    #[arg(long, default_value_t = false)]
    list: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    range: &'static str,
    reference_year: i32,
    observations: &'a Series,
    summary: Option<SummaryStats>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn load(args: &GetArgs) -> Result<Series> {
    if let Some(path) = args.input.as_ref() {
        log::info!("reading GDP series from {}", path.display());
        return api::load_series_from_file(path);
    }
    let mut client = Client::default();
    if let Some(base) = args.base_url.as_ref() {
        client = client.with_base_url(base.clone());
    }
    client.fetch_series()
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let full = load(&args)?;
    let reference_year = args.year.unwrap_or_else(range::current_year);
    let view = range::filter(&full, args.range, reference_year);
    let summary = stats::summarize(&view);

    if args.json {
        let report = Report {
            range: args.range.tag(),
            reference_year,
            observations: &view,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&args, &view, summary.as_ref(), reference_year);
    }

    if let Some(plot_path) = args.plot.as_ref() {
        if view.is_empty() {
            eprintln!("Nothing to plot for range {}", args.range);
        } else {
            let palette = match args.theme {
                Theme::Dark => Palette::dark(),
                Theme::Light => Palette::light(),
            };
            let config = ChartConfig::default()
                .with_size(args.width, args.height)
                .with_palette(palette);
            viz::render_bar_chart(&view, plot_path, &config)?;
            eprintln!("Wrote plot to {}", plot_path.display());
        }
    }

    Ok(())
}

fn print_text(args: &GetArgs, view: &Series, summary: Option<&SummaryStats>, reference_year: i32) {
    println!(
        "India GDP [{}] relative to {}: {} observations",
        args.range,
        reference_year,
        view.len()
    );
    match summary {
        Some(s) => {
            println!("Current GDP:   {}", s.formatted_current);
            println!("Annual Growth: {}", format_growth(s.growth_rate_percent));
            println!("Global Rank:   {} ({})", stats::GLOBAL_RANK, stats::GLOBAL_RANK_LABEL);
        }
        None => println!("No data in selected range"),
    }
    if args.list {
        for o in view {
            println!(
                "{:>6}  {:>22}  {:>10}",
                o.date,
                format_inr(o.value),
                format_usd_billions(o.value)
            );
        }
    }
}
