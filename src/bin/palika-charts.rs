use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use palika_charts::stats::{self, Summary};
use palika_charts::storage;
use palika_charts::viz::{self, ChartKind, RenderConfig};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "palika-charts",
    version,
    about = "Render municipal census data to standalone SVG charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pie chart from category -> value data.
    Pie(RenderArgs),
    /// Grouped bar chart from group -> category -> value data.
    GroupedBar(RenderArgs),
    /// Compact stacked bar chart with in-segment value labels.
    StackedBar(RenderArgs),
    /// Population pyramid from bucket -> male/female data.
    Pyramid(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset file (.json or .csv).
    #[arg(short, long)]
    data: PathBuf,
    /// Render options as JSON (camelCase keys, e.g. {"width": 800, "nepaliNumbers": true}).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write output here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Canvas width in pixels (overrides the config file).
    #[arg(long)]
    width: Option<f64>,
    /// Canvas height in pixels (overrides the config file).
    #[arg(long)]
    height: Option<f64>,
    /// Use Devanagari digits.
    #[arg(long, default_value_t = false)]
    nepali: bool,
    /// Hide the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// Draw value labels on slices/bars.
    #[arg(long, default_value_t = false)]
    values: bool,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Emit a base64 data: URL instead of raw SVG.
    #[arg(long, default_value_t = false)]
    data_url: bool,
    /// Print dataset statistics to stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Save dataset statistics as CSV.
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Pie(args) => cmd_render(ChartKind::Pie, args),
        Command::GroupedBar(args) => cmd_render(ChartKind::GroupedBar, args),
        Command::StackedBar(args) => cmd_render(ChartKind::StackedBar, args),
        Command::Pyramid(args) => cmd_render(ChartKind::Pyramid, args),
    }
}

fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut cfg = match &args.config {
        Some(p) => storage::load_config(p)?,
        None => RenderConfig::default(),
    };
    if args.width.is_some() {
        cfg.width = args.width;
    }
    if args.height.is_some() {
        cfg.height = args.height;
    }
    if args.nepali {
        cfg.nepali_numbers = Some(true);
    }
    if args.no_legend {
        cfg.show_legend = Some(false);
    }
    if args.values {
        cfg.show_values = Some(true);
    }
    if let Some(t) = &args.title {
        cfg.title = Some(t.clone());
    }
    Ok(cfg)
}

fn summaries(kind: ChartKind, data: &Path) -> Result<Vec<Summary>> {
    Ok(match kind {
        ChartKind::Pie => stats::pie_summary(&storage::load_chart_data(data)?),
        ChartKind::GroupedBar | ChartKind::StackedBar => {
            stats::grouped_summary(&storage::load_grouped_series(data)?)
        }
        ChartKind::Pyramid => stats::pyramid_summary(&storage::load_pyramid_data(data)?),
    })
}

fn cmd_render(kind: ChartKind, args: RenderArgs) -> Result<()> {
    let cfg = build_config(&args)?;
    let svg = storage::render_file(kind, &args.data, &cfg)?;

    match (&args.out, args.data_url) {
        (Some(path), false) => {
            storage::save_svg(&svg, path)?;
            eprintln!("Wrote chart to {}", path.display());
        }
        (Some(path), true) => {
            storage::save_data_url(&svg, path)?;
            eprintln!("Wrote data URL to {}", path.display());
        }
        (None, false) => std::io::stdout().write_all(svg.as_bytes())?,
        (None, true) => println!("{}", viz::to_data_url(&svg)),
    }

    if !args.stats && args.stats_out.is_none() {
        return Ok(());
    }
    let sums = summaries(kind, &args.data)?;
    if let Some(path) = &args.stats_out {
        storage::save_summary_csv(&sums, path)?;
        eprintln!("Saved {} summary rows to {}", sums.len(), path.display());
    }
    if args.stats {
        for s in &sums {
            eprintln!(
                "{}  count={} missing={}  total={} min={} max={}",
                s.key,
                s.count,
                s.missing,
                fmt_opt(Some(s.total)),
                fmt_opt(s.min),
                fmt_opt(s.max)
            );
        }
    }

    Ok(())
}
