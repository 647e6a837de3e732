pub mod arc_path;
pub mod chart;
pub mod error;
pub mod layout;
pub mod palette;
pub mod params;
pub mod polar_sector;
pub mod timeline;

use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use layout::TimelineLayout;
use params::DEFAULT_PARAMS;
use timeline::Timeline;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Format {
    /// Standalone SVG document with legend
    Svg,
    /// Slices, colors and path data as JSON
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Lays out a course timeline as a radial donut chart.")]
pub struct Args {
    /// Path to the timeline JSON (a bare timeline or a full advice response)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Treat the input as a list of planned courses and schedule them back to back
    #[arg(long)]
    pub courses: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reject schedules whose week counts don't add up to the timeline total
    #[arg(long)]
    pub strict: bool,

    /// Gap between week slices, in degrees
    #[arg(long)]
    pub gap: Option<f64>,

    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let start_time = Instant::now();

    log::set_max_level(log::LevelFilter::Trace);
    env_logger::builder()
        .filter(
            None,
            if args.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .parse_default_env()
        .init();

    let mut params = *DEFAULT_PARAMS;
    params.strict = args.strict;
    if let Some(gap) = args.gap {
        anyhow::ensure!(gap.is_finite() && gap >= 0., "gap must be a finite non-negative angle, got {}", gap);
        params.gap_degrees = gap;
    }
    log::debug!("{}", params);

    log::info!("Reading timeline from {}", args.file.display());
    let timeline = if args.courses {
        Timeline::from_courses_file(&args.file)?
    } else {
        Timeline::from_file(&args.file)?
    };
    log::info!(
        "Timeline: {} weeks, {} scheduled course(s) covering {} week(s)",
        timeline.weeks,
        timeline.schedule.len(),
        timeline.scheduled_weeks()
    );

    let layout = TimelineLayout::compute(&timeline, &params)
        .with_context(|| format!("invalid timeline in {}", args.file.display()))?;

    let rendered = match args.format {
        Format::Svg => chart::render_svg(&layout, &timeline, &params),
        Format::Json => {
            let export = chart::chart_data(&layout, timeline.weeks, &params);
            let mut json = serde_json::to_string_pretty(&export)?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Chart written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    log::info!("Total runtime: {:.3?}", start_time.elapsed());
    Ok(())
}
