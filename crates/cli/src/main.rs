//! slabcut command-line interface

mod job;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use slabcut_cutting::{cut_list, generate_gcode};
use slabcut_guillotine::{GuillotineLayouter, LayoutResult};

use crate::job::Job;

#[derive(Parser)]
#[command(name = "slabcut")]
#[command(about = "Guillotine sheet-cutting layouts")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a layout and print it as JSON
    Layout {
        /// Path to the job file (JSON)
        job: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        summary: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute a layout and emit a G-code program
    Gcode {
        /// Path to the job file (JSON)
        job: PathBuf,

        /// Total cut depth in millimeters
        #[arg(long)]
        depth: Option<f64>,

        /// Depth removed per pass in millimeters
        #[arg(long)]
        pass_depth: Option<f64>,

        /// Cut contours clockwise
        #[arg(long)]
        clockwise: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute a layout and print the cut list as CSV
    CutList {
        /// Path to the job file (JSON)
        job: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Layout {
            job,
            pretty,
            summary,
            output,
        } => {
            let job = Job::load(&job)?;
            let result = run_layout(&job)?;

            let text = if summary {
                format_summary(&job, &result)
            } else if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            emit(&text, output.as_deref())?;
        }

        Commands::Gcode {
            job,
            depth,
            pass_depth,
            clockwise,
            output,
        } => {
            let mut job = Job::load(&job)?;
            job.override_cutting(depth, pass_depth, clockwise);

            let result = run_layout(&job)?;
            let program = generate_gcode(&result, &job.sheet, &job.cutting)?;
            emit(&program, output.as_deref())?;
        }

        Commands::CutList { job, output } => {
            let job = Job::load(&job)?;
            let result = run_layout(&job)?;
            emit(&cut_list(&result), output.as_deref())?;
        }
    }

    Ok(())
}

fn run_layout(job: &Job) -> anyhow::Result<LayoutResult> {
    let layouter = GuillotineLayouter::new(job.config.clone());
    let result = layouter
        .layout(&job.sheet, &job.parts)
        .context("layout failed")?;

    if !result.unplaced.is_empty() {
        log::warn!(
            "{} of {} parts did not fit: {}",
            result.unplaced.len(),
            job.parts.len(),
            result.unplaced.join(", ")
        );
    }
    Ok(result)
}

fn format_summary(job: &Job, result: &LayoutResult) -> String {
    let summary = result.summary();
    let mut lines = vec![
        format!(
            "Sheet: {} x {} (margin {}, kerf {})",
            job.sheet.width, job.sheet.height, job.sheet.margin, job.sheet.kerf
        ),
        format!("{:-<60}", ""),
    ];

    let mut placed: Vec<_> = result.placed.iter().collect();
    placed.sort_by_key(|p| p.sequence);
    for p in placed {
        lines.push(format!(
            "  #{:<3} {:<16} at ({:>8.1}, {:>8.1})  {:>7.1} x {:<7.1}{}",
            p.sequence,
            p.part_id,
            p.x,
            p.y,
            p.width,
            p.height,
            if p.rotated { "  rotated" } else { "" }
        ));
    }
    for id in &result.unplaced {
        lines.push(format!("  ---  {:<16} unplaced", id));
    }

    lines.push(format!("{:-<60}", ""));
    lines.push(format!(
        "Placed {}/{} ({} rotated), efficiency {}%, waste {:.1}",
        summary.placed, summary.total_parts, summary.rotated, summary.efficiency, summary.waste_area
    ));
    lines.join("\n")
}

fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
