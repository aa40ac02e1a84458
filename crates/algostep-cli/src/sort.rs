//! `algostep sort`: animate one of the four sorts.

use algostep_core::{
    drive, parse_values, sort_frame, DrawCommand, EngineConfig, Frame, Scheduler, SortKind,
    SortRun, SortStats,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::display::{array_line, bar_chart, timestamp};
use crate::traverse::pace;
use crate::{OutputFormat, SortArgs};

/// Bars drawn when neither `--values` nor `--random N` is given.
const DEFAULT_RANDOM_LEN: usize = 30;

/// Final state of a sort run, as printed by `--json`.
#[derive(Debug, Serialize)]
struct SortReport<'a> {
    algorithm: SortKind,
    original: &'a [i64],
    sorted: &'a [i64],
    stats: SortStats,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<Vec<DrawCommand>>,
}

/// Random bar heights in `10..=100`.
pub fn random_values(len: usize, seed: Option<u64>) -> Vec<i64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..len).map(|_| rng.gen_range(10..=100)).collect()
}

fn input_values(args: &SortArgs) -> Result<Vec<i64>> {
    match &args.values {
        Some(text) => Ok(parse_values(text)?),
        None => Ok(random_values(
            args.random.unwrap_or(DEFAULT_RANDOM_LEN),
            args.seed,
        )),
    }
}

pub fn run(config: &EngineConfig, args: &SortArgs, format: OutputFormat) -> Result<()> {
    let values = input_values(args).context("cannot read values")?;

    let mut scheduler = Scheduler::new(config);
    let ticket = scheduler
        .start_sort(values, args.algorithm)
        .context("cannot start sort")?;

    if format == OutputFormat::Text {
        println!("{} sort", args.algorithm.name().to_uppercase().bold());
    }

    drive(
        &mut scheduler,
        ticket,
        |frame| {
            if let (
                OutputFormat::Text,
                Frame::Sort {
                    values,
                    highlighted,
                },
            ) = (format, frame)
            {
                println!("{}", array_line(values, highlighted));
            }
        },
        pace,
    );

    let run = scheduler.sort().context("sort run missing")?;
    let draw = args.draw.then(|| final_frame(config, run));
    match format {
        OutputFormat::Json => {
            let report = SortReport {
                algorithm: run.kind(),
                original: run.original(),
                sorted: run.values(),
                stats: run.stats(),
                started_at: run.started_at(),
                ended_at: run.ended_at(),
                draw,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_summary(config, run);
            if let Some(commands) = draw {
                println!("{}", serde_json::to_string_pretty(&commands)?);
            }
        }
    }
    Ok(())
}

fn final_frame(config: &EngineConfig, run: &SortRun) -> Vec<DrawCommand> {
    sort_frame(run.values(), &run.last_step().highlighted, &config.render)
}

fn print_summary(config: &EngineConfig, run: &SortRun) {
    let stats = run.stats();
    println!();
    print!("{}", bar_chart(&final_frame(config, run)));
    println!(
        "{} {} steps, {} comparisons, {} moves",
        "Sorted:  ".cyan(),
        stats.steps,
        stats.comparisons,
        stats.moves
    );
    println!("{} {}", "Started: ".cyan(), timestamp(run.started_at()));
    if let Some(ended_at) = run.ended_at() {
        println!("{} {}", "Finished:".cyan(), timestamp(ended_at));
    }
}
