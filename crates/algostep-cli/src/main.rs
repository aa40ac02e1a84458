#![allow(clippy::doc_markdown)]
//! algostep CLI - animate graph traversals and sorts in the terminal.

mod display;
mod repl;
mod sort;
mod traverse;

use std::path::PathBuf;

use algostep_core::{EngineConfig, SchedulerConfig, SortKind, TraversalKind};
use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Vertices of the built-in demo graph.
pub const DEMO_VERTICES: &str = "A,B,C,D,E,F,G,H,I,J";
/// Edges of the built-in demo graph: `A..G` form one component, `H-I-J` another.
pub const DEMO_EDGES: &str = "A B,B C,A D,D E,E F,F G,H I,I J";

/// algostep - step-by-step graph traversal and sorting
#[derive(Parser, Debug)]
#[command(name = "algostep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "ALGOSTEP_CONFIG")]
    config: Option<PathBuf>,

    /// Delay between steps in milliseconds, overriding the configuration
    #[arg(long, global = true, conflicts_with = "no_delay")]
    delay_ms: Option<u64>,

    /// Print every step without pausing
    #[arg(long, global = true)]
    no_delay: bool,

    /// Print the final state as JSON instead of step-by-step text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a graph's adjacency lists and drawn edges without traversing it
    Show(GraphArgs),

    /// Animate a depth-first or breadth-first traversal
    Traverse(TraverseArgs),

    /// Animate a sort
    Sort(SortArgs),

    /// Print the effective configuration as TOML
    Config,
}

/// Graph given on the command line.
#[derive(ClapArgs, Debug)]
pub struct GraphArgs {
    /// Comma-separated vertex labels
    #[arg(long, default_value = DEMO_VERTICES)]
    pub vertices: String,

    /// Comma-separated edges, each two labels separated by a space
    #[arg(long, default_value = DEMO_EDGES)]
    pub edges: String,
}

/// Options of `algostep traverse`.
#[derive(ClapArgs, Debug)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start vertex
    #[arg(short, long, default_value = "A")]
    pub start: String,

    /// Traversal algorithm (dfs, bfs)
    #[arg(short, long, default_value = "dfs")]
    pub algorithm: TraversalKind,

    /// Step manually and inspect vertices at a prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Also print the draw commands of the final frame
    #[arg(long)]
    pub draw: bool,
}

/// Options of `algostep sort`.
#[derive(ClapArgs, Debug)]
pub struct SortArgs {
    /// Sort algorithm (bubble, insertion, selection, counting)
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: SortKind,

    /// Comma- or space-separated integers to sort
    #[arg(long, conflicts_with = "random")]
    pub values: Option<String>,

    /// Sort N random values between 10 and 100 (the default, with N = 30)
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the draw commands of the final frame
    #[arg(long)]
    pub draw: bool,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One colored line per step, then a summary.
    Text,
    /// A single JSON document once the run finishes.
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = EngineConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    if args.no_delay {
        config.scheduler = SchedulerConfig::uniform(0);
    } else if let Some(delay_ms) = args.delay_ms {
        config.scheduler = SchedulerConfig::uniform(delay_ms);
    }
    tracing::debug!(?config, "configuration loaded");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match args.command {
        Commands::Show(cmd) => traverse::show(&config, &cmd, format),
        Commands::Traverse(cmd) => traverse::run(&config, &cmd, format),
        Commands::Sort(cmd) => sort::run(&config, &cmd, format),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
