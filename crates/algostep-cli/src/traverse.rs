//! `algostep traverse` and `algostep show`: animate DFS or BFS over a graph.

use std::thread;
use std::time::Duration;

use algostep_core::{
    drive, graph_frame, Color, DrawCommand, EngineConfig, Frame, Graph, GraphLayout, Scheduler,
    TraversalKind, TraversalResult, TraversalRun,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;

use crate::display::{paint, timestamp, visit_line};
use crate::{repl, GraphArgs, OutputFormat, TraverseArgs};

/// Final state of a traversal run, as printed by `--json`.
#[derive(Debug, Serialize)]
struct TraversalReport<'a> {
    algorithm: TraversalKind,
    start: &'a str,
    #[serde(flatten)]
    result: &'a TraversalResult,
    unvisited: Vec<&'a str>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<Vec<DrawCommand>>,
}

/// A graph before any traversal, as printed by `show --json`.
#[derive(Debug, Serialize)]
struct GraphReport<'a> {
    vertices: Vec<&'a str>,
    adjacency: IndexMap<&'a str, Vec<&'a str>>,
    edges: Vec<(&'a str, &'a str)>,
    draw: Vec<DrawCommand>,
}

/// Sleeps for non-zero delays.
pub fn pace(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

fn build_graph(args: &GraphArgs) -> Result<Graph> {
    let graph = Graph::from_text(&args.vertices, &args.edges);
    if graph.is_empty() {
        anyhow::bail!("no vertices given");
    }
    Ok(graph)
}

pub fn show(config: &EngineConfig, args: &GraphArgs, format: OutputFormat) -> Result<()> {
    let graph = build_graph(args)?;
    let layout = GraphLayout::circle(&graph, &config.render);
    let draw = graph_frame(
        &graph,
        &layout,
        &TraversalResult::default(),
        TraversalKind::Dfs,
        &config.render,
    );

    let adjacency: IndexMap<&str, Vec<&str>> = graph
        .vertices()
        .map(|v| (v, graph.neighbors(v).into_iter().flatten().collect()))
        .collect();
    match format {
        OutputFormat::Json => {
            let report = GraphReport {
                vertices: graph.vertices().collect(),
                adjacency,
                edges: graph.canonical_edges(),
                draw,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for (vertex, neighbors) in &adjacency {
                println!("{} {}", format!("{vertex}:").cyan(), neighbors.join(" "));
            }
            let edges: Vec<String> = graph
                .canonical_edges()
                .into_iter()
                .map(|(u, v)| format!("{u}-{v}"))
                .collect();
            println!("{} {}", "Edges:".cyan(), edges.join(" "));
        }
    }
    Ok(())
}

pub fn run(config: &EngineConfig, args: &TraverseArgs, format: OutputFormat) -> Result<()> {
    let graph = build_graph(&args.graph)?;

    let mut scheduler = Scheduler::new(config);
    let ticket = scheduler
        .start_traversal(graph, &args.start, args.algorithm)
        .context("cannot start traversal")?;

    if args.interactive {
        return repl::run(scheduler, ticket);
    }

    let accent = Color::for_traversal(args.algorithm);
    if format == OutputFormat::Text {
        println!(
            "{} from {}",
            args.algorithm.name().to_uppercase().bold(),
            paint(&args.start, accent)
        );
    }

    let mut step = 0;
    drive(
        &mut scheduler,
        ticket,
        |frame| {
            if let (OutputFormat::Text, Frame::Visit(event)) = (format, frame) {
                step += 1;
                println!("{}", visit_line(step, event, accent));
            }
        },
        pace,
    );

    let run = scheduler.traversal().context("traversal run missing")?;
    let draw = args.draw.then(|| final_frame(config, run));
    match format {
        OutputFormat::Json => {
            let report = TraversalReport {
                algorithm: run.kind(),
                start: run.start_vertex(),
                result: run.progress(),
                unvisited: unvisited(run),
                started_at: run.started_at(),
                ended_at: run.ended_at(),
                draw,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_summary(run);
            if let Some(commands) = draw {
                println!("{}", serde_json::to_string_pretty(&commands)?);
            }
        }
    }
    Ok(())
}

/// Vertices the run never reached, in declaration order.
pub fn unvisited(run: &TraversalRun) -> Vec<&str> {
    run.graph()
        .vertices()
        .filter(|v| !run.progress().is_visited(v))
        .collect()
}

fn final_frame(config: &EngineConfig, run: &TraversalRun) -> Vec<DrawCommand> {
    let layout = GraphLayout::circle(run.graph(), &config.render);
    graph_frame(
        run.graph(),
        &layout,
        run.progress(),
        run.kind(),
        &config.render,
    )
}

fn print_summary(run: &TraversalRun) {
    let unvisited = unvisited(run);
    println!();
    println!("{} {}", "Order:    ".cyan(), run.progress().order().join(" "));
    if unvisited.is_empty() {
        println!("{} {}", "Unvisited:".cyan(), "none".dimmed());
    } else {
        println!("{} {}", "Unvisited:".cyan(), unvisited.join(" "));
    }
    println!("{} {}", "Started:  ".cyan(), timestamp(run.started_at()));
    if let Some(ended_at) = run.ended_at() {
        println!("{} {}", "Finished: ".cyan(), timestamp(ended_at));
    }
}
