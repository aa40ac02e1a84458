//! Interactive traversal: step by hand and inspect vertices mid-run.

use algostep_core::{Color, Frame, Scheduler, Tick, Ticket};
use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::display::{paint, timestamp, vertex_report, visit_line};
use crate::traverse::unvisited;

const PROMPT: &str = "algostep> ";

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue(String),
    Quit,
    Error(String),
}

/// A traversal run paused between ticks.
pub struct Session {
    scheduler: Scheduler,
    ticket: Option<Ticket>,
    steps: usize,
}

impl Session {
    pub fn new(scheduler: Scheduler, ticket: Ticket) -> Self {
        Self {
            scheduler,
            ticket: Some(ticket),
            steps: 0,
        }
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            return CommandResult::Continue(String::new());
        };
        if !first.starts_with('.') {
            return self.cmd_inspect(first);
        }

        match first.to_lowercase().as_str() {
            ".quit" | ".exit" | ".q" => CommandResult::Quit,
            ".help" | ".h" => CommandResult::Continue(help()),
            ".step" | ".s" => match parts.get(1).map(|n| n.parse::<usize>()) {
                None => CommandResult::Continue(self.step(1)),
                Some(Ok(n)) => CommandResult::Continue(self.step(n)),
                Some(Err(_)) => CommandResult::Error("Use: .step [count]".to_string()),
            },
            ".run" => CommandResult::Continue(self.step(usize::MAX)),
            ".order" => CommandResult::Continue(self.order()),
            ".unvisited" => CommandResult::Continue(self.unvisited()),
            cmd => CommandResult::Error(format!("Unknown command: {cmd}")),
        }
    }

    fn accent(&self) -> Color {
        self.scheduler
            .traversal()
            .map_or(Color::Black, |run| Color::for_traversal(run.kind()))
    }

    /// Performs up to `count` ticks, describing each.
    fn step(&mut self, count: usize) -> String {
        let accent = self.accent();
        let mut lines = Vec::new();
        for _ in 0..count {
            let Some(ticket) = self.ticket.take() else {
                lines.push("Traversal already finished.".dimmed().to_string());
                break;
            };
            match self.scheduler.tick(ticket) {
                Tick::Continue {
                    frame: Frame::Visit(event),
                    next,
                    ..
                } => {
                    self.steps += 1;
                    lines.push(visit_line(self.steps, &event, accent));
                    self.ticket = Some(next);
                }
                Tick::Continue { next, .. } => self.ticket = Some(next),
                Tick::Finished { ended_at, .. } => {
                    lines.push(format!("Traversal finished at {}", timestamp(ended_at)));
                    break;
                }
                Tick::Stale => break,
            }
        }
        lines.join("\n")
    }

    fn cmd_inspect(&self, vertex: &str) -> CommandResult {
        let Some(run) = self.scheduler.traversal() else {
            return CommandResult::Error("No traversal run".to_string());
        };
        if !run.graph().contains(vertex) {
            return CommandResult::Error(format!("Vertex '{vertex}' not in graph"));
        }
        CommandResult::Continue(vertex_report(&run.inspect(vertex)))
    }

    fn order(&self) -> String {
        let accent = self.accent();
        self.scheduler.traversal().map_or_else(String::new, |run| {
            run.progress()
                .order()
                .iter()
                .map(|v| paint(v, accent).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    fn unvisited(&self) -> String {
        self.scheduler
            .traversal()
            .map_or_else(String::new, |run| unvisited(run).join(" "))
    }
}

fn help() -> String {
    [
        "Commands:".bold().to_string(),
        "  <vertex>          Inspect a vertex (position, parent, children, visit time)".to_string(),
        "  .step [n], .s     Advance n steps (default 1)".to_string(),
        "  .run              Advance until the traversal finishes".to_string(),
        "  .order            Visit order so far".to_string(),
        "  .unvisited        Vertices not visited yet".to_string(),
        "  .help, .h         Show this help".to_string(),
        "  .quit, .q         Exit".to_string(),
    ]
    .join("\n")
}

/// Runs the prompt until `.quit` or end of input.
pub fn run(scheduler: Scheduler, ticket: Ticket) -> Result<()> {
    let mut session = Session::new(scheduler, ticket);
    let mut rl = DefaultEditor::new()?;
    println!("Type {} for commands.", ".help".bold());

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                match session.handle_line(line) {
                    CommandResult::Continue(output) => {
                        if !output.is_empty() {
                            println!("{output}");
                        }
                    }
                    CommandResult::Quit => break,
                    CommandResult::Error(message) => eprintln!("{} {message}", "Error:".red()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
