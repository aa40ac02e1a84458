//! Terminal rendering of frames and draw commands.

use std::collections::BTreeSet;

use algostep_core::{Color, DrawCommand, ParentLink, VertexReport, VisitEvent};
use chrono::{DateTime, SecondsFormat, Utc};
use colored::{ColoredString, Colorize};

/// Widest bar of [`bar_chart`], in columns.
const CHART_WIDTH: f64 = 40.0;

/// Paints `text` with the terminal approximation of a draw colour.
pub fn paint(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Orange => text.truecolor(255, 165, 0).bold(),
        Color::Green => text.green().bold(),
        Color::LightBlue => text.bright_cyan(),
        Color::SkyBlue => text.cyan(),
        Color::Red => text.red().bold(),
        Color::Black => text.normal(),
    }
}

/// RFC 3339 with milliseconds, e.g. `2024-01-01T12:00:00.000Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One traversal step: `  3. C  (via B-C)`.
pub fn visit_line(step: usize, event: &VisitEvent, accent: Color) -> String {
    let vertex = paint(&event.vertex, accent);
    match event.edge() {
        Some((parent, child)) => format!("{step:>3}. {vertex}  (via {parent}-{child})"),
        None => format!("{step:>3}. {vertex}  (start)"),
    }
}

/// One sort step: the array with touched indices in red.
pub fn array_line(values: &[i64], highlighted: &BTreeSet<usize>) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let cell = format!("{v:>4}");
            if highlighted.contains(&i) {
                paint(&cell, Color::Red).to_string()
            } else {
                cell
            }
        })
        .collect::<String>()
}

/// Horizontal bar chart of a sort frame, longest bar [`CHART_WIDTH`] columns.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rounded, clamped to >= 0
pub fn bar_chart(commands: &[DrawCommand]) -> String {
    let bars: Vec<(usize, f64, Color)> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Bar {
                index,
                height,
                fill,
                ..
            } => Some((*index, *height, *fill)),
            _ => None,
        })
        .collect();
    let tallest = bars.iter().map(|(_, h, _)| *h).fold(0.0_f64, f64::max);
    if tallest <= 0.0 {
        return String::new();
    }

    let mut chart = String::new();
    for (index, height, fill) in bars {
        let columns = (height.max(0.0) / tallest * CHART_WIDTH).round() as usize;
        let bar = "█".repeat(columns);
        chart.push_str(&format!("{index:>4} │{}\n", paint(&bar, fill)));
    }
    chart
}

/// Multi-line description of an inspection lookup.
pub fn vertex_report(report: &VertexReport) -> String {
    let position = report
        .position
        .map_or_else(|| "not visited".dimmed().to_string(), |p| p.to_string());
    let parent = match &report.parent {
        ParentLink::NotVisited => "not visited".dimmed().to_string(),
        ParentLink::Root => "none (start vertex)".to_string(),
        ParentLink::Vertex(parent) => parent.clone(),
    };
    let children = if report.children.is_empty() {
        "none".dimmed().to_string()
    } else {
        report.children.join(", ")
    };
    let visited_at = report
        .visited_at
        .map_or_else(|| "not yet visited".dimmed().to_string(), timestamp);

    format!(
        "{}\n  {} {}\n  {} {}\n  {} {}\n  {} {}",
        report.vertex.bold(),
        "Position:".cyan(),
        position,
        "Parent:".cyan(),
        parent,
        "Children:".cyan(),
        children,
        "Visited:".cyan(),
        visited_at,
    )
}
