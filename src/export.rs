// src/export.rs
//! Graph renderings for external visualization tools.
//!
//! Node size scales with importance and edge width with connectivity weight,
//! so a plot shows at a glance which patches hold the network together.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{RankError, Result};
use crate::graph::{HabitatGraph, ImportanceDistribution};

/// Marker area (points²) per unit of score.
pub const NODE_SIZE_SCALE: f64 = 5000.0;
/// Line width (points) per unit of edge weight.
pub const EDGE_WIDTH_SCALE: f64 = 5.0;

const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT, positioned for `neato -n`.
    #[default]
    Dot,
    Json,
}

#[derive(Serialize)]
struct NodeView<'a> {
    id: &'a str,
    x: f64,
    y: f64,
    quality: f64,
    score: f64,
    size: f64,
}

#[derive(Serialize)]
struct EdgeView<'a> {
    source: &'a str,
    target: &'a str,
    weight: f64,
    width: f64,
}

#[derive(Serialize)]
struct GraphView<'a> {
    nodes: Vec<NodeView<'a>>,
    edges: Vec<EdgeView<'a>>,
}

/// Renders the graph in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(
    format: ExportFormat,
    graph: &HabitatGraph,
    scores: &ImportanceDistribution,
) -> Result<String> {
    match format {
        ExportFormat::Dot => Ok(render_dot(graph, scores)),
        ExportFormat::Json => render_json(graph, scores),
    }
}

/// Renders and writes the graph to `path`.
///
/// # Errors
/// Returns `RankError::Export` if the file cannot be written.
pub fn write(
    path: &Path,
    format: ExportFormat,
    graph: &HabitatGraph,
    scores: &ImportanceDistribution,
) -> Result<()> {
    let content = render(format, graph, scores)?;
    fs::write(path, content).map_err(|source| RankError::Export {
        source,
        path: path.to_path_buf(),
    })
}

#[must_use]
pub fn render_dot(graph: &HabitatGraph, scores: &ImportanceDistribution) -> String {
    let mut out = String::new();
    out.push_str("digraph habitat {\n");
    out.push_str("  node [shape=circle, style=filled, fillcolor=skyblue, fixedsize=true];\n");
    out.push_str("  edge [color=gray, arrowsize=0.4];\n");

    for patch in graph.patches() {
        let score = scores.get(patch.id()).unwrap_or(0.0);
        let diameter = node_size(score).sqrt() / POINTS_PER_INCH;
        let pos = patch.pos();
        let _ = writeln!(
            out,
            "  {} [pos=\"{},{}!\", width={:.4}, tooltip=\"score {:.4}\"];",
            quote(patch.id().as_str()),
            pos.x,
            pos.y,
            diameter,
            score
        );
    }

    for (source, target, weight) in graph.edges() {
        let _ = writeln!(
            out,
            "  {} -> {} [penwidth={:.4}];",
            quote(source.as_str()),
            quote(target.as_str()),
            edge_width(weight)
        );
    }

    out.push_str("}\n");
    out
}

/// # Errors
/// Returns error if serialization fails.
pub fn render_json(graph: &HabitatGraph, scores: &ImportanceDistribution) -> Result<String> {
    let nodes = graph
        .patches()
        .iter()
        .map(|p| {
            let score = scores.get(p.id()).unwrap_or(0.0);
            NodeView {
                id: p.id().as_str(),
                x: p.pos().x,
                y: p.pos().y,
                quality: p.quality(),
                score,
                size: node_size(score),
            }
        })
        .collect();
    let edges = graph
        .edges()
        .map(|(s, t, w)| EdgeView {
            source: s.as_str(),
            target: t.as_str(),
            weight: w,
            width: edge_width(w),
        })
        .collect();

    serde_json::to_string_pretty(&GraphView { nodes, edges })
        .map_err(|e| RankError::InvalidConfig(format!("cannot serialize graph: {e}")))
}

#[must_use]
pub fn node_size(score: f64) -> f64 {
    NODE_SIZE_SCALE * score
}

#[must_use]
pub fn edge_width(weight: f64) -> f64 {
    EDGE_WIDTH_SCALE * weight
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
