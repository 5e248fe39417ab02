// src/reporting/console.rs
use std::fmt::Write as _;

use colored::Colorize;

use super::shared::{format_score, pluralize, GraphStats};
use crate::graph::RankedPatch;

/// Formats the ranking as plain text: a header, then one line per
/// patch in rank order.
#[must_use]
pub fn render_ranking(ranked: &[RankedPatch], precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Habitat Importance Ranking ---");
    for r in ranked {
        let _ = writeln!(out, "{}", ranking_line(r, precision));
    }
    out
}

fn ranking_line(r: &RankedPatch, precision: usize) -> String {
    format!(
        "  - Patch {}: \t Importance Score = {}",
        r.id,
        format_score(r.score, precision)
    )
}

/// Prints [`render_ranking`] to stdout.
pub fn print_ranking(ranked: &[RankedPatch], precision: usize) {
    print!("{}", render_ranking(ranked, precision));
}

#[must_use]
pub fn render_stats(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Nodes:           {}", stats.nodes);
    let _ = writeln!(out, "Edges:           {}", stats.edges);
    let _ = writeln!(out, "Isolated:        {}", stats.isolated);
    let _ = writeln!(out, "Dangling:        {}", stats.dangling);
    let _ = writeln!(out, "Mean out-degree: {:.2}", stats.mean_out_degree);
    match (stats.min_weight, stats.max_weight) {
        (Some(lo), Some(hi)) => {
            let _ = writeln!(out, "Edge weights:    {lo:.4} .. {hi:.4}");
        }
        _ => {
            let _ = writeln!(out, "Edge weights:    none");
        }
    }
    match stats.reach {
        Some(d) => {
            let _ = writeln!(out, "Max reach:       {d:.2}");
        }
        None => {
            let _ = writeln!(out, "Max reach:       unbounded");
        }
    }
    out
}

pub fn print_stats(stats: &GraphStats) {
    print!("{}", render_stats(stats));
    if stats.isolated > 0 {
        eprintln!(
            "{}",
            format!(
                "{} without any connection above threshold",
                pluralize(stats.isolated, "patch")
            )
            .yellow()
        );
    }
}

/// Prints a dimmed progress line to stderr, keeping stdout for results.
pub fn print_step(message: &str) {
    eprintln!("{}", message.dimmed());
}
