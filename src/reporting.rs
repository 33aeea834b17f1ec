// src/reporting.rs
//! Human-facing diagnostics. Everything here goes to stderr so stdout only
//! ever carries rank output.

use colored::Colorize;

use crate::graph::RankGraph;

pub fn print_graph_summary(graph: &RankGraph, passes: usize) {
    eprintln!(
        "{} {} vertices, {} edges, {} sinks; {} pass{}",
        "graph:".cyan().bold(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.sinks().len(),
        passes,
        if passes == 1 { "" } else { "es" }
    );
}

pub fn print_pass(pass: usize, total: usize, mass: f32) {
    eprintln!(
        "  {} {pass}/{total} {}",
        "pass".dimmed(),
        format!("mass={mass:.6}").dimmed()
    );
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}
