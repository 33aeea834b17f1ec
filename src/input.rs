// src/input.rs
//! Parses the whitespace-delimited edge stream:
//! `<edge count> <iteration count> (<from> <to>){edge count}`.

use std::fs;
use std::io::{self, ErrorKind, Read};
use std::num::{IntErrorKind, ParseIntError};
use std::path::{Path, PathBuf};

use crate::error::{RankError, Result};
use crate::graph::RankGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// A validated ranking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankJob {
    pub iterations: usize,
    pub edges: Vec<Edge>,
}

impl RankJob {
    /// Inserts the edges into a fresh graph in input order.
    #[must_use]
    pub fn into_graph(self) -> RankGraph {
        RankGraph::from_edges(self.edges.into_iter().map(|e| (e.from, e.to)))
    }
}

/// Parses and validates a complete token stream.
///
/// # Errors
/// Returns [`RankError::MalformedInput`] if a count is missing, negative or not
/// an integer, or if the number of label tokens disagrees with the edge count.
pub fn parse(text: &str) -> Result<RankJob> {
    let mut tokens = text.split_whitespace();

    let edge_count = parse_count(tokens.next(), "edge count")?;
    let iterations = parse_count(tokens.next(), "iteration count")?;

    let mut edges = Vec::with_capacity(edge_count.min(1 << 16));
    for found in 0..edge_count {
        let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
            return Err(RankError::malformed(format!(
                "expected {edge_count} edges, found {found}"
            )));
        };
        edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(RankError::malformed(format!(
            "{trailing} unexpected token(s) after {edge_count} edges"
        )));
    }

    Ok(RankJob { iterations, edges })
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| RankError::malformed(format!("missing {what}")))?;
    let value: i64 = token.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            RankError::malformed(format!("{what} '{token}' is out of range"))
        }
        _ => RankError::malformed(format!("{what} '{token}' is not an integer")),
    })?;
    usize::try_from(value)
        .map_err(|_| RankError::malformed(format!("{what} must not be negative (got {value})")))
}

/// Reads the whole input from `path`, or from stdin when `path` is `None`.
///
/// # Errors
/// Returns [`RankError::MalformedInput`] if the input is not valid UTF-8,
/// or [`RankError::Io`] if reading fails otherwise.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|source| read_error(source, p.to_path_buf())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| read_error(source, PathBuf::from("<stdin>")))?;
            Ok(buf)
        }
    }
}

fn read_error(source: io::Error, path: PathBuf) -> RankError {
    if source.kind() == ErrorKind::InvalidData {
        return RankError::malformed(format!("{} is not valid UTF-8", path.display()));
    }
    RankError::Io { source, path }
}
