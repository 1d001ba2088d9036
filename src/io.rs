//! Textual interchange formats for rankings and reference scores.
//!
//! Two formats survive from the surrounding tooling and are load-bearing:
//! - reference scores: one `<id>:<score>` per line;
//! - ranking output: one `<rank>: <id> <score>` per line, where the score
//!   is the third whitespace-separated field (index 2). Downstream readers
//!   index that field positionally, so the layout must not change.

use crate::graph::LinkGraph;
use crate::ranking::ranked_order;
use crate::{Error, Result};
use std::path::Path;

/// Parse a reference file of `<id>:<score>` lines.
pub fn parse_exact_scores(input: &str) -> Result<Vec<(String, f64)>> {
    let mut out = Vec::new();
    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (id, score) = line.split_once(':').ok_or_else(|| Error::Parse {
            line: line_no + 1,
            msg: "missing ':' separator".to_string(),
        })?;
        let score: f64 = score.trim().parse().map_err(|e| Error::Parse {
            line: line_no + 1,
            msg: format!("bad score '{}': {e}", score.trim()),
        })?;
        out.push((id.trim().to_string(), score));
    }
    Ok(out)
}

pub fn read_exact_scores(path: &Path) -> Result<Vec<(String, f64)>> {
    parse_exact_scores(&std::fs::read_to_string(path)?)
}

/// Render a rank vector as `<rank>: <id> <score>` lines, descending score
/// with ties broken by node index.
///
/// `f64` Display is shortest-round-trip, so `parse_ranking` recovers the
/// scores exactly.
pub fn format_ranking(graph: &LinkGraph, scores: &[f64]) -> String {
    let mut out = String::new();
    for (rank, &node) in ranked_order(scores).iter().enumerate() {
        out.push_str(&format!("{}: {} {}\n", rank + 1, graph.label(node), scores[node]));
    }
    out
}

pub fn write_ranking(path: &Path, graph: &LinkGraph, scores: &[f64]) -> Result<()> {
    std::fs::write(path, format_ranking(graph, scores))?;
    Ok(())
}

/// Parse ranking lines back into `(label, score)` pairs in file order.
pub fn parse_ranking(input: &str) -> Result<Vec<(String, f64)>> {
    let mut out = Vec::new();
    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(Error::Parse {
                line: line_no + 1,
                msg: format!("expected 3 fields, got {}", fields.len()),
            });
        }
        let score: f64 = fields[2].parse().map_err(|e| Error::Parse {
            line: line_no + 1,
            msg: format!("bad score '{}': {e}", fields[2]),
        })?;
        out.push((fields[1].to_string(), score));
    }
    Ok(out)
}

pub fn read_ranking(path: &Path) -> Result<Vec<(String, f64)>> {
    parse_ranking(&std::fs::read_to_string(path)?)
}
