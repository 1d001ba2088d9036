//! Graph adapter traits and the link-file graph representation.

use crate::{Error, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// This is the cache-friendly adapter: it avoids allocating a new `Vec`
/// on every step of a random walk.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// A directed graph loaded from an adjacency-list text file.
///
/// Line format: `<id>;<neighbor>(,<neighbor>)*`. Node labels are interned
/// into dense indices in first-seen order (sources before their targets),
/// so a node referenced only as a link target still exists, with zero
/// out-degree. Duplicate edges are kept once; empty neighbor fields are
/// discarded. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    index: FxHashMap<String, usize>,
    labels: Vec<String>,
    adj: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Parse an adjacency listing.
    ///
    /// Blank lines are skipped. Any malformed line (no `;` separator, or an
    /// empty id field) fails the whole load with [`Error::Parse`] carrying
    /// the 1-based line number; there is no skip-and-continue mode.
    pub fn parse(input: &str) -> Result<Self> {
        let mut g = LinkGraph::default();
        for (line_no, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (id, rest) = line.split_once(';').ok_or_else(|| Error::Parse {
                line: line_no + 1,
                msg: "missing ';' separator".to_string(),
            })?;
            let id = id.trim();
            if id.is_empty() {
                return Err(Error::Parse {
                    line: line_no + 1,
                    msg: "empty node identifier".to_string(),
                });
            }
            let from = g.intern(id);
            for field in rest.split(',') {
                let field = field.trim();
                if field.is_empty() {
                    continue;
                }
                let to = g.intern(field);
                if !g.adj[from].contains(&to) {
                    g.adj[from].push(to);
                }
            }
        }
        Ok(g)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.index.insert(label.to_string(), i);
        self.labels.push(label.to_string());
        self.adj.push(Vec::new());
        i
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn out_neighbors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Nodes with zero out-degree.
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.adj.len()).filter(|&i| self.adj[i].is_empty()).collect()
    }

    /// Derived reverse index: `in_links()[v]` lists the nodes linking to `v`.
    ///
    /// Built on demand from the adjacency; only reverse-traversal consumers
    /// need it, so it is not cached on the graph itself.
    pub fn in_links(&self) -> Vec<Vec<usize>> {
        let mut rev: Vec<Vec<usize>> = vec![Vec::new(); self.adj.len()];
        for (u, outs) in self.adj.iter().enumerate() {
            for &v in outs {
                rev[v].push(u);
            }
        }
        rev
    }
}

impl Graph for LinkGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.adj.get(node).map_or(0, Vec::len)
    }
}

impl GraphRef for LinkGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_interns_targets_as_dangling() {
        let g = LinkGraph::parse("1;2,3\n2;3\n").unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.label(0), "1");
        assert_eq!(g.out_neighbors(0), [1, 2]);
        assert!(g.out_neighbors(2).is_empty());
        assert_eq!(g.dangling_nodes(), vec![2]);
    }

    #[test]
    fn parse_discards_empty_neighbor_fields() {
        // Trailing comma must not create a node named "".
        let g = LinkGraph::parse("1;2,\n").unwrap();
        assert_eq!(g.node_count(), 2);
        assert!(g.node_id("").is_none());
    }

    #[test]
    fn parse_dedups_edges_and_merges_repeated_sources() {
        let g = LinkGraph::parse("1;2,2\n1;3\n").unwrap();
        assert_eq!(g.out_neighbors(0), [1, 2]);
    }

    #[test]
    fn parse_rejects_missing_separator_with_line_number() {
        let err = LinkGraph::parse("1;2\nbogus\n").unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn parse_rejects_empty_identifier() {
        let err = LinkGraph::parse(";2,3\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn in_links_inverts_adjacency() {
        // 0 -> {1,2}, 1 -> {2}
        let g = LinkGraph::parse("a;b,c\nb;c\n").unwrap();
        let rev = g.in_links();
        assert_eq!(rev[0], Vec::<usize>::new());
        assert_eq!(rev[1], vec![0]);
        assert_eq!(rev[2], vec![0, 1]);
    }
}
