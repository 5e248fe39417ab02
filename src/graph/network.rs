// src/graph/network.rs
//! The habitat connectivity graph and its read-only query interface.

use std::collections::HashMap;

use crate::types::{Patch, PatchId, Point};

/// A directed, weighted edge to another node, by node index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: usize,
    pub weight: f64,
}

/// Weighted directed graph over habitat patches.
///
/// Node indices follow the order patches were supplied in, which fixes the
/// iteration order of every algorithm run on the graph. The graph is never
/// mutated after [`crate::graph::builder::build`] returns it.
#[derive(Debug, Clone)]
pub struct HabitatGraph {
    pub(crate) patches: Vec<Patch>,
    pub(crate) index: HashMap<PatchId, usize>,
    /// Outgoing edges per source node, sorted by target index.
    pub(crate) out_edges: Vec<Vec<Edge>>,
}

impl HabitatGraph {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.patches.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patches in node-index order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    #[must_use]
    pub fn index_of(&self, id: &PatchId) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn id(&self, node: usize) -> &PatchId {
        self.patches[node].id()
    }

    #[must_use]
    pub fn position(&self, id: &PatchId) -> Option<Point> {
        self.index_of(id).map(|i| self.patches[i].pos())
    }

    #[must_use]
    pub fn out_edges(&self, node: usize) -> &[Edge] {
        &self.out_edges[node]
    }

    /// Total outgoing weight of a node; zero for dangling nodes.
    #[must_use]
    pub fn out_weight(&self, node: usize) -> f64 {
        self.out_edges[node].iter().map(|e| e.weight).sum()
    }

    #[must_use]
    pub fn is_dangling(&self, node: usize) -> bool {
        self.out_edges[node].is_empty()
    }

    /// Weight of the edge `from -> to`, if it survived pruning.
    #[must_use]
    pub fn weight(&self, from: &PatchId, to: &PatchId) -> Option<f64> {
        let (src, dst) = (self.index_of(from)?, self.index_of(to)?);
        self.out_edges[src]
            .binary_search_by_key(&dst, |e| e.target)
            .ok()
            .map(|pos| self.out_edges[src][pos].weight)
    }

    /// All edges as `(source, target, weight)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&PatchId, &PatchId, f64)> + '_ {
        self.out_edges.iter().enumerate().flat_map(move |(src, row)| {
            row.iter()
                .map(move |e| (self.id(src), self.id(e.target), e.weight))
        })
    }

    /// Number of nodes with neither incoming nor outgoing edges.
    #[must_use]
    pub fn isolated_count(&self) -> usize {
        let mut touched = vec![false; self.node_count()];
        for (src, row) in self.out_edges.iter().enumerate() {
            if !row.is_empty() {
                touched[src] = true;
            }
            for e in row {
                touched[e.target] = true;
            }
        }
        touched.iter().filter(|t| !**t).count()
    }

    #[must_use]
    pub fn dangling_count(&self) -> usize {
        (0..self.node_count()).filter(|&n| self.is_dangling(n)).count()
    }

    /// Incoming edges per target node as `(source, weight)`, sources ascending.
    #[must_use]
    pub fn incoming(&self) -> Vec<Vec<(usize, f64)>> {
        let mut incoming = vec![Vec::new(); self.node_count()];
        for (src, row) in self.out_edges.iter().enumerate() {
            for e in row {
                incoming[e.target].push((src, e.weight));
            }
        }
        incoming
    }
}
