// src/graph/builder.rs
//! Graph construction: nodes for every patch, pruned pairwise edges.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use super::network::{Edge, HabitatGraph};
use super::weight;
use crate::error::{RankError, Result};
use crate::types::{Patch, PatchId};

/// Builds the connectivity graph.
///
/// Every patch becomes a node, even when it ends up with no edges. For each
/// ordered pair of distinct patches an edge is added iff its weight is
/// strictly greater than `weight_threshold`. Rows are computed in parallel
/// per source patch and collected in source order, so the result does not
/// depend on scheduling.
///
/// # Errors
/// Returns `DuplicateIdentifier` if two patches share an id, or
/// `InvalidConfig` for a non-positive dispersal distance or a negative
/// threshold.
pub fn build(
    patches: Vec<Patch>,
    dispersal_distance: f64,
    weight_threshold: f64,
) -> Result<HabitatGraph> {
    check_params(dispersal_distance, weight_threshold)?;
    let index = index_patches(&patches)?;

    let out_edges: Vec<Vec<Edge>> = (0..patches.len())
        .into_par_iter()
        .map(|src| outgoing_row(&patches, src, dispersal_distance, weight_threshold))
        .collect();

    let graph = HabitatGraph {
        patches,
        index,
        out_edges,
    };

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        isolated = graph.isolated_count(),
        "graph built"
    );
    Ok(graph)
}

/// Validates the construction parameters.
///
/// # Errors
/// Returns `InvalidConfig` for a non-positive dispersal distance or a
/// negative or non-finite threshold.
pub fn check_params(dispersal_distance: f64, weight_threshold: f64) -> Result<()> {
    weight::check_dispersal(dispersal_distance)?;
    if !(weight_threshold.is_finite() && weight_threshold >= 0.0) {
        return Err(RankError::InvalidConfig(format!(
            "weight_threshold must be >= 0, got {weight_threshold}"
        )));
    }
    Ok(())
}

fn index_patches(patches: &[Patch]) -> Result<HashMap<PatchId, usize>> {
    let mut index = HashMap::with_capacity(patches.len());
    for (i, patch) in patches.iter().enumerate() {
        if let Some(first) = index.insert(patch.id().clone(), i) {
            return Err(RankError::DuplicateIdentifier {
                id: patch.id().to_string(),
                first_record: first + 1,
                record: i + 1,
            });
        }
    }
    Ok(index)
}

fn outgoing_row(
    patches: &[Patch],
    src: usize,
    dispersal_distance: f64,
    weight_threshold: f64,
) -> Vec<Edge> {
    let source = &patches[src];
    patches
        .iter()
        .enumerate()
        .filter(|&(dst, _)| dst != src)
        .filter_map(|(dst, target)| {
            let w = weight::weight_unchecked(source, target, dispersal_distance);
            (w > weight_threshold).then_some(Edge { target: dst, weight: w })
        })
        .collect()
}
