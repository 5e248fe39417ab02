// src/graph/weight.rs
//! Connectivity strength between two habitat patches.
//!
//! `weight = exp(-distance / dispersal) * sqrt(quality_a * quality_b)`.
//! Distance decay and quality each contribute a factor; both are symmetric
//! in the two patches, so the weight is too. The quality factor is taken as
//! `sqrt(a) * sqrt(b)` so it stays finite for every finite quality.

use crate::error::{RankError, Result};
use crate::types::Patch;

/// Computes the connectivity weight between two distinct patches.
///
/// Patches are validated on construction, so only the dispersal distance
/// needs checking here.
///
/// # Errors
/// Returns `InvalidConfig` if `dispersal_distance` is not a positive finite
/// number.
pub fn weight(a: &Patch, b: &Patch, dispersal_distance: f64) -> Result<f64> {
    check_dispersal(dispersal_distance)?;
    Ok(weight_unchecked(a, b, dispersal_distance))
}

/// # Errors
/// Returns `InvalidConfig` unless `dispersal_distance` is positive and finite.
pub fn check_dispersal(dispersal_distance: f64) -> Result<()> {
    if dispersal_distance.is_finite() && dispersal_distance > 0.0 {
        Ok(())
    } else {
        Err(RankError::InvalidConfig(format!(
            "dispersal_distance must be > 0, got {dispersal_distance}"
        )))
    }
}

/// Weight without parameter validation, for callers that validated once up
/// front (the builder calls this O(n²) times).
#[must_use]
pub(crate) fn weight_unchecked(a: &Patch, b: &Patch, dispersal_distance: f64) -> f64 {
    let distance = a.pos().distance(&b.pos());
    distance_factor(distance, dispersal_distance) * quality_factor(a.quality(), b.quality())
}

#[must_use]
pub fn distance_factor(distance: f64, dispersal_distance: f64) -> f64 {
    (-distance / dispersal_distance).exp()
}

#[must_use]
pub fn quality_factor(quality_a: f64, quality_b: f64) -> f64 {
    quality_a.sqrt() * quality_b.sqrt()
}

/// Distance beyond which no pair of patches with the given peak quality can
/// exceed `threshold`. Returns `None` when every distance can (threshold 0).
#[must_use]
pub fn cutoff_distance(dispersal_distance: f64, max_quality: f64, threshold: f64) -> Option<f64> {
    if threshold <= 0.0 {
        return None;
    }
    if max_quality <= threshold {
        return Some(0.0);
    }
    Some(dispersal_distance * (max_quality / threshold).ln())
}
