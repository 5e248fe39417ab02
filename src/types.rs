// src/types.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{RankError, Result};

/// Stable identifier of a habitat patch; used as the graph node key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchId(String);

impl PatchId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatchId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Numeric ids compare numerically so "2" sorts before "10" and precede all
/// non-numeric ids; the rest use plain string order.
impl Ord for PatchId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<i64>(), other.0.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for PatchId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A discrete habitat unit with a position and a quality score.
///
/// Construction validates the attributes, so every `Patch` in circulation has
/// finite coordinates and a finite, non-negative quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patch {
    id: PatchId,
    pos: Point,
    quality: f64,
}

impl Patch {
    /// Creates a validated patch.
    ///
    /// # Errors
    /// Returns `SchemaViolation` (record 0) if a coordinate is not finite or
    /// the quality is negative or not finite.
    pub fn new(id: impl Into<PatchId>, x: f64, y: f64, quality: f64) -> Result<Self> {
        let id = id.into();
        let reason = if !x.is_finite() || !y.is_finite() {
            Some(format!("coordinates must be finite, got ({x}, {y})"))
        } else if !quality.is_finite() {
            Some(format!("quality must be finite, got {quality}"))
        } else if quality < 0.0 {
            Some(format!("quality must be non-negative, got {quality}"))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RankError::SchemaViolation {
                record: 0,
                id: id.to_string(),
                reason,
            }),
            None => Ok(Self {
                id,
                pos: Point::new(x, y),
                quality,
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &PatchId {
        &self.id
    }

    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[must_use]
    pub fn quality(&self) -> f64 {
        self.quality
    }
}

impl From<String> for PatchId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
