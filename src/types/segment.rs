// src/types/segment.rs
use super::point::{euclidean_dist, Vec2};
use serde::{Deserialize, Serialize};

/// A directed pair of points. Direction matters for projections, not for
/// intersection classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        euclidean_dist(self.a, self.b)
    }

    /// Whether the two segments share at least one endpoint (exact equality).
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }
}
