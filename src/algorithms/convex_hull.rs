// src/algorithms/convex_hull.rs

//! # Convex Hull Algorithms
//!
//! Three algorithms to compute the convex hull of a 2D point set:
//!
//! - Jarvis March (gift wrapping), O(nh)
//! - Graham Scan (polar-angle scan around an interior pivot), O(n log n)
//! - QuickHull (recursive farthest-point subdivision), expected O(n log n)
//!
//! All three return the same vertex set for a duplicate-free, non-collinear
//! input; they may differ in starting vertex only. The hull is returned as a
//! closed polygon, first vertex repeated at the end, in counter-clockwise
//! order. Input points that sit on a hull edge between two corners are not
//! vertices.

use crate::error::{GeomError, GeomResult};
use crate::types::{
    all_collinear, cmp_xy, cmp_yx, dedup_points, euclidean_dist, signed_area, Vec2,
};
use crate::utils::{angles, comparison, constants};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Enumerates the available algorithms for computing the convex hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvexHullAlgorithm {
    /// Jarvis March (gift wrapping). Efficient when the hull is small.
    JarvisMarch,
    /// Graham Scan around an interior pivot point.
    GrahamScan,
    /// QuickHull. Average O(n log n), worst-case O(n^2).
    QuickHull,
}

impl Default for ConvexHullAlgorithm {
    fn default() -> Self {
        ConvexHullAlgorithm::QuickHull
    }
}

/// How Graham Scan and QuickHull pick the interior pivot used for polar
/// sorting.
///
/// The mean of three sampled points is cheap but can land outside the hull
/// for pathological distributions; the exact centroid never does. Sampling
/// stays available, seeded, for compatibility and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotStrategy {
    /// Mean of all points.
    Centroid,
    /// Mean of three points drawn with a deterministic seeded RNG.
    SampledMean { seed: u64 },
}

impl Default for PivotStrategy {
    fn default() -> Self {
        PivotStrategy::Centroid
    }
}

/// Computes the convex hull of a set of 2D points using a specified
/// algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvexHullComputer {
    algorithm: ConvexHullAlgorithm,
    pivot: PivotStrategy,
}

impl ConvexHullComputer {
    pub fn new(algorithm: ConvexHullAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    /// Computes the convex hull of the given input points.
    ///
    /// Exact duplicates are removed up front. Fewer than 3 unique points is
    /// an `InsufficientPoints` error. A fully collinear set yields the
    /// degenerate but well-defined closed "hull" of its two lexicographic
    /// extremes.
    pub fn compute_hull(&self, input_points: &[Vec2]) -> GeomResult<Vec<Vec2>> {
        let points = dedup_points(input_points);
        if points.len() < 3 {
            return Err(GeomError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }
        if all_collinear(&points) {
            let lo = *points.iter().min_by(|a, b| cmp_yx(a, b)).unwrap();
            let hi = *points.iter().max_by(|a, b| cmp_yx(a, b)).unwrap();
            return Ok(vec![lo, hi, lo]);
        }

        let mut hull = match self.algorithm {
            ConvexHullAlgorithm::JarvisMarch => self.jarvis_march(&points)?,
            ConvexHullAlgorithm::GrahamScan => self.graham_scan(&points)?,
            ConvexHullAlgorithm::QuickHull => self.quick_hull(&points)?,
        };

        // The angle-based wrap walks through points sitting mid-edge on the
        // hull boundary; drop them so every algorithm reports the same
        // vertex set.
        drop_collinear_vertices(&mut hull);

        if hull.len() < 3 {
            return Err(GeomError::DegenerateGeometry {
                operation: "convex hull collapsed below 3 vertices".to_string(),
            });
        }

        rotate_to_lex_min(&mut hull);
        let first = hull[0];
        hull.push(first);
        Ok(hull)
    }

    /// Interior reference point for polar sorting.
    fn pivot_point(&self, points: &[Vec2]) -> Vec2 {
        match self.pivot {
            PivotStrategy::Centroid => {
                let sum = points.iter().fold(Vec2::zeros(), |acc, p| acc + p);
                sum / points.len() as f64
            }
            PivotStrategy::SampledMean { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut picked: Vec<usize> = Vec::with_capacity(3);
                while picked.len() < 3 {
                    let idx = rng.random_range(0..points.len());
                    if points.len() <= 3 || !picked.contains(&idx) {
                        picked.push(idx);
                    }
                }
                let sum = picked
                    .iter()
                    .fold(Vec2::zeros(), |acc, &idx| acc + points[idx]);
                sum / 3.0
            }
        }
    }

    /// Jarvis March: wrap the hull starting from the lexicographically
    /// smallest point, always turning as little as possible.
    fn jarvis_march(&self, points: &[Vec2]) -> GeomResult<Vec<Vec2>> {
        let anchor = *points.iter().min_by(|a, b| cmp_yx(a, b)).unwrap();
        let mut remaining: Vec<Vec2> = points.iter().copied().filter(|&p| p != anchor).collect();

        // Second hull point: smallest polar angle from the positive x-axis,
        // nearer point on angle ties.
        let mut second = remaining[0];
        for &p in &remaining[1..] {
            let (angle_p, angle_s) = (
                angles::polar_angle(anchor, p),
                angles::polar_angle(anchor, second),
            );
            if beats(
                angle_p,
                euclidean_dist(anchor, p),
                angle_s,
                euclidean_dist(anchor, second),
            ) {
                second = p;
            }
        }
        remaining.retain(|&p| p != second);

        let mut hull = vec![anchor, second];
        loop {
            let prev = hull[hull.len() - 2];
            let cur = hull[hull.len() - 1];

            // The anchor re-enters the candidate set so the wrap can close.
            let mut chosen = anchor;
            let mut best_angle = angles::turn_angle(prev, cur, anchor);
            let mut best_dist = euclidean_dist(cur, anchor);
            for &p in &remaining {
                let angle = angles::turn_angle(prev, cur, p);
                let dist = euclidean_dist(cur, p);
                if beats(angle, dist, best_angle, best_dist) {
                    chosen = p;
                    best_angle = angle;
                    best_dist = dist;
                }
            }

            if chosen == anchor {
                break;
            }
            remaining.retain(|&p| p != chosen);
            hull.push(chosen);

            if hull.len() > points.len() {
                return Err(GeomError::DegenerateGeometry {
                    operation: "Jarvis March did not terminate".to_string(),
                });
            }
        }
        Ok(hull)
    }

    /// Graham Scan: sort by polar angle around an interior pivot, then
    /// delete every vertex that does not make a strict left turn.
    fn graham_scan(&self, points: &[Vec2]) -> GeomResult<Vec<Vec2>> {
        let pivot = self.pivot_point(points);

        let mut seq = points.to_vec();
        seq.sort_by(|a, b| {
            let angle_a = angles::polar_angle(pivot, *a);
            let angle_b = angles::polar_angle(pivot, *b);
            angle_a
                .partial_cmp(&angle_b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    // Farther point first on angle ties; the nearer duplicate
                    // angle entry is dropped below.
                    euclidean_dist(pivot, *b)
                        .partial_cmp(&euclidean_dist(pivot, *a))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        seq.dedup_by(|a, b| {
            comparison::nearly_equal(
                angles::polar_angle(pivot, *a),
                angles::polar_angle(pivot, *b),
            )
        });

        if seq.len() < 3 {
            return Err(GeomError::DegenerateGeometry {
                operation: "polar sort left fewer than 3 distinct directions".to_string(),
            });
        }

        // Cyclic scan from the lexicographically smallest point. A vertex
        // survives only if the triple around it turns left; deletions step
        // the scan back to re-examine the previous vertex.
        let scan_start = *seq.iter().min_by(|a, b| cmp_yx(a, b)).unwrap();
        let mut i = seq.iter().position(|&p| p == scan_start).unwrap();
        let mut clean = 0usize;
        while seq.len() >= 3 && clean < seq.len() {
            let n = seq.len();
            let i1 = i % n;
            let i2 = (i1 + 1) % n;
            let i3 = (i1 + 2) % n;
            if signed_area(seq[i2], seq[i1], seq[i3]) > constants::EPSILON {
                i = i2;
                clean += 1;
            } else {
                seq.remove(i2);
                let n2 = seq.len();
                let i1_shifted = if i2 < i1 { i1 - 1 } else { i1 };
                i = (i1_shifted + n2 - 1) % n2;
                clean = 0;
            }
        }

        if seq.len() < 3 {
            return Err(GeomError::DegenerateGeometry {
                operation: "Graham Scan collapsed below 3 vertices".to_string(),
            });
        }
        Ok(seq)
    }

    /// QuickHull: split on the x-extremes, recursively keep the farthest
    /// point from each dividing edge, then order the collected vertices by
    /// polar angle to obtain a traversable polygon.
    fn quick_hull(&self, points: &[Vec2]) -> GeomResult<Vec<Vec2>> {
        let e1 = *points.iter().min_by(|a, b| cmp_xy(a, b)).unwrap();
        let e2 = *points.iter().max_by(|a, b| cmp_xy(a, b)).unwrap();

        let mut left = Vec::new();
        let mut right = Vec::new();
        for &p in points {
            if p == e1 || p == e2 {
                continue;
            }
            let side = signed_area(e2, e1, p);
            if side > constants::EPSILON {
                left.push(p);
            } else if side < -constants::EPSILON {
                right.push(p);
            }
            // On-segment points are interior or collinear, never hull
            // vertices unless they are an extreme; discarded.
        }

        let mut hull = vec![e1, e2];
        Self::quick_hull_sub(&mut hull, &left, e1, e2);
        Self::quick_hull_sub(&mut hull, &right, e2, e1);

        // The recursion discovers vertices in no particular order; sort them
        // around an interior reference point into a CCW cycle.
        let pivot = self.pivot_point(&hull);
        hull.sort_by(|a, b| {
            angles::polar_angle(pivot, *a)
                .partial_cmp(&angles::polar_angle(pivot, *b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(hull)
    }

    /// Recursive helper: `subset` holds the points strictly left of the
    /// directed edge `a → b`.
    fn quick_hull_sub(hull: &mut Vec<Vec2>, subset: &[Vec2], a: Vec2, b: Vec2) {
        if subset.is_empty() {
            return;
        }

        let edge_len = euclidean_dist(a, b);
        let mut far = subset[0];
        let mut far_dist = signed_area(b, a, far).abs() / edge_len;
        for &p in &subset[1..] {
            let dist = signed_area(b, a, p).abs() / edge_len;
            if comparison::nearly_equal(dist, far_dist) {
                // Distance tie: keep the candidate with the larger turn
                // angle off the dividing edge.
                if angles::turn_angle(a, b, p) > angles::turn_angle(a, b, far) {
                    far = p;
                    far_dist = dist;
                }
            } else if dist > far_dist {
                far = p;
                far_dist = dist;
            }
        }

        hull.push(far);

        let mut outside_af = Vec::new();
        let mut outside_fb = Vec::new();
        for &p in subset {
            if p == far {
                continue;
            }
            if signed_area(far, a, p) > constants::EPSILON {
                outside_af.push(p);
            } else if signed_area(b, far, p) > constants::EPSILON {
                outside_fb.push(p);
            }
            // Points inside the triangle (a, far, b) are discarded.
        }
        Self::quick_hull_sub(hull, &outside_af, a, far);
        Self::quick_hull_sub(hull, &outside_fb, far, b);
    }
}

/// Whether candidate `(angle_a, dist_a)` beats `(angle_b, dist_b)`: smaller
/// angle wins, nearer point wins angle ties.
fn beats(angle_a: f64, dist_a: f64, angle_b: f64, dist_b: f64) -> bool {
    if comparison::nearly_equal(angle_a, angle_b) {
        dist_a < dist_b
    } else {
        angle_a < angle_b
    }
}

/// Removes cycle vertices whose neighbors are collinear with them; such
/// points lie on a hull edge without being corners. Deletions re-examine the
/// preceding vertex, since merging two edges can flatten it in turn.
fn drop_collinear_vertices(hull: &mut Vec<Vec2>) {
    let mut i = 0;
    while hull.len() >= 3 && i < hull.len() {
        let n = hull.len();
        let prev = hull[(i + n - 1) % n];
        let next = hull[(i + 1) % n];
        if comparison::nearly_zero(signed_area(prev, hull[i], next)) {
            hull.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}

/// Rotates a vertex cycle so it starts at the lexicographically smallest
/// vertex, giving all algorithms the same canonical starting point.
fn rotate_to_lex_min(hull: &mut [Vec2]) {
    if let Some(idx) = hull
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| cmp_yx(a, b))
        .map(|(idx, _)| idx)
    {
        hull.rotate_left(idx);
    }
}
