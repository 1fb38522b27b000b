// src/algorithms/triangulation.rs

//! # Planar Triangulation Algorithms
//!
//! Two triangulations over a loose 2D point set:
//!
//! - **Minimum-Weight**: greedy shortest-edge-first selection subject to a
//!   non-crossing constraint. A heuristic: it approximates, but does not
//!   guarantee, the globally minimal total edge length.
//! - **Hamiltonian Path**: peels nested convex hull rings off the point set
//!   and concatenates them into a simple spiral, then lays a triangle strip
//!   along the spiral.
//!
//! Planarity goes through [`segments_cross`]: only a crossing strictly
//! interior to both edges conflicts. Touching at shared endpoints is what a
//! triangulation is made of.

use crate::algorithms::convex_hull::{ConvexHullAlgorithm, ConvexHullComputer};
use crate::analysis::{intersect_segments, segments_cross, SegmentRelation};
use crate::error::{GeomError, GeomResult};
use crate::types::{all_collinear, cmp_yx, dedup_points, signed_area, Segment, Vec2};
use crate::utils::{angles, comparison, constants};
use serde::{Deserialize, Serialize};

/// Enumerates the available planar triangulation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangulationAlgorithm {
    /// Greedy minimum-weight triangulation.
    MinimumWeight,
    /// Hull-peeling spiral with a triangle strip.
    HamiltonianPath,
}

impl Default for TriangulationAlgorithm {
    fn default() -> Self {
        TriangulationAlgorithm::MinimumWeight
    }
}

/// What a triangulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TriangulationOutput {
    /// Accepted edge set of the minimum-weight triangulation.
    Edges(Vec<Segment>),
    /// Hamiltonian spiral over the nested hull rings, plus the triangle
    /// strip built along it.
    Spiral { path: Vec<Vec2>, strip: Vec<Vec2> },
}

/// Triangulates a 2D point set using a specified algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneTriangulator {
    algorithm: TriangulationAlgorithm,
}

impl PlaneTriangulator {
    pub fn new(algorithm: TriangulationAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Runs the configured triangulation. Fewer than 2 unique points is an
    /// `InsufficientPoints` error.
    pub fn triangulate(&self, input_points: &[Vec2]) -> GeomResult<TriangulationOutput> {
        let points = dedup_points(input_points);
        if points.len() < 2 {
            return Err(GeomError::InsufficientPoints {
                expected: 2,
                actual: points.len(),
            });
        }
        match self.algorithm {
            TriangulationAlgorithm::MinimumWeight => {
                Ok(TriangulationOutput::Edges(minimum_weight(&points)?))
            }
            TriangulationAlgorithm::HamiltonianPath => hamiltonian_path(&points),
        }
    }
}

/// Greedy minimum-weight triangulation.
///
/// Enumerates every unordered point pair as a candidate edge, sorts by
/// length, accepts the shortest unconditionally and every further candidate
/// that does not conflict with an accepted edge, until the full
/// triangulation size `3n - 3 - h` is reached. `h` counts every point on
/// the hull boundary, mid-edge points included; they bound the outer face
/// just like corners do.
fn minimum_weight(points: &[Vec2]) -> GeomResult<Vec<Segment>> {
    let n = points.len();
    if n == 2 {
        return Ok(vec![Segment::new(points[0], points[1])]);
    }

    // Hull boundary size determines when the triangulation is complete.
    let hull = ConvexHullComputer::new(ConvexHullAlgorithm::QuickHull).compute_hull(points)?;
    let hull_count = hull_boundary_count(points, &hull);
    let target = 3 * n - 3 - hull_count;

    let mut candidates: Vec<Segment> = Vec::with_capacity(n * (n - 1) / 2);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            candidates.push(Segment::new(a, b));
        }
    }
    candidates.sort_by(|a, b| {
        a.length()
            .partial_cmp(&b.length())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut accepted: Vec<Segment> = Vec::with_capacity(target);
    for candidate in candidates {
        if accepted.iter().any(|edge| edges_conflict(&candidate, edge)) {
            continue;
        }
        accepted.push(candidate);
        if accepted.len() == target {
            break;
        }
    }

    if accepted.len() < target {
        return Err(GeomError::TriangulationFailed {
            reason: format!(
                "candidate edges exhausted at {}/{} accepted",
                accepted.len(),
                target
            ),
        });
    }
    Ok(accepted)
}

/// Whether two edges cannot coexist in a planar edge set: a crossing
/// strictly interior to both, or a collinear overlap longer than a point.
fn edges_conflict(a: &Segment, b: &Segment) -> bool {
    if a.shares_endpoint(b) {
        // Edges with a common endpoint cannot cross properly; only running
        // along each other past the shared point conflicts.
        return collinear_overlap(a, b);
    }
    segments_cross(a.a, a.b, b.a, b.b) || collinear_overlap(a, b)
}

fn collinear_overlap(a: &Segment, b: &Segment) -> bool {
    matches!(
        intersect_segments(a.a, a.b, b.a, b.b),
        SegmentRelation::Coincident { overlap } if overlap.length() > constants::EPSILON
    )
}

/// Number of input points on the closed hull polygon's boundary, corners
/// and mid-edge points alike.
fn hull_boundary_count(points: &[Vec2], hull: &[Vec2]) -> usize {
    points
        .iter()
        .filter(|p| hull.windows(2).any(|edge| on_segment(**p, edge[0], edge[1])))
        .count()
}

fn on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    if !comparison::nearly_zero(signed_area(a, p, b)) {
        return false;
    }
    let t = (p - a).dot(&(b - a));
    0.0 <= t && t <= (b - a).norm_squared()
}

/// Hamiltonian-path spiral over nested convex hull rings.
fn hamiltonian_path(points: &[Vec2]) -> GeomResult<TriangulationOutput> {
    let rings = peel_rings(points)?;

    let mut spiral: Vec<Vec2> = rings[0].clone();
    let strip_start = if rings.len() > 1 && spiral.len() > 1 {
        spiral.len() - 1
    } else {
        0
    };

    for ring in &rings[1..] {
        let mut ring = ring.clone();
        rotate_to_highest_y(&mut ring);
        align_ring_entry(&spiral, &mut ring);
        spiral.extend(ring.iter().copied());
    }

    let strip = build_strip(&spiral, strip_start);
    Ok(TriangulationOutput::Spiral {
        path: spiral,
        strip,
    })
}

/// Peels convex hull rings off the point set, outermost first, until no
/// points remain. A remainder too small or too flat for a hull becomes one
/// final lexicographically sorted ring.
fn peel_rings(points: &[Vec2]) -> GeomResult<Vec<Vec<Vec2>>> {
    let computer = ConvexHullComputer::new(ConvexHullAlgorithm::QuickHull);
    let mut remaining = points.to_vec();
    let mut rings: Vec<Vec<Vec2>> = Vec::new();

    while !remaining.is_empty() {
        if remaining.len() < 3 || all_collinear(&remaining) {
            remaining.sort_by(cmp_yx);
            rings.push(std::mem::take(&mut remaining));
            break;
        }
        let mut hull = computer.compute_hull(&remaining)?;
        hull.pop(); // closing duplicate
        remaining.retain(|p| !hull.contains(p));
        rings.push(hull);
    }
    Ok(rings)
}

/// Rotates a ring so it starts at its highest-y vertex.
fn rotate_to_highest_y(ring: &mut [Vec2]) {
    if let Some(idx) = ring
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| cmp_yx(a, b))
        .map(|(idx, _)| idx)
    {
        ring.rotate_left(idx);
    }
}

/// Rotates the ring further so the connecting edge from the spiral's end to
/// the ring's first vertex does not dive through the ring boundary; a dive
/// would make the spiral cross the very edges it walks next. At least one
/// vertex of a convex ring is always reachable dive-free from an exterior
/// point. Among the dive-free rotations the first whose junction makes a
/// convex (left) turn wins, so the spiral does not fold back on itself.
fn align_ring_entry(spiral: &[Vec2], ring: &mut Vec<Vec2>) {
    let Some(&last) = spiral.last() else {
        return;
    };
    let prev = (spiral.len() >= 2).then(|| spiral[spiral.len() - 2]);

    let mut fallback = None;
    for rotation in 0..ring.len() {
        if !connector_dives(last, ring) {
            let convex = prev
                .map(|p| angles::turn_angle(p, last, ring[0]) < constants::PI)
                .unwrap_or(true);
            if convex {
                return;
            }
            if fallback.is_none() {
                fallback = Some(rotation);
            }
        }
        ring.rotate_left(1);
    }
    if let Some(rotation) = fallback {
        ring.rotate_left(rotation);
    }
}

/// Whether the segment from `from` to the ring's first vertex properly
/// crosses a ring edge not incident to that vertex.
fn connector_dives(from: Vec2, ring: &[Vec2]) -> bool {
    let entry = ring[0];
    let n = ring.len();
    (0..n).any(|i| {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        a != entry && b != entry && segments_cross(from, entry, a, b)
    })
}

/// Builds a triangle strip along the spiral starting at `start`.
///
/// Walks the spiral forward; each point becomes the next strip vertex unless
/// one of the edges it would introduce crosses the spiral boundary still
/// ahead of it or an edge already in the strip. Skipped candidates collapse
/// degenerately and the walk continues.
fn build_strip(spiral: &[Vec2], start: usize) -> Vec<Vec2> {
    if spiral.len() < 3 {
        return spiral.to_vec();
    }

    let mut strip: Vec<Vec2> = vec![spiral[start]];
    let mut strip_edges: Vec<Segment> = Vec::new();

    for idx in start + 1..spiral.len() {
        let candidate = spiral[idx];
        let last = *strip.last().unwrap();

        let mut new_edges = vec![Segment::new(last, candidate)];
        if strip.len() >= 2 {
            new_edges.push(Segment::new(strip[strip.len() - 2], candidate));
        }

        let blocked = new_edges.iter().any(|edge| {
            crosses_any(edge, strip_edges.iter())
                || crosses_spiral_ahead(edge, spiral, idx)
        });
        if blocked {
            continue;
        }

        strip_edges.extend(new_edges);
        strip.push(candidate);
    }
    strip
}

fn crosses_any<'a>(edge: &Segment, mut others: impl Iterator<Item = &'a Segment>) -> bool {
    others.any(|other| segments_cross(edge.a, edge.b, other.a, other.b))
}

/// Whether `edge` properly crosses any spiral boundary edge at or after
/// `idx`.
fn crosses_spiral_ahead(edge: &Segment, spiral: &[Vec2], idx: usize) -> bool {
    (idx..spiral.len() - 1).any(|j| segments_cross(edge.a, edge.b, spiral[j], spiral[j + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{PointSampler, SampleDistribution, SampleRegion};

    fn sampled(seed: u64, amount: usize, distribution: SampleDistribution) -> Vec<Vec2> {
        let region = SampleRegion::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0)).unwrap();
        dedup_points(&PointSampler::with_seed(region, distribution, seed).sample(amount))
    }

    fn square_with_center() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(5.0, 5.0),
        ]
    }

    fn edge_count_target(points: &[Vec2]) -> usize {
        let hull = ConvexHullComputer::new(ConvexHullAlgorithm::QuickHull)
            .compute_hull(points)
            .unwrap();
        3 * points.len() - 3 - hull_boundary_count(points, &hull)
    }

    fn assert_no_proper_crossings(edges: &[Segment]) {
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                assert!(
                    !segments_cross(a.a, a.b, b.a, b.b),
                    "edges cross: {a:?} x {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_mwt_triangle() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 3.0),
        ];
        let output = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Edges(edges) => {
                assert_eq!(edges.len(), 3);
                assert_no_proper_crossings(&edges);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_mwt_edge_count_law() {
        let points = square_with_center();
        let target = edge_count_target(&points); // 3*5 - 3 - 4 = 8
        assert_eq!(target, 8);

        let output = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Edges(edges) => {
                assert_eq!(edges.len(), target);
                assert_no_proper_crossings(&edges);
                // The four short spokes to the center must all be in.
                let center = Vec2::new(5.0, 5.0);
                let spokes = edges
                    .iter()
                    .filter(|e| e.a == center || e.b == center)
                    .count();
                assert_eq!(spokes, 4);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_mwt_two_points_single_edge() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)];
        let output = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Edges(edges) => {
                assert_eq!(edges.len(), 1);
                assert_eq!(edges[0].length(), 5.0);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_mwt_insufficient_points() {
        let result = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
            .triangulate(&[Vec2::new(1.0, 1.0)]);
        assert!(matches!(
            result,
            Err(GeomError::InsufficientPoints {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_mwt_collinear_fails() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ];
        let result =
            PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight).triangulate(&points);
        assert!(matches!(result, Err(GeomError::TriangulationFailed { .. })));
    }

    #[test]
    fn test_peel_rings_nested_squares() {
        let mut points = square_with_center();
        points.extend([
            Vec2::new(3.0, 3.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(3.0, 7.0),
        ]);
        let rings = peel_rings(&points).unwrap();
        assert_eq!(rings.len(), 3);
        assert_eq!(rings[0].len(), 4); // outer square
        assert_eq!(rings[1].len(), 4); // inner square
        assert_eq!(rings[2], vec![Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_spiral_visits_every_point() {
        let points = square_with_center();
        let output = PlaneTriangulator::new(TriangulationAlgorithm::HamiltonianPath)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Spiral { path, strip } => {
                for p in &points {
                    assert!(path.contains(p), "spiral misses {p:?}");
                }
                assert!(!strip.is_empty());
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_spiral_is_simple() {
        let mut points = square_with_center();
        points.extend([
            Vec2::new(3.0, 3.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(3.0, 7.0),
        ]);
        let output = PlaneTriangulator::new(TriangulationAlgorithm::HamiltonianPath)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Spiral { path, .. } => {
                let edges: Vec<Segment> = path
                    .windows(2)
                    .map(|w| Segment::new(w[0], w[1]))
                    .collect();
                assert_no_proper_crossings(&edges);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_strip_edges_do_not_cross() {
        let mut points = square_with_center();
        points.extend([
            Vec2::new(3.0, 3.0),
            Vec2::new(7.0, 3.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(3.0, 7.0),
        ]);
        let output = PlaneTriangulator::new(TriangulationAlgorithm::HamiltonianPath)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Spiral { strip, .. } => {
                let mut edges: Vec<Segment> = strip
                    .windows(2)
                    .map(|w| Segment::new(w[0], w[1]))
                    .collect();
                for w in strip.windows(3) {
                    edges.push(Segment::new(w[0], w[2]));
                }
                assert_no_proper_crossings(&edges);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_hamiltonian_two_points() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)];
        let output = PlaneTriangulator::new(TriangulationAlgorithm::HamiltonianPath)
            .triangulate(&points)
            .unwrap();
        match output {
            TriangulationOutput::Spiral { path, .. } => assert_eq!(path.len(), 2),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_mwt_edge_count_law_on_random_sets() {
        for seed in 0..5 {
            let points = sampled(seed, 15, SampleDistribution::Uniform);
            let output = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
                .triangulate(&points)
                .unwrap();
            match output {
                TriangulationOutput::Edges(edges) => {
                    assert_eq!(edges.len(), edge_count_target(&points), "seed {seed}");
                    assert_no_proper_crossings(&edges);
                }
                other => panic!("unexpected output: {other:?}"),
            }
        }
    }

    #[test]
    fn test_mwt_edge_count_law_on_clamped_gaussian_sets() {
        // Clamping puts runs of exactly collinear points onto the region
        // edges; those count as boundary points of the triangulation.
        for seed in [5, 6, 7] {
            let points = sampled(seed, 20, SampleDistribution::Gaussian);
            let output = PlaneTriangulator::new(TriangulationAlgorithm::MinimumWeight)
                .triangulate(&points)
                .unwrap();
            match output {
                TriangulationOutput::Edges(edges) => {
                    assert_eq!(edges.len(), edge_count_target(&points), "seed {seed}");
                    assert_no_proper_crossings(&edges);
                }
                other => panic!("unexpected output: {other:?}"),
            }
        }
    }

    #[test]
    fn test_spiral_simple_on_random_sets() {
        for (seed, distribution) in [
            (0, SampleDistribution::Uniform),
            (1, SampleDistribution::Uniform),
            (2, SampleDistribution::Uniform),
            (5, SampleDistribution::Gaussian),
            (6, SampleDistribution::Gaussian),
        ] {
            let points = sampled(seed, 25, distribution);
            let output = PlaneTriangulator::new(TriangulationAlgorithm::HamiltonianPath)
                .triangulate(&points)
                .unwrap();
            match output {
                TriangulationOutput::Spiral { path, .. } => {
                    assert_eq!(path.len(), points.len(), "seed {seed}");
                    for p in &points {
                        assert!(path.contains(p), "spiral misses {p:?} (seed {seed})");
                    }
                    let edges: Vec<Segment> = path
                        .windows(2)
                        .map(|w| Segment::new(w[0], w[1]))
                        .collect();
                    assert_no_proper_crossings(&edges);
                }
                other => panic!("unexpected output: {other:?}"),
            }
        }
    }
}
