// src/types/point.rs
use crate::utils::comparison;
use nalgebra::Vector2;
use std::cmp::Ordering;

/// Working 2D point/vector type used throughout the crate.
///
/// Equality is exact bitwise equality, which the point-set utilities rely on
/// for container membership; numeric comparisons (angles, areas) go through
/// the tolerance in `utils::comparison` instead.
pub type Vec2 = Vector2<f64>;

/// Twice the signed area of triangle `(a, b, c)`, via the 2D cross product
/// `(a - b) × (c - b)`.
///
/// Sign gives orientation: positive means `c` lies left of the ray `b → a`
/// (the triple makes a counter-clockwise turn), negative right, zero
/// collinear. This is the single orientation predicate shared by every hull
/// and triangulation code path; do not reimplement it with a different sign
/// convention.
#[inline]
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (a.x - b.x) * (c.y - b.y) - (a.y - b.y) * (c.x - b.x)
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_dist(p: Vec2, q: Vec2) -> f64 {
    (p - q).norm()
}

/// Lexicographic ordering by y, then x. Used for hull anchors and the
/// coincident-overlap computation.
pub fn cmp_yx(a: &Vec2, b: &Vec2) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Lexicographic ordering by x, then y. Used for the Quickhull extremes.
pub fn cmp_xy(a: &Vec2, b: &Vec2) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Removes exact duplicates from a point set, keeping first occurrences.
pub fn dedup_points(points: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Whether all points lie on one line (within tolerance). Expects a
/// duplicate-free set; returns `true` for fewer than 3 points.
pub fn all_collinear(points: &[Vec2]) -> bool {
    if points.len() < 3 {
        return true;
    }
    let a = points[0];
    let b = points[1];
    points[2..]
        .iter()
        .all(|&p| comparison::nearly_zero(signed_area(a, b, p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_area_orientation() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        // (b - a) × (c - a) with c above the x-axis is a left turn.
        assert!(signed_area(b, a, Vec2::new(0.5, 1.0)) > 0.0);
        assert!(signed_area(b, a, Vec2::new(0.5, -1.0)) < 0.0);
        assert_eq!(signed_area(b, a, Vec2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_euclidean_dist_metric() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, 0.0);
        let c = Vec2::new(4.0, 3.0);
        assert_eq!(euclidean_dist(a, b), 4.0);
        assert_eq!(euclidean_dist(a, b), euclidean_dist(b, a));
        assert_eq!(euclidean_dist(a, a), 0.0);
        // Triangle inequality on the 3-4-5 triangle.
        assert!(euclidean_dist(a, c) <= euclidean_dist(a, b) + euclidean_dist(b, c));
        assert_eq!(euclidean_dist(a, c), 5.0);
    }

    #[test]
    fn test_dedup_points() {
        let pts = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 1.0),
        ];
        let unique = dedup_points(&pts);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_all_collinear() {
        let line = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, 5.0),
        ];
        assert!(all_collinear(&line));

        let triangle = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, 0.0),
        ];
        assert!(!all_collinear(&triangle));
    }
}
