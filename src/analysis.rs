// src/analysis.rs

//! # Points & Lines Analyzer
//!
//! Classifies the relationship between up to four labeled points P1..P4:
//! plain point-to-point distance, orthogonal projection of a point onto a
//! segment, and segment-intersection classification (coincident, parallel,
//! disjoint, touch, interior crossing).
//!
//! The analyzer holds only its mode; the point set is passed into
//! [`PointsLinesAnalyzer::calculate`] per call, so a calculation always runs
//! against one consistent snapshot of its inputs.

use crate::error::{GeomError, GeomResult};
use crate::types::{cmp_yx, euclidean_dist, Segment, Vec2};
use serde::{Deserialize, Serialize};

/// Which relationship the analyzer computes on its next calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// Euclidean distance between P1 and P2.
    TwoPoints,
    /// Orthogonal projection of P1 onto segment L1(P2, P3).
    PointAndLine,
    /// Intersection classification of L1(P1, P2) against L2(P3, P4).
    TwoLines,
}

impl Default for AnalysisMode {
    fn default() -> Self {
        AnalysisMode::TwoPoints
    }
}

/// Classification of two segments against each other.
///
/// Branch boundaries (`d == 0`, parameters exactly `0` or `1`) use exact
/// floating comparisons rather than the crate tolerance. Boundary
/// classification stays crisp that way: a parameter of exactly 0 or 1 is a
/// `Touch`, anything strictly inside (0, 1) on both segments is an
/// `Intersection`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentRelation {
    /// Supporting lines are identical and the segments overlap; `overlap` is
    /// the shared sub-segment (the middle two of the four endpoints in
    /// lexicographic order).
    Coincident { overlap: Segment },
    /// Supporting lines are parallel and distinct.
    Parallel,
    /// Segments neither touch nor cross.
    Disjoint,
    /// Intersection exactly at an endpoint of either segment.
    Touch { at: Vec2 },
    /// Interior crossing.
    Intersection { at: Vec2 },
}

/// Classifies segments `p1p2` and `p3p4`.
///
/// Symmetric under swapping the two segments (same classification, same
/// point up to floating tolerance).
pub fn intersect_segments(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> SegmentRelation {
    let r = p2 - p1;
    let s = p4 - p3;
    let q = p1 - p3;

    let d = r.x * s.y - r.y * s.x;
    let a = s.x * q.y - s.y * q.x;
    let b = r.x * q.y - r.y * q.x;

    if d == 0.0 && a == 0.0 && b == 0.0 {
        return SegmentRelation::Coincident {
            overlap: coincident_overlap(p1, p2, p3, p4),
        };
    }
    if d == 0.0 {
        return SegmentRelation::Parallel;
    }

    let ua = a / d;
    let ub = b / d;
    let in_unit = |t: f64| (0.0..=1.0).contains(&t);
    if !in_unit(ua) && !in_unit(ub) {
        return SegmentRelation::Disjoint;
    }

    let at = p1 + r * ua;
    if ua == 0.0 || ua == 1.0 || ub == 0.0 || ub == 1.0 {
        SegmentRelation::Touch { at }
    } else {
        SegmentRelation::Intersection { at }
    }
}

/// Whether the two segments cross at a point strictly interior to both.
///
/// This is the predicate planarity checks want. [`intersect_segments`]
/// reports an `Intersection` as soon as the computed point lies on either of
/// the two segments, which suits the analyzer's display output but
/// over-rejects when used to test triangulation edges against each other.
pub fn segments_cross(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let r = p2 - p1;
    let s = p4 - p3;
    let q = p1 - p3;

    let d = r.x * s.y - r.y * s.x;
    if d == 0.0 {
        return false;
    }
    let ua = (s.x * q.y - s.y * q.x) / d;
    let ub = (r.x * q.y - r.y * q.x) / d;
    0.0 < ua && ua < 1.0 && 0.0 < ub && ub < 1.0
}

/// Shared sub-segment of two collinear overlapping segments: sort all four
/// endpoints lexicographically (y, then x) and take the middle two.
fn coincident_overlap(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Segment {
    let mut pts = [p1, p2, p3, p4];
    pts.sort_by(cmp_yx);
    Segment::new(pts[1], pts[2])
}

/// Orthogonal projection of `p1` onto segment `p2p3`.
///
/// Returns `(falls_on, projected, distance, closest)`. A zero-length base
/// segment projects onto `p2` itself. `falls_on` is inclusive of the segment
/// endpoints. When the projection misses the segment, `distance` and
/// `closest` refer to the nearer endpoint instead of the projected point.
pub fn orth_projection(p1: Vec2, p2: Vec2, p3: Vec2) -> (bool, Vec2, f64, Vec2) {
    let v1 = p3 - p2;
    let v2 = p1 - p2;

    let len = v1.norm();
    let vn = if len > 0.0 { v1 / len } else { v1 };

    let sp = vn.dot(&v2);
    let pp = p2 + vn * sp;

    let falls_on = 0.0 <= sp && sp <= len;
    if falls_on {
        let distance = euclidean_dist(p1, pp);
        return (true, pp, distance, pp);
    }

    let distance_p2 = euclidean_dist(p1, p2);
    let distance_p3 = euclidean_dist(p1, p3);
    if distance_p3 < distance_p2 {
        (false, pp, distance_p3, p3)
    } else {
        (false, pp, distance_p2, p2)
    }
}

/// Auxiliary geometry a calculation produces for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnalysisGeometry {
    /// Nothing to draw beyond the inputs.
    None,
    /// Projected point, closest point on the segment, and whether the
    /// projection landed on the segment.
    Projection {
        projected: Vec2,
        closest: Vec2,
        falls_on: bool,
    },
    /// Overlap sub-segment of two coincident segments.
    SharedSubSegment(Segment),
    /// Computed intersection or touch point.
    IntersectionPoint(Vec2),
}

/// Result of one analyzer calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Numeric result (a distance, or 0 for pure classifications).
    pub value: f64,
    /// Human-readable explanation for display.
    pub summary: String,
    pub geometry: AnalysisGeometry,
}

/// Distance / projection / intersection analyzer over four labeled points.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsLinesAnalyzer {
    mode: AnalysisMode,
}

impl PointsLinesAnalyzer {
    pub fn new(mode: AnalysisMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Runs the configured analysis on points P1..P4.
    ///
    /// Exactly four points are required; modes that need fewer simply ignore
    /// the unused slots. Fewer than four points is an `InvalidInput` error.
    pub fn calculate(&self, points: &[Vec2]) -> GeomResult<Analysis> {
        if points.len() < 4 {
            return Err(GeomError::InvalidInput {
                message: format!("expected 4 labeled points, got {}", points.len()),
            });
        }
        let (p1, p2, p3, p4) = (points[0], points[1], points[2], points[3]);

        match self.mode {
            AnalysisMode::TwoPoints => Ok(self.two_points(p1, p2)),
            AnalysisMode::PointAndLine => Ok(self.point_and_line(p1, p2, p3)),
            AnalysisMode::TwoLines => Ok(self.two_lines(p1, p2, p3, p4)),
        }
    }

    fn two_points(&self, p1: Vec2, p2: Vec2) -> Analysis {
        let distance = euclidean_dist(p1, p2);
        Analysis {
            value: distance,
            summary: format!("Euclidean distance between P1 and P2:\n{distance}"),
            geometry: AnalysisGeometry::None,
        }
    }

    fn point_and_line(&self, p1: Vec2, p2: Vec2, p3: Vec2) -> Analysis {
        let (falls_on, pp, distance, closest) = orth_projection(p1, p2, p3);

        let mut summary = format!(
            "Orthogonal projection of P1 onto L1(P2,P3):\nPP ({}, {})",
            pp.x, pp.y
        );
        let closest_label = if falls_on {
            "PP"
        } else {
            summary += ", but does not fall on the line.";
            if closest == p2 { "P2" } else { "P3" }
        };
        summary += &format!(
            "\nClosest distance to line is between P1 and {closest_label}: {distance}"
        );

        Analysis {
            value: distance,
            summary,
            geometry: AnalysisGeometry::Projection {
                projected: pp,
                closest,
                falls_on,
            },
        }
    }

    fn two_lines(&self, p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Analysis {
        let relation = intersect_segments(p1, p2, p3, p4);
        let mut summary = String::from("Intersection between L1(P1,P2) and L2(P3,P4):\n");

        match relation {
            SegmentRelation::Coincident { overlap } => {
                let fully = (p1 == p3 && p2 == p4) || (p1 == p4 && p2 == p3);
                if fully {
                    summary += &format!(
                        "Fully coincident between\nP1/P3 ({}, {}) and P2/P4 ({}, {})",
                        p1.x, p1.y, p2.x, p2.y
                    );
                } else {
                    summary += &format!(
                        "Coincident between\n({}, {}) and ({}, {})",
                        overlap.a.x, overlap.a.y, overlap.b.x, overlap.b.y
                    );
                }
                Analysis {
                    value: 0.0,
                    summary,
                    geometry: AnalysisGeometry::SharedSubSegment(overlap),
                }
            }
            SegmentRelation::Touch { at } | SegmentRelation::Intersection { at } => {
                let touch = matches!(relation, SegmentRelation::Touch { .. });
                summary += &format!("PI ({}, {})", at.x, at.y);
                for label in coinciding_labels(at, p1, p2, p3, p4) {
                    summary += &format!(" = {label}");
                }
                if touch {
                    summary += "\nSegments touch at an endpoint.";
                }
                Analysis {
                    value: 0.0,
                    summary,
                    geometry: AnalysisGeometry::IntersectionPoint(at),
                }
            }
            SegmentRelation::Parallel => Analysis {
                value: 0.0,
                summary: summary + "None, lines are parallel.",
                geometry: AnalysisGeometry::None,
            },
            SegmentRelation::Disjoint => Analysis {
                value: 0.0,
                summary: summary + "None",
                geometry: AnalysisGeometry::None,
            },
        }
    }
}

/// Labels among P1..P4 that exactly coincide with the computed point, for the
/// explanatory text. At most one label per segment is reported.
fn coinciding_labels(at: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if at == p2 {
        labels.push("P2");
    } else if at == p1 {
        labels.push("P1");
    }
    if at == p4 {
        labels.push("P4");
    } else if at == p3 {
        labels.push("P3");
    }
    labels
}
