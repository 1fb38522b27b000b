// src/lib.rs

//! # geomcalc
//!
//! A pure 2D computational-geometry engine: robust point/line primitives,
//! a points-and-lines analyzer, three convex hull algorithms, two planar
//! triangulation algorithms, and a seedable random point sampler.
//!
//! Every calculation is a pure function of the point set passed into it;
//! computer structs carry configuration (mode, algorithm, pivot strategy)
//! only. The crate does no rendering or I/O; a UI layer supplies points and
//! draws whatever geometry comes back.

pub mod algorithms;
pub mod analysis;
pub mod error;
pub mod sampling;
pub mod types;
pub mod utils;

pub use error::{GeomError, GeomResult};
pub use types::*;

pub mod prelude {
    pub use super::{
        algorithms::convex_hull::{ConvexHullAlgorithm, ConvexHullComputer, PivotStrategy},
        algorithms::triangulation::{
            PlaneTriangulator, TriangulationAlgorithm, TriangulationOutput,
        },
        analysis::{
            intersect_segments, orth_projection, segments_cross, Analysis, AnalysisGeometry,
            AnalysisMode, PointsLinesAnalyzer, SegmentRelation,
        },
        error::{GeomError, GeomResult},
        sampling::{PointSampler, SampleDistribution, SampleRegion},
        types::*,
    };
}
