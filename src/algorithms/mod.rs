// src/algorithms/mod.rs

pub mod convex_hull;
pub mod triangulation;

pub use self::convex_hull::{ConvexHullAlgorithm, ConvexHullComputer, PivotStrategy};
pub use self::triangulation::{PlaneTriangulator, TriangulationAlgorithm, TriangulationOutput};
