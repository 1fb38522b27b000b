// src/types/mod.rs
pub mod point;
pub mod segment;

pub use point::*;
pub use segment::*;
