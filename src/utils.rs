// src/utils.rs

/// Mathematical constants
pub mod constants {
    /// Tolerance for floating-point comparisons everywhere a guarded
    /// comparison is wanted (angle ties, zero-area checks).
    pub const EPSILON: f64 = 1e-6;
    pub const EPSILON_SQUARED: f64 = EPSILON * EPSILON;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
}

/// Comparison functions with tolerance
pub mod comparison {
    use super::constants::EPSILON;

    /// Checks whether two floats are (nearly) equal.
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Checks whether two floats are equal under a custom tolerance.
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Checks whether a float is (nearly) zero.
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}

/// Angle helpers shared by the hull and triangulation algorithms.
pub mod angles {
    use super::constants::TAU;
    use crate::types::Vec2;

    /// Normalizes an angle into `[0, 2π)`.
    pub fn normalize_tau(angle: f64) -> f64 {
        let mut a = angle % TAU;
        if a < 0.0 {
            a += TAU;
        }
        a
    }

    /// Polar angle of `p` as seen from `origin`, measured from the positive
    /// x-axis and normalized into `[0, 2π)`.
    pub fn polar_angle(origin: Vec2, p: Vec2) -> f64 {
        normalize_tau((p.y - origin.y).atan2(p.x - origin.x))
    }

    /// Turn angle at `cur` between the incoming direction `prev → cur` and
    /// the outgoing direction `cur → candidate`, normalized into `[0, 2π)`.
    ///
    /// A result below π is a left (counter-clockwise) turn, above π a right
    /// turn. Gift wrapping picks the candidate minimizing this angle.
    pub fn turn_angle(prev: Vec2, cur: Vec2, candidate: Vec2) -> f64 {
        let v1 = cur - prev;
        let v2 = candidate - cur;
        let cross = v1.x * v2.y - v1.y * v2.x;
        let dot = v1.dot(&v2);
        normalize_tau(cross.atan2(dot))
    }
}
