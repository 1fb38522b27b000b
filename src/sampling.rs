// src/sampling.rs

//! # Random Point Sampling
//!
//! Generates point sets over a bounded rectangular region, either uniformly
//! or Gaussian-centered, for feeding the hull and triangulation engines.
//! Every sampler is seedable so test runs are reproducible.

use crate::error::{GeomError, GeomResult};
use crate::types::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle points are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl SampleRegion {
    /// Fails with `InvalidInput` when `min` exceeds `max` on either axis.
    pub fn new(min: Vec2, max: Vec2) -> GeomResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(GeomError::InvalidInput {
                message: format!("inverted sample region: min {min:?}, max {max:?}"),
            });
        }
        Ok(Self { min, max })
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Distribution of sampled points over the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleDistribution {
    /// Uniform per axis over the whole region.
    Uniform,
    /// Gaussian centered on the region, σ = a quarter of the extent per
    /// axis, clamped into the region.
    Gaussian,
}

impl Default for SampleDistribution {
    fn default() -> Self {
        SampleDistribution::Uniform
    }
}

/// Random point generator over a bounded region.
#[derive(Debug)]
pub struct PointSampler {
    region: SampleRegion,
    distribution: SampleDistribution,
    rng: StdRng,
}

impl PointSampler {
    /// Sampler seeded from OS entropy.
    pub fn new(region: SampleRegion, distribution: SampleDistribution) -> Self {
        Self {
            region,
            distribution,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sampler for reproducible point sets.
    pub fn with_seed(region: SampleRegion, distribution: SampleDistribution, seed: u64) -> Self {
        Self {
            region,
            distribution,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn region(&self) -> SampleRegion {
        self.region
    }

    /// Draws `amount` points; all of them lie inside the region.
    pub fn sample(&mut self, amount: usize) -> Vec<Vec2> {
        (0..amount)
            .map(|_| match self.distribution {
                SampleDistribution::Uniform => self.sample_uniform(),
                SampleDistribution::Gaussian => self.sample_gaussian(),
            })
            .collect()
    }

    fn sample_uniform(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(self.region.min.x..=self.region.max.x),
            self.rng.random_range(self.region.min.y..=self.region.max.y),
        )
    }

    fn sample_gaussian(&mut self) -> Vec2 {
        let center = self.region.center();
        let sigma = self.region.extent() * 0.25;
        let (g1, g2) = self.standard_normal_pair();
        self.region
            .clamp(center + Vec2::new(g1 * sigma.x, g2 * sigma.y))
    }

    /// Two independent standard-normal draws via the Marsaglia polar method.
    fn standard_normal_pair(&mut self) -> (f64, f64) {
        loop {
            let u: f64 = self.rng.random_range(-1.0..=1.0);
            let v: f64 = self.rng.random_range(-1.0..=1.0);
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let f = (-2.0 * s.ln() / s).sqrt();
                return (u * f, v * f);
            }
        }
    }
}
