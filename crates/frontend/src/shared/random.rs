//! Bounded random metric values for mock dashboard data.
//!
//! Values are uniform in `[min, max]`, rounded to a fixed number of decimals
//! and clamped back into the range, so chart domains (e.g. 0..100 for
//! percentages) always hold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range plus display precision of one generated metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64, decimals: u32) -> Self {
        Self { min, max, decimals }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Rounds half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Uniform value in `[min, max]` rounded to `decimals`; never leaves the range
pub fn random_value<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: u32) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if lo == hi {
        return lo;
    }
    let raw = rng.gen_range(lo..=hi);
    round_to(raw, decimals).clamp(lo, hi)
}

/// Metric generator over an injectable RNG
pub struct MetricRandom<R: Rng> {
    rng: R,
}

impl<R: Rng> MetricRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn random(&mut self, min: f64, max: f64, decimals: u32) -> f64 {
        random_value(&mut self.rng, min, max, decimals)
    }

    pub fn in_range(&mut self, range: MetricRange) -> f64 {
        self.random(range.min, range.max, range.decimals)
    }
}

impl MetricRandom<StdRng> {
    /// Reproducible generator for fixtures and tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the platform entropy source (crypto.getRandomValues on wasm)
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345, 0), 12.0);
        assert_eq!(round_to(12.36, 1), 12.4);
        assert_eq!(round_to(-2.25, 1), -2.3);
        assert_eq!(round_to(99.96, 1), 100.0);
    }

    #[test]
    fn test_values_stay_in_range_after_rounding() {
        let mut rng = MetricRandom::seeded(7);
        for _ in 0..2_000 {
            let v = rng.random(95.0, 99.5, 0);
            assert!((95.0..=99.5).contains(&v), "{v} out of range");
            let p = rng.random(0.1, 2.5, 1);
            assert!((0.1..=2.5).contains(&p), "{p} out of range");
        }
    }

    #[test]
    fn test_decimals_are_respected() {
        let mut rng = MetricRandom::seeded(11);
        for _ in 0..200 {
            let v = rng.random(5.0, 15.0, 2);
            assert!((v * 100.0 - (v * 100.0).round()).abs() < 1e-6);
            let i = rng.random(50_000.0, 150_000.0, 0);
            assert_eq!(i, i.trunc());
        }
    }

    #[test]
    fn test_degenerate_and_reversed_ranges() {
        let mut rng = MetricRandom::seeded(3);
        assert_eq!(rng.random(4.0, 4.0, 1), 4.0);
        for _ in 0..100 {
            let v = rng.random(10.0, -2.0, 1);
            assert!((-2.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = MetricRandom::seeded(42);
        let mut b = MetricRandom::seeded(42);
        let xs: Vec<f64> = (0..10).map(|_| a.random(0.0, 100.0, 1)).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.random(0.0, 100.0, 1)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_metric_range_contains() {
        let r = MetricRange::new(90.0, 99.0, 1);
        assert!(r.contains(90.0));
        assert!(r.contains(99.0));
        assert!(!r.contains(99.05));
    }
}
