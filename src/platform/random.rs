//! Random integer sources

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random integers in an inclusive range
pub trait RandomSource {
    fn random_value(&mut self, min: i32, max: i32) -> i32;
}

/// PCG-backed source; the same seed replays the same serves
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for SeededRandom {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values (clamped into the requested range),
/// cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<i32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(min, max.max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_values_in_range() {
        let mut rng = SeededRandom::new(12345);
        for _ in 0..1000 {
            let angle = rng.random_value(-45, 45);
            assert!((-45..=45).contains(&angle));
            let coin = rng.random_value(0, 99);
            assert!((0..=99).contains(&coin));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        let xs: Vec<i32> = (0..32).map(|_| a.random_value(-45, 45)).collect();
        let ys: Vec<i32> = (0..32).map(|_| b.random_value(-45, 45)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(rng.random_value(5, 5), 5);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new(&[1, 60]);
        assert_eq!(rng.random_value(-45, 45), 1);
        assert_eq!(rng.random_value(0, 99), 60);
        assert_eq!(rng.random_value(-45, 45), 1);
        assert_eq!(rng.random_value(0, 50), 50);
    }
}
