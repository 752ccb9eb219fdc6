//! Jitter source port
//!
//! The fallback price after a compute error is scaled by a random factor.
//! The source of that factor is a port so callers can pin it.

use pricing_domain::JITTER_BOUND;
use rand::Rng;

/// Produces relative jitter values in `[-JITTER_BOUND, +JITTER_BOUND]`
pub trait JitterSource: Send + Sync {
    fn sample(&self) -> f64;
}

/// Uniform jitter drawn from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_BOUND..=JITTER_BOUND)
    }
}

/// Always returns the same jitter value
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_stays_in_bounds() {
        let jitter = RandomJitter;
        for _ in 0..1000 {
            let j = jitter.sample();
            assert!((-JITTER_BOUND..=JITTER_BOUND).contains(&j), "{}", j);
        }
    }

    #[test]
    fn test_fixed_jitter() {
        assert_eq!(FixedJitter(0.05).sample(), 0.05);
    }
}
