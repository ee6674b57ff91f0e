//! Random-source seam.
//!
//! Probabilistic routes draw through this trait instead of calling the RNG
//! directly, so tests can substitute a scripted source and pin down both
//! branches of a coin flip or the exact duration of a randomized wait.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rand::Rng;

/// Source of uniform randomness used by handlers.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform integer in `[lo, hi]`, interpreted as milliseconds.
    fn range_ms(&self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        let width = (hi - lo + 1) as f64;
        let offset = (self.unit() * width) as u64;
        lo + offset.min(hi - lo)
    }
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn range_ms(&self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Deterministic source replaying a fixed sequence of unit values. Once the
/// sequence is exhausted it keeps returning `0.0`, which maps `range_ms` to
/// its lower bound.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    units: Mutex<VecDeque<f64>>,
}

impl ScriptedSource {
    pub fn new(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: Mutex::new(units.into_iter().collect()),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&self) -> f64 {
        self.units
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(0.0)
    }
}
