//! Target number sources.
//!
//! The game draws a fresh target whenever a level starts. The draw goes
//! through [`TargetSource`] so callers can swap the thread RNG for a fixed
//! value.

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

/// Produces the number the player has to find.
pub trait TargetSource {
    /// Draw a value in `min..=max`.
    fn draw(&mut self, min: i64, max: i64) -> i64;
}

/// Uniform draw from any [`Rng`]; the thread RNG by default.
#[derive(Debug, Clone)]
pub struct RandomTarget<R = ThreadRng> {
    rng: R,
}

impl RandomTarget<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for RandomTarget<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomTarget<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn draw(&mut self, _min: i64, _max: i64) -> i64 {
        self.0
    }
}

/// Yields values from a list in order, repeating the last one.
#[derive(Debug, Clone, Default)]
pub struct SequenceTarget {
    values: Vec<i64>,
    next: usize,
}

impl SequenceTarget {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, next: 0 }
    }
}

impl TargetSource for SequenceTarget {
    fn draw(&mut self, min: i64, _max: i64) -> i64 {
        let value = match self.values.get(self.next) {
            Some(v) => *v,
            None => self.values.last().copied().unwrap_or(min),
        };
        self.next += 1;
        value
    }
}

impl<T: TargetSource + ?Sized> TargetSource for Box<T> {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        (**self).draw(min, max)
    }
}
