//! Source of uniform randomness for the opponent.

use rand::Rng;

/// Produces samples uniformly distributed in `[0, 1)`.
///
/// The opponent only ever asks for this one kind of number, so tests can
/// drive it with a fixed script instead of a real generator.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let scaled = (self.uniform() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of samples, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `samples` in order, forever.
    ///
    /// An empty script always yields `0.0`.
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            next: 0,
        }
    }

    /// A source that always returns `sample`.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}
