//! Sources of random integers.
//!
//! [`GuessEnv`](crate::GuessEnv) and [`RandomGuessPolicy`](crate::RandomGuessPolicy)
//! draw numbers through [`RandomSource`], so that tests can replace randomness
//! with a fixed script.

/// Uniformly distributed integers over half-open ranges.
pub trait RandomSource {
    /// Returns an integer in `[lo, hi)`. Callers guarantee `lo < hi`.
    fn gen_range(&mut self, lo: i64, hi: i64) -> i64;

    /// Reseeds the source.
    fn seed(&mut self, seed: u64);
}

/// [`RandomSource`] backed by a [`fastrand::Rng`].
#[derive(Clone, Debug)]
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    /// Constructs a source with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }
}

impl RandomSource for FastrandSource {
    fn gen_range(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.i64(lo..hi)
    }

    fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}

/// [`RandomSource`] returning scripted values in order, cycling at the end.
///
/// A value `v` is mapped into `[lo, hi)` as `lo + (v - lo) mod (hi - lo)`,
/// so values already inside the range are returned unchanged.
/// An empty script always returns `lo`. Seeding rewinds the script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: Vec<i64>,
    pos: usize,
}

impl ScriptedSource {
    /// Constructs a source returning `values`.
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn gen_range(&mut self, lo: i64, hi: i64) -> i64 {
        if self.values.is_empty() {
            return lo;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        lo + (v - lo).rem_euclid(hi - lo)
    }

    fn seed(&mut self, _seed: u64) {
        self.pos = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scripted_source() {
        let mut src = ScriptedSource::new(vec![42, 7, 120]);
        assert_eq!(src.gen_range(0, 100), 42);
        assert_eq!(src.gen_range(10, 20), 17);
        assert_eq!(src.gen_range(0, 100), 20);
        assert_eq!(src.gen_range(0, 100), 42);
        src.seed(0);
        assert_eq!(src.gen_range(0, 100), 42);

        assert_eq!(ScriptedSource::default().gen_range(5, 9), 5);
    }

    #[test]
    fn test_fastrand_source_is_reproducible() {
        let mut a = FastrandSource::with_seed(42);
        let mut b = FastrandSource::with_seed(42);
        let xs: Vec<_> = (0..100).map(|_| a.gen_range(0, 100)).collect();
        let ys: Vec<_> = (0..100).map(|_| b.gen_range(0, 100)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| (0..100).contains(x)));

        a.seed(42);
        assert_eq!(a.gen_range(0, 100), xs[0]);
    }
}
