//! Random sources for the generator.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Supplies uniform draws in `[0, 1]`.
///
/// A value of exactly `1.0` is permitted so callers can force a particle to
/// the outer radius; [`RngSource`] never produces it.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Adapts any [`rand::Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Non-deterministic source backed by the thread-local RNG.
pub fn thread_source() -> RngSource<ThreadRng> {
    RngSource(rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_source_stays_in_unit_interval() {
        let mut source = thread_source();
        for _ in 0..10_000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = RngSource(StdRng::seed_from_u64(42));
        let mut b = RngSource(StdRng::seed_from_u64(42));
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
