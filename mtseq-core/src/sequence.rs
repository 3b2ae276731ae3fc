use crate::{Canonical, UniformReal};
use mt19937::Mt19937;
use rand::distributions::Distribution;
use rand::RngCore;
use tracing::{debug, trace};

/// Seed used by the entry point when none is given.
pub const DEFAULT_SEED: u32 = 42;

/// Number of samples the entry point produces.
pub const DEFAULT_COUNT: usize = 10;

/// Draw one value from `dist`, advancing the generator by
/// [`Canonical::DRAWS`] steps (one for `f32`).
#[inline]
pub fn draw_sample<T, R>(rng: &mut R, dist: &UniformReal<T>) -> T
where
    T: Canonical,
    R: RngCore + ?Sized,
{
    dist.sample(rng)
}

/// Advance the generator by exactly one step, discarding the output.
#[inline]
pub fn skip_step<R: RngCore + ?Sized>(rng: &mut R) {
    rng.next_u32();
}

/// Produce `count` samples in `[0, 1)` from an mt19937 seeded with `seed`,
/// discarding one raw output after every retained sample.
///
/// Consumes `2 * count` generator steps.
pub fn generate_sequence(seed: u32, count: usize) -> Vec<f32> {
    SequenceGenerator::new(seed).generate_many(count)
}

/// Seed and length for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    pub seed: u32,
    pub count: usize,
}

impl SequenceConfig {
    pub fn new(seed: u32, count: usize) -> Self {
        SequenceConfig { seed, count }
    }

    pub fn generate(&self) -> Vec<f32> {
        generate_sequence(self.seed, self.count)
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            seed: DEFAULT_SEED,
            count: DEFAULT_COUNT,
        }
    }
}

/// Generator for alternating draw/skip sequences
pub struct SequenceGenerator<T = f32> {
    rng: Mt19937,
    dist: UniformReal<T>,
    skip: u64,
}

impl SequenceGenerator<f32> {
    /// Standard `[0, 1)` single-precision generator with one skipped
    /// output per sample.
    pub fn new(seed: u32) -> Self {
        Self::with_distribution(seed, UniformReal::standard())
    }
}

impl<T: Canonical> SequenceGenerator<T> {
    pub fn with_distribution(seed: u32, dist: UniformReal<T>) -> Self {
        debug!(seed, draws_per_sample = T::DRAWS, "seeded mt19937");
        SequenceGenerator {
            rng: Mt19937::new(seed),
            dist,
            skip: 1,
        }
    }

    /// Set how many raw outputs are discarded after each sample.
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Draw one sample, then skip.
    pub fn next_sample(&mut self) -> T {
        let value = draw_sample(&mut self.rng, &self.dist);
        for _ in 0..self.skip {
            skip_step(&mut self.rng);
        }
        trace!(%value, "sample");
        value
    }

    /// Generate multiple samples
    pub fn generate_many(&mut self, count: usize) -> Vec<T> {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(self.next_sample());
        }
        debug!(count, "sequence complete");
        samples
    }

    /// Engine steps consumed per call to [`next_sample`](Self::next_sample).
    pub fn steps_per_sample(&self) -> u64 {
        u64::from(T::DRAWS) + self.skip
    }

    pub fn distribution(&self) -> &UniformReal<T> {
        &self.dist
    }

    /// The underlying engine, for state inspection.
    pub fn engine(&self) -> &Mt19937 {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts raw outputs pulled through it.
    struct Counting {
        inner: Mt19937,
        steps: u64,
    }

    impl RngCore for Counting {
        fn next_u32(&mut self) -> u32 {
            self.steps += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            let low = u64::from(self.next_u32());
            let high = u64::from(self.next_u32());
            (high << 32) | low
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.inner.try_fill_bytes(dest)
        }
    }

    fn counting(seed: u32) -> Counting {
        Counting {
            inner: Mt19937::new(seed),
            steps: 0,
        }
    }

    #[test]
    fn test_draw_sample_consumes_one_step() {
        let mut rng = counting(42);
        let dist = UniformReal::<f32>::standard();
        draw_sample(&mut rng, &dist);
        assert_eq!(rng.steps, 1);
    }

    #[test]
    fn test_double_draw_consumes_two_steps() {
        let mut rng = counting(42);
        let dist = UniformReal::<f64>::standard();
        draw_sample(&mut rng, &dist);
        assert_eq!(rng.steps, 2);
    }

    #[test]
    fn test_skip_step_consumes_one_step() {
        let mut rng = counting(42);
        skip_step(&mut rng);
        assert_eq!(rng.steps, 1);
    }

    #[test]
    fn test_skip_discards_alternate_outputs() {
        // Retained samples come from raw outputs 0, 2, 4, ...
        let samples = generate_sequence(42, 5);
        let mut raw = Mt19937::new(42);
        let dist = UniformReal::<f32>::standard();

        for (i, &sample) in samples.iter().enumerate() {
            let expected = draw_sample(&mut raw, &dist);
            raw.next_u32();
            assert_eq!(sample.to_bits(), expected.to_bits(), "Mismatch at index {}", i);
        }
    }

    #[test]
    fn test_generator_steps_match_discard() {
        let mut gen = SequenceGenerator::new(42);
        gen.generate_many(10);

        let mut reference = Mt19937::new(42);
        reference.discard(20);

        assert_eq!(gen.engine().capture_state(), reference.capture_state());
    }

    #[test]
    fn test_steps_per_sample() {
        assert_eq!(SequenceGenerator::new(1).steps_per_sample(), 2);
        assert_eq!(SequenceGenerator::new(1).with_skip(3).steps_per_sample(), 4);

        let double = SequenceGenerator::with_distribution(1, UniformReal::<f64>::standard());
        assert_eq!(double.steps_per_sample(), 3);
    }

    #[test]
    fn test_zero_skip_is_plain_stream() {
        let mut gen = SequenceGenerator::new(42).with_skip(0);
        let samples = gen.generate_many(4);

        let mut rng = Mt19937::new(42);
        let expected: Vec<f32> = (0..4).map(|_| f32::generate(&mut rng)).collect();
        assert_eq!(samples, expected);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate_sequence(42, 0).is_empty());

        let mut gen = SequenceGenerator::new(42);
        gen.generate_many(0);
        assert_eq!(gen.engine().capture_state(), Mt19937::new(42).capture_state());
    }

    #[test]
    fn test_next_sample_continues_sequence() {
        let mut gen = SequenceGenerator::new(42);
        let first: Vec<f32> = (0..3).map(|_| gen.next_sample()).collect();
        let rest = gen.generate_many(2);

        let all = generate_sequence(42, 5);
        assert_eq!(&all[..3], &first[..]);
        assert_eq!(&all[3..], &rest[..]);
    }

    #[test]
    fn test_config_defaults() {
        let config = SequenceConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.count, 10);
        assert_eq!(config.generate(), generate_sequence(42, 10));
        assert_eq!(SequenceConfig::new(7, 3).generate().len(), 3);
    }

    #[test]
    fn test_ranged_distribution_generator() {
        let dist = UniformReal::new(-1.0f64, 1.0).unwrap();
        let mut gen = SequenceGenerator::with_distribution(42, dist);
        assert_eq!(gen.distribution(), &dist);

        for x in gen.generate_many(1000) {
            assert!((-1.0..1.0).contains(&x));
        }
    }
}
