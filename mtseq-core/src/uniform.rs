use crate::{Canonical, SamplingError};
use rand::distributions::Distribution;
use rand::Rng;

/// Continuous uniform distribution over `[low, high)`, sampled the way
/// `std::uniform_real_distribution` does: one canonical value scaled by the
/// width and shifted by `low`, all in `T` arithmetic.
///
/// Holds only its bounds; the generator is borrowed for each draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformReal<T> {
    low: T,
    high: T,
}

impl<T: Canonical> UniformReal<T> {
    /// Distribution over `[low, high)`.
    ///
    /// Both bounds must be finite, `low < high`, and the width must not
    /// overflow.
    pub fn new(low: T, high: T) -> Result<Self, SamplingError> {
        let valid = low.is_finite() && high.is_finite() && low < high && (high - low).is_finite();
        if !valid {
            return Err(SamplingError::InvalidRange {
                low: low.to_f64(),
                high: high.to_f64(),
            });
        }
        Ok(UniformReal { low, high })
    }

    /// The unit interval `[0, 1)`.
    pub fn standard() -> Self {
        UniformReal {
            low: T::ZERO,
            high: T::ONE,
        }
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }
}

impl<T: Canonical> Default for UniformReal<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: Canonical> Distribution<T> for UniformReal<T> {
    /// Consumes [`Canonical::DRAWS`] engine steps.
    ///
    /// For ranges other than `[0, 1)` the scaled result can round up to
    /// `high`; this matches the C++ library and is not corrected.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        T::generate(rng) * (self.high - self.low) + self.low
    }
}
