// Mapping from raw 32-bit engine output to a value in [0, 1), reproducing
// libstdc++'s std::generate_canonical for an engine whose range is the full
// 2^32. With that range, k = max(1, ceil(digits / 32)) draws are combined:
// one draw for float (24 digits), two for double (53 digits).

use rand::RngCore;
use std::fmt;
use std::ops::{Add, Mul, Sub};

const TWO_POW_32: f64 = 4_294_967_296.0;
const TWO_POW_64: f64 = TWO_POW_32 * TWO_POW_32;

/// Floating-point types that can be produced from raw engine output.
pub trait Canonical:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Engine steps consumed per canonical value.
    const DRAWS: u32;

    const ZERO: Self;
    const ONE: Self;

    /// Largest representable value strictly below one.
    const BELOW_ONE: Self;

    /// Draw a canonical value in [0, 1).
    fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    fn is_finite(self) -> bool;

    fn to_f64(self) -> f64;
}

impl Canonical for f32 {
    const DRAWS: u32 = 1;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const BELOW_ONE: Self = 1.0 - f32::EPSILON / 2.0;

    #[inline]
    fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        // Conversion rounds to nearest even, so draws from 2^32 - 2^7 upward land on 2^32
        let sum = rng.next_u32() as f32;
        let value = sum / TWO_POW_32 as f32;
        if value >= 1.0 {
            Self::BELOW_ONE
        } else {
            value
        }
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Canonical for f64 {
    const DRAWS: u32 = 2;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const BELOW_ONE: Self = 1.0 - f64::EPSILON / 2.0;

    #[inline]
    fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let low = rng.next_u32() as f64;
        let high = rng.next_u32() as f64;
        let value = (low + high * TWO_POW_32) / TWO_POW_64;
        if value >= 1.0 {
            Self::BELOW_ONE
        } else {
            value
        }
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// 53-bit resolution double in [0, 1) built from two draws, the mapping
/// numpy's legacy `RandomState.random_sample` applies to MT19937 output.
///
/// Consumes two engine steps. Never rounds up to one.
#[inline]
pub fn random_sample_53<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let a = (rng.next_u32() >> 5) as f64;
    let b = (rng.next_u32() >> 6) as f64;
    (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
}
