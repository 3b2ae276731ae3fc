// Bit-exact port of the 32-bit Mersenne Twister as specified for std::mt19937
// (ISO C++ [rand.predef]): word size 32, degree 624, middle word 397.
// Seeding, twisting and tempering all follow the standard's parameter set, so
// any conforming standard library yields the same stream for the same seed.

use rand_core::{impls, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Seed used by a default-constructed `std::mt19937`.
pub const DEFAULT_SEED: u32 = 5489;

/// Captured state of an Mt19937 instance, allowing exact reproduction of its
/// output stream from the point of capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mt19937State {
    state: [u32; N],
    index: usize,
}

/// 32-bit Mersenne Twister producing the same sequence as C++ `std::mt19937`.
#[derive(Clone, Debug)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create a generator seeded like `std::mt19937 rng(seed)`.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; N],
            index: N,
        };
        rng.seed(seed);
        rng
    }

    /// Re-seed in place, equivalent to `rng.seed(seed)` in C++.
    pub fn seed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }

        // First draw regenerates the whole block
        self.index = N;
    }

    /// Generate the next tempered 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Advance the state by `steps` outputs without producing them.
    ///
    /// Same effect as calling [`next_u32`](Self::next_u32) `steps` times;
    /// tempering is skipped since the values are never observed.
    pub fn discard(&mut self, mut steps: u64) {
        while steps > 0 {
            if self.index >= N {
                self.twist();
            }
            let taken = ((N - self.index) as u64).min(steps);
            self.index += taken as usize;
            steps -= taken;
        }
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }

    /// Capture the current state for later restoration.
    pub fn capture_state(&self) -> Mt19937State {
        Mt19937State {
            state: self.state,
            index: self.index,
        }
    }

    /// Create a new instance from a captured state.
    /// The new instance produces the exact sequence the original would have
    /// produced from the point the state was captured.
    pub fn from_state(state: Mt19937State) -> Self {
        Self {
            state: state.state,
            index: state.index,
        }
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    /// Low word first, matching how two 32-bit draws compose into 64 bits
    /// elsewhere in the rand ecosystem.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Reduces the seed modulo 2^32, as `std::mt19937` does with a wider
    /// integer seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
