//! Random sources for effects
//!
//! Effects only need small uniform draws (`0..4`, `0..3`, `0..2`), so the
//! trait is kept minimal. Firmware usually seeds [`XorShiftRng`] once from a
//! hardware RNG at boot.

/// Source of random numbers used by effects
pub trait CubeRng {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `0..bound`
    ///
    /// `bound` must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    fn below(&mut self, bound: u8) -> u8 {
        debug_assert!(bound > 0);
        (self.next_u32() % u32::from(bound)) as u8
    }
}

impl<R: CubeRng + ?Sized> CubeRng for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Fallback state used when seeded with zero (xorshift never leaves zero)
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Non-cryptographic xorshift64* generator
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u64,
}

impl XorShiftRng {
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut state = self.state;
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        self.state = state;
        state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl CubeRng for XorShiftRng {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}
