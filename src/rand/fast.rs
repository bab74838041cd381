//! Fast non-cryptographic generator mixed with a hardware counter.
//!
//! Good enough for throwaway passwords and bulk output. Use [`super::Secure`]
//! when the result guards anything real.

use zeroize::Zeroize;

use super::{IndexSource, hw, reduce};

// Odd 64-bit multipliers (golden ratio, SplitMix64, MurmurHash3 fmix64).
const MULTIPLIERS: [u64; 5] = [
    0x9e3779b97f4a7c15,
    0xbf58476d1ce4e5b9,
    0x94d049bb133111eb,
    0xff51afd7ed558ccd,
    0xc4ceb9fe1a85ec53,
];

pub struct Rand {
    state: u64,
}

impl Rand {
    pub fn new() -> Self {
        Self::with_state(hw::read())
    }

    fn with_state(state: u64) -> Self {
        Rand { state }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.step(hw::read())
    }

    /// One state transition with `ent` folded in, returning the finalized word.
    #[inline(always)]
    fn step(&mut self, ent: u64) -> u64 {
        let state = self.state;

        // Mix entropy into multiplier selection
        let mixed = state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        self.state = state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for Rand {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        reduce(n, || self.next_u64())
    }

    fn name(&self) -> &'static str {
        hw::COUNTER
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_deterministic_for_fixed_entropy() {
        let mut a = Rand::with_state(42);
        let mut b = Rand::with_state(42);
        for ent in [0u64, 1, 0xdead_beef, u64::MAX] {
            assert_eq!(a.step(ent), b.step(ent));
        }
    }

    #[test]
    fn step_advances_state() {
        let mut r = Rand::with_state(7);
        let first = r.step(0);
        let second = r.step(0);
        assert_ne!(first, second);
    }

    #[test]
    fn indices_cover_small_range() {
        let mut r = Rand::new();
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            seen[r.next_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
