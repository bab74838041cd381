//! OS-seeded CSPRNG.

use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

use super::IndexSource;

pub(super) const NAME: &str = "os-seeded chacha";

/// `StdRng` seeded from the operating system. Use this for real secrets.
pub struct Secure(StdRng);

impl Secure {
    pub fn new() -> Self {
        Secure(StdRng::from_os_rng())
    }
}

impl Default for Secure {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for Secure {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
