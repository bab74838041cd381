//! Random index sources.
//!
//! Everything that samples characters goes through [`IndexSource`], so the
//! fast hardware-mixed generator and the OS-seeded CSPRNG are interchangeable
//! without touching the registry or the generator.

mod fast;
mod hw;
mod secure;

pub use fast::Rand;
pub use secure::Secure;

/// Provider of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an integer in `[0, n)`. `n` must be non-zero.
    fn next_index(&mut self, n: usize) -> usize;

    /// Short human-readable name for status lines.
    fn name(&self) -> &'static str;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Runtime-selected source.
pub enum Source {
    Fast(Rand),
    Secure(Secure),
}

impl Source {
    /// `secure` picks the OS-seeded CSPRNG, otherwise the fast generator.
    pub fn new(secure: bool) -> Self {
        if secure {
            Source::Secure(Secure::new())
        } else {
            Source::Fast(Rand::new())
        }
    }
}

impl IndexSource for Source {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        match self {
            Source::Fast(r) => r.next_index(n),
            Source::Secure(r) => r.next_index(n),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Source::Fast(r) => r.name(),
            Source::Secure(r) => r.name(),
        }
    }
}

/// Name shown in menus for a given source choice, without building one.
pub fn source_name(secure: bool) -> &'static str {
    if secure { secure::NAME } else { hw::COUNTER }
}

/// Map raw 64-bit words onto `[0, n)` without modulo bias.
///
/// Words at or above the largest multiple of `n` are rejected and redrawn.
#[inline]
pub(crate) fn reduce(n: usize, mut next: impl FnMut() -> u64) -> usize {
    debug_assert!(n > 0, "index range must be non-empty");
    let n = n as u64;
    let limit = u64::MAX - u64::MAX % n;
    loop {
        let word = next();
        if word < limit {
            return (word % n) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_stays_in_range() {
        let mut words = [0u64, 5, 9, 10, 11, 99].into_iter();
        for _ in 0..6 {
            assert!(reduce(10, || words.next().unwrap_or(0)) < 10);
        }
    }

    #[test]
    fn reduce_rejects_the_biased_tail() {
        // u64::MAX % 3 == 0, so the limit is u64::MAX and u64::MAX itself is rejected.
        let mut words = [u64::MAX, 7].into_iter();
        assert_eq!(reduce(3, || words.next().unwrap_or(0)), 1);
    }

    #[test]
    fn reduce_of_one_is_zero() {
        assert_eq!(reduce(1, || 12345), 0);
    }

    #[test]
    fn source_switches_provider() {
        assert!(matches!(Source::new(true), Source::Secure(_)));
        assert!(matches!(Source::new(false), Source::Fast(_)));
        assert_eq!(Source::new(true).name(), source_name(true));
        assert_eq!(Source::new(false).name(), source_name(false));
    }

    #[test]
    fn both_providers_stay_in_range() {
        for secure in [false, true] {
            let mut src = Source::new(secure);
            for n in 1..=64 {
                for _ in 0..32 {
                    assert!(src.next_index(n) < n);
                }
            }
        }
    }
}
