//! Free-running CPU counter folded into every step of the fast generator.

/// What [`read`] samples on this target.
pub const COUNTER: &str = if cfg!(target_arch = "x86_64") {
    "rdtsc"
} else if cfg!(target_arch = "aarch64") {
    "cntvct"
} else {
    "thread rng"
};

#[inline(always)]
pub fn read() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: rdtsc is available on every x86_64 CPU.
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        // SAFETY: cntvct_el0 is readable from EL0 on supported OSes.
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks) };
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        ::rand::random::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_moves() {
        let first = read();
        let later = (0..1_000).map(|_| read()).find(|&t| t != first);
        assert!(later.is_some(), "{COUNTER} never changed");
    }
}
