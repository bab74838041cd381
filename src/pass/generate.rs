//! Round-robin password generation.

use std::io::{self, Write};

use zeroize::{Zeroize, Zeroizing};

use super::SecureBufWriter;
use super::class;
use super::config::{Config, Resolved};
use crate::rand::IndexSource;

/// Generate one password.
///
/// Characters are drawn in rounds: one per enabled class, in priority order,
/// until the target length is reached, then the last round is cut to fit.
///
/// Returns the empty string when no class is enabled or the length is not
/// positive. Both cases look the same to the caller; check the config (or
/// [`Resolved::is_empty_selection`]) first if the difference matters.
pub fn generate<R: IndexSource + ?Sized>(config: &Config, rng: &mut R) -> String {
    let resolved = config.resolve();
    let mut buf = Vec::with_capacity(resolved.length() + resolved.classes().len());
    fill(&resolved, rng, &mut buf);
    let pass = buf.iter().map(|&b| char::from(b)).collect();
    buf.zeroize();
    pass
}

/// Fill `buf` with one password's ASCII bytes. The buffer is cleared first;
/// the caller owns it and should zeroize between uses.
#[inline]
pub fn fill<R: IndexSource + ?Sized>(resolved: &Resolved, rng: &mut R, buf: &mut Vec<u8>) {
    buf.clear();
    if resolved.is_empty() {
        return;
    }

    let target = resolved.length();
    while buf.len() < target {
        for &class in resolved.classes() {
            buf.push(class::sample(class, rng));
        }
    }
    // Only the tail of the final round can overshoot.
    buf[target..].zeroize();
    buf.truncate(target);
}

/// Write `count` passwords to `out`, one per line.
///
/// Lines pass through a [`SecureBufWriter`], so nothing is left behind in the
/// staging buffer once they reach `out`.
pub fn write_batch<W: Write, R: IndexSource + ?Sized>(
    config: &Config,
    count: usize,
    out: W,
    rng: &mut R,
) -> io::Result<()> {
    let resolved = config.resolve();
    let mut out = SecureBufWriter::new(out);
    let mut buf = Vec::with_capacity(resolved.length() + resolved.classes().len() + 1);

    for _ in 0..count {
        fill(&resolved, rng, &mut buf);
        buf.push(b'\n');
        let res = out.write_all(&buf);
        buf.zeroize();
        res?;
    }
    out.flush()
}

/// Collect `count` passwords, one per line, for the clipboard. The string is
/// wiped when dropped.
pub fn generate_batch<R: IndexSource + ?Sized>(
    config: &Config,
    count: usize,
    rng: &mut R,
) -> Zeroizing<String> {
    let resolved = config.resolve();
    let mut buf = Vec::with_capacity(resolved.length() + resolved.classes().len());
    let mut lines = Zeroizing::new(String::with_capacity(count * (resolved.length() + 1)));

    for _ in 0..count {
        fill(&resolved, rng, &mut buf);
        lines.extend(buf.iter().map(|&b| char::from(b)));
        lines.push('\n');
        buf.zeroize();
    }
    lines
}
