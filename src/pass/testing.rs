//! Scripted index source for deterministic tests.

use crate::rand::IndexSource;

/// Replays a fixed list of indices, cycling when exhausted, and records the
/// range of every draw.
pub struct Scripted {
    script: Vec<usize>,
    pos: usize,
    draws: Vec<usize>,
}

impl Scripted {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        let script: Vec<usize> = script.into_iter().collect();
        assert!(!script.is_empty(), "script needs at least one index");
        Scripted {
            script,
            pos: 0,
            draws: Vec::new(),
        }
    }

    pub fn draws(&self) -> &[usize] {
        &self.draws
    }
}

impl IndexSource for Scripted {
    fn next_index(&mut self, n: usize) -> usize {
        let idx = self.script[self.pos % self.script.len()];
        assert!(idx < n, "scripted index {idx} out of range for {n}");
        self.pos += 1;
        self.draws.push(n);
        idx
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
