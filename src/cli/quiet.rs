//! Global quiet mode state and tty checks for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, notices and prompts when set
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (someone can answer a prompt)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Check if stdout is a tty (escape codes are safe to print)
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Skip interactive prompts in quiet mode or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_always_skips_prompts() {
        set(true);
        assert!(enabled());
        assert!(skip_prompt());
        set(false);
        assert!(!enabled());
    }
}
