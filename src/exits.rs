//! Process setup: terminal restore on every exit path, no core dumps.

use crate::cli::quiet;

/// Put the tty back into cooked mode with echo, straight through termios so
/// it works from a signal or atexit context.
fn cooked_mode() {
    // SAFETY: termios is plain data; tcgetattr fills it before it is read.
    unsafe {
        let mut t: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut t) != 0 {
            return;
        }
        t.c_oflag |= libc::OPOST | libc::ONLCR;
        t.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
        libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &t);
    }
}

extern "C" fn on_exit() {
    cooked_mode();
    if quiet::stdout_is_tty() {
        let reset = b"\x1b[0m\x1b[?25h";
        // SAFETY: write(2) on a static buffer.
        unsafe { libc::write(libc::STDOUT_FILENO, reset.as_ptr().cast(), reset.len()) };
    }
}

/// Route SIGINT/SIGTERM/SIGHUP through exit(3) so `on_exit` runs.
extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Call first thing in `main`.
pub fn install() {
    cooked_mode();
    // SAFETY: both handlers are extern "C" fns with the signatures libc expects.
    unsafe {
        libc::atexit(on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal as *const () as libc::sighandler_t);
        }
    }
    no_core_dumps();
}

/// Passwords live in this process's memory; keep them out of core files.
#[cfg(target_os = "linux")]
fn no_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn no_core_dumps() {}
