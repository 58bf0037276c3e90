//! Exit handling: signal handlers and cleanup.

use crate::rand;

/// Restore cooked terminal modes via termios, independent of any
/// higher-level terminal state.
pub fn reset_terminal() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on every exit path.
extern "C" fn cleanup_on_exit() {
    reset_terminal();
    unsafe {
        // Restore colors and cursor, but only when stdout is a tty.
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                b"\x1b[0m\x1b[?25h\r\n".as_ptr() as *const libc::c_void,
                11,
            );
        }
    }
    rand::zeroize_state();
}

/// SIGINT/SIGTERM/SIGHUP: exit cleanly, atexit does the cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: zero the entropy pool, then re-raise with the
/// default handler so the crash still produces a proper report.
extern "C" fn crash_handler(sig: libc::c_int) {
    unsafe {
        rand::emergency_zero();
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}
