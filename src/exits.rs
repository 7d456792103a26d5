//! Exit handling: signal handlers and process hardening.

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(130) }
}

/// Install signal handlers and disable core dumps so generated passwords
/// never land in a dump file. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}
