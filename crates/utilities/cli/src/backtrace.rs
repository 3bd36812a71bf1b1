//! Backtrace environment setup.

const BACKTRACE_VAR: &str = "RUST_BACKTRACE";

/// Enables panic backtraces for the process.
#[derive(Debug, Clone, Copy)]
pub struct Backtracing;

impl Backtracing {
    /// Sets `RUST_BACKTRACE=1` unless a value is already present.
    ///
    /// Must be called at startup, before any other thread exists.
    pub fn enable() {
        if std::env::var_os(BACKTRACE_VAR).is_some() {
            return;
        }
        // SAFETY: called from `main` before the binaries spawn threads, so nothing
        // else can read or write the environment concurrently.
        unsafe { std::env::set_var(BACKTRACE_VAR, "1") };
    }
}
