//! Optional logging shims.
//!
//! The engine logs only warning conditions (NaN clamping, non-positive
//! half-lives). When the `log` feature is disabled the macro expands to
//! nothing, keeping the core free of the dependency.

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}
