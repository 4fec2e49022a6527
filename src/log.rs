//! Conditional logging macros.
//!
//! With the `tracing` feature enabled, `debug!` is `tracing::debug!`.
//! Without it, the macro expands to nothing and costs nothing at runtime.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
