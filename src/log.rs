//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros; without it they
//! expand to nothing.

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub use crate::{debug, warn};

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_tracing_syntax() {
        let rows = 3;
        crate::log::debug!(rows, "grid");
        crate::log::debug!(code = "LABEL_TOO_SMALL", "grid layout rejected");
        crate::log::warn!(value = ?rows, "query parameter ignored");
        assert_eq!(rows, 3);
    }
}
