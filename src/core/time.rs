//! Host-supplied logical time.
//!
//! The engine never reads a wall clock. Hosts pass the current time into
//! every entry point that can schedule or fire a resolution: the browser
//! passes `performance.now()`, tests and headless players pass whatever
//! counter they like.

use serde::{Deserialize, Serialize};

/// A timestamp in milliseconds on the host's clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// The origin of the host clock.
    pub const ZERO: Millis = Millis(0);

    /// Create a timestamp.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Timestamp `delay_ms` after this one. Saturates instead of wrapping.
    #[must_use]
    pub const fn after(self, delay_ms: u64) -> Self {
        Self(self.0.saturating_add(delay_ms))
    }

    /// Convert a browser `performance.now()` reading.
    ///
    /// Negative and NaN readings clamp to zero.
    #[must_use]
    pub fn from_f64(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            Self(ms as u64)
        } else {
            Self::ZERO
        }
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
