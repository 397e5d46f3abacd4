//! Timing instrumentation for the input hot path.
//!
//! Pointer moves arrive at display rate, so dispatch and hit testing are
//! wrapped in [`profile_scope!`]. Scopes that exceed [`DISPATCH_BUDGET_MS`]
//! are logged as warnings; the `profiling` feature also traces every scope.
//!
//! ```toml
//! graphboard = { features = ["profiling"] }
//! ```

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

/// Budget for handling a single input event
pub const DISPATCH_BUDGET_MS: f64 = 1.0;

/// Time the enclosing scope against the dispatch budget
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DISPATCH_BUDGET_MS);
    };
    ($name:expr, $threshold_ms:expr) => {
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Logs the scope's duration on drop when it exceeds the threshold
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        if elapsed_ms <= self.threshold_ms {
            return;
        }
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Run `f` and return its result with the elapsed milliseconds
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
