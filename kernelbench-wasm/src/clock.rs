//! Host time source
//!
//! In the browser `performance.now()` gives sub-millisecond resolution.
//! Workers and Node have no `window`, so they fall back to `Date.now()`.
//! Native builds (tests, tooling) use the monotonic clock from core.

use kernelbench_core::Clock;

/// `performance.now()` when a window exists, `Date.now()` otherwise
#[cfg(target_arch = "wasm32")]
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// Best clock available on the current target
#[cfg(target_arch = "wasm32")]
pub fn host_clock() -> Box<dyn Clock> {
    Box::new(PerformanceClock::new())
}

/// Best clock available on the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn host_clock() -> Box<dyn Clock> {
    Box::new(kernelbench_core::MonotonicClock::new())
}
