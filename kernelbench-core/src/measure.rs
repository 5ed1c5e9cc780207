//! Wall-Clock Timing
//!
//! The runner reads time through the [`Clock`] trait so the same timing code
//! works natively (monotonic `std::time::Instant`) and in the browser
//! (`performance.now()`), and so tests can drive it with a scripted clock.

/// Millisecond time source
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> f64;
}

/// `std::time::Instant`-backed clock
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    /// Clock whose origin is now
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Running measurement against a borrowed clock
pub struct Stopwatch<'c, C: Clock + ?Sized> {
    clock: &'c C,
    start_ms: f64,
}

impl<'c, C: Clock + ?Sized> Stopwatch<'c, C> {
    /// Start measuring now
    #[inline(always)]
    pub fn start(clock: &'c C) -> Self {
        Self {
            start_ms: clock.now_ms(),
            clock,
        }
    }

    /// Milliseconds since `start`, clamped at zero for clocks that step backwards
    #[inline(always)]
    pub fn elapsed_ms(&self) -> f64 {
        (self.clock.now_ms() - self.start_ms).max(0.0)
    }
}

/// Round to 2 decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Set CPU affinity to pin the current thread to a specific core
///
/// Keeps reference and accelerated runs on the same core so their timings
/// are comparable.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    // SAFETY: cpu_set_t is plain data; zeroed is a valid empty set, and the
    // pointer handed to sched_setaffinity lives for the duration of the call.
    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// CPU pinning is a no-op off Linux
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}
