//! High-Precision Timing
//!
//! Reads RDTSCP on x86_64 and CNTVCT_EL0 on AArch64 alongside the monotonic
//! clock, with fallback to `std::time::Instant` alone on other platforms.
//! Each measured loop is bracketed by exactly one `Timer::start` and one
//! `Timer::stop`; there are no per-iteration clock reads.

use std::time::Duration;

// ─── Inline cycle counter helpers ────────────────────────────────────────────

/// Read the CPU cycle/tick counter (platform-specific).
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP is available on all x86_64 CPUs since ~2006 and is
    // serializing: it waits for prior instructions to retire before reading
    // the cycle counter.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

/// Read the virtual counter timer on AArch64 (comparable to x86 TSC).
#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all AArch64 implementations
    // and increments monotonically at a fixed frequency.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether this platform provides real cycle counters.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

// ─── TimingSample ────────────────────────────────────────────────────────────

/// Elapsed time of one measured loop: monotonic wall time plus the raw
/// cycle/tick delta (0 on platforms without a cycle counter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Monotonic elapsed time.
    pub elapsed: Duration,
    /// Elapsed cycle count.
    pub cycles: u64,
}

impl TimingSample {
    /// Elapsed time in whole nanoseconds, saturating at `u64::MAX`.
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

// ─── Instant ─────────────────────────────────────────────────────────────────

/// High-precision instant pairing the monotonic clock with the cycle counter.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    instant: std::time::Instant,
    tsc: u64,
}

impl Instant {
    /// Capture the current instant.
    #[inline(always)]
    pub fn now() -> Self {
        Self {
            instant: std::time::Instant::now(),
            tsc: read_cycles(),
        }
    }

    /// Monotonic time elapsed since this instant.
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }

    /// Raw cycle/tick count at capture (non-zero on x86_64 and aarch64).
    #[inline(always)]
    pub fn cycles(&self) -> u64 {
        self.tsc
    }
}

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer bracketing one measured loop body.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed sample.
    #[inline(always)]
    pub fn stop(&self) -> TimingSample {
        let elapsed = self.start.elapsed();
        let cycles = read_cycles().saturating_sub(self.start.cycles());
        TimingSample { elapsed, cycles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_elapsed_tracks_sleep() {
        let start = Instant::now();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(5));
        assert!(elapsed < Duration::from_millis(500));
    }

    #[test]
    fn timer_reports_nonzero_sample() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let sample = timer.stop();

        assert!(sample.as_nanos() >= 5_000_000);
        if HAS_CYCLE_COUNTER {
            assert!(sample.cycles > 0);
        }
    }

    #[test]
    fn cycle_counter_is_monotonic() {
        if HAS_CYCLE_COUNTER {
            let a = Instant::now().cycles();
            let b = Instant::now().cycles();
            assert!(b >= a);
        }
    }
}
