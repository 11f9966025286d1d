use log::{Level, log_enabled, warn};
use std::time::{Duration, Instant};

/// Simple scoped timer for profiling critical sections.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("⏱️ start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("⏱️ end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Registers a warning when stepping falls behind real time, i.e. the wall
/// time spent integrating exceeds the simulated interval it covered.
pub fn warn_if_step_budget_exceeded(duration: Duration, simulated_s: f64) {
    if duration.as_secs_f64() > simulated_s && simulated_s > 0.0 {
        warn!(
            "Stepping fell behind real time: {:.2} ms spent on {:.2} ms of simulation",
            duration.as_secs_f64() * 1000.0,
            simulated_s * 1000.0
        );
    }
}
