use std::time::{Duration, Instant};

/// A scoped timer.
///
/// # Examples
///
/// ```
/// use lib::Stopwatch;
///
/// let s = Stopwatch::start();
/// let elapsed = s.stop();
/// assert!(elapsed.as_nanos() < u128::MAX);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start measuring.
    #[inline]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop measuring, returning the time elapsed since [Stopwatch::start].
    #[inline]
    pub fn stop(self) -> Duration {
        Instant::now().duration_since(self.start)
    }
}
