//! Concurrency configuration and the shared search clock.
//!
//! The root search fans out one rayon task per root move. Tasks share no
//! mutable search state except the clock, which a task freezes when it finds
//! the time budget exhausted at one of its checkpoints.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Search execution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadingModel {
    /// Root moves searched one after another on the calling thread.
    SingleThreaded,
    /// One parallel task per root move.
    RootParallel,
}

/// Threading configuration owned by the engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadingConfig {
    pub model: ThreadingModel,
    /// Worker count for a dedicated pool; `0` uses the global rayon pool.
    pub requested_threads: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self {
            model: ThreadingModel::RootParallel,
            requested_threads: 0,
        }
    }
}

impl ThreadingConfig {
    #[inline]
    pub fn single_threaded() -> Self {
        Self {
            model: ThreadingModel::SingleThreaded,
            requested_threads: 1,
        }
    }

    /// `None` when the global pool should be used.
    #[inline]
    pub fn dedicated_threads(self) -> Option<usize> {
        match self.model {
            ThreadingModel::RootParallel if self.requested_threads > 0 => Some(self.requested_threads),
            _ => None,
        }
    }
}

/// Wall clock for one root search with an optional soft budget.
#[derive(Debug)]
pub struct SearchClock {
    started_at: Instant,
    budget: Option<Duration>,
    stopped_at: Mutex<Option<Duration>>,
}

impl SearchClock {
    /// A zero budget means unbounded, same as `None`.
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            started_at: Instant::now(),
            budget: budget.filter(|b| !b.is_zero()),
            stopped_at: Mutex::new(None),
        }
    }

    #[inline]
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Elapsed time, frozen once `stop` has been called.
    pub fn elapsed(&self) -> Duration {
        if let Ok(guard) = self.stopped_at.lock() {
            if let Some(frozen) = *guard {
                return frozen;
            }
        }
        self.started_at.elapsed()
    }

    /// Freeze the clock. Later calls keep the first frozen value.
    pub fn stop(&self) {
        if let Ok(mut guard) = self.stopped_at.lock() {
            if guard.is_none() {
                *guard = Some(self.started_at.elapsed());
            }
        }
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped_at.lock().map(|g| g.is_some()).unwrap_or(false)
    }

    /// True when a budget is set and elapsed time exceeds it.
    #[inline]
    pub fn budget_exceeded(&self) -> bool {
        match self.budget {
            Some(budget) => self.elapsed() > budget,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::{SearchClock, ThreadingConfig, ThreadingModel};

    #[test]
    fn threading_config_picks_pool() {
        assert_eq!(ThreadingConfig::default().dedicated_threads(), None);
        let cfg = ThreadingConfig {
            model: ThreadingModel::RootParallel,
            requested_threads: 3,
        };
        assert_eq!(cfg.dedicated_threads(), Some(3));
        assert_eq!(ThreadingConfig::single_threaded().dedicated_threads(), None);
    }

    #[test]
    fn zero_budget_is_unbounded() {
        let clock = SearchClock::start(Some(Duration::ZERO));
        assert_eq!(clock.budget(), None);
        thread::sleep(Duration::from_millis(2));
        assert!(!clock.budget_exceeded());
    }

    #[test]
    fn tiny_budget_trips() {
        let clock = SearchClock::start(Some(Duration::from_nanos(1)));
        thread::sleep(Duration::from_millis(2));
        assert!(clock.budget_exceeded());
    }

    #[test]
    fn stop_freezes_elapsed() {
        let clock = SearchClock::start(None);
        assert!(!clock.is_stopped());
        clock.stop();
        let frozen = clock.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert!(clock.is_stopped());
        assert_eq!(clock.elapsed(), frozen);
        clock.stop();
        assert_eq!(clock.elapsed(), frozen);
    }
}
