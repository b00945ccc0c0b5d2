use std::time::{Duration, Instant};

use tracing::trace;

/// Per-iteration budget for 50 Hz pacing.
pub const FRAME_BUDGET: Duration = Duration::from_millis(20);

/// How long to sleep after an iteration that took `elapsed`.
///
/// `None` once the budget is used up; an overrun is never paid back on
/// later frames.
pub fn frame_delay(elapsed: Duration, budget: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|d| !d.is_zero())
}

/// Best-effort wall-clock throttle for the main loop.
pub struct FramePacer {
    budget: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(now: Instant) -> Self {
        Self::with_budget(now, FRAME_BUDGET)
    }

    pub fn with_budget(now: Instant, budget: Duration) -> Self {
        Self { budget, last: now }
    }

    /// Sleep owed at `now` for the iteration that began at the last mark.
    /// A clock reading earlier than the mark counts as no time elapsed.
    pub fn delay_at(&self, now: Instant) -> Option<Duration> {
        frame_delay(now.saturating_duration_since(self.last), self.budget)
    }

    /// Start timing the next iteration from `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }

    /// Sleep off the rest of the budget through `sleep`, then start timing
    /// the next iteration.
    pub fn pace(&mut self, sleep: impl FnOnce(Duration)) {
        if let Some(wait) = self.delay_at(Instant::now()) {
            trace!(ms = wait.as_millis() as u64, "sleeping");
            sleep(wait);
        }
        self.mark(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn sleeps_off_the_remainder() {
        assert_eq!(frame_delay(ms(5), FRAME_BUDGET), Some(ms(15)));
        assert_eq!(frame_delay(ms(0), FRAME_BUDGET), Some(ms(20)));
    }

    #[test]
    fn no_sleep_when_over_budget() {
        assert_eq!(frame_delay(ms(25), FRAME_BUDGET), None);
        assert_eq!(frame_delay(ms(20), FRAME_BUDGET), None);
        assert_eq!(frame_delay(Duration::MAX, FRAME_BUDGET), None);
    }

    #[test]
    fn pacer_measures_from_last_mark() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start);

        assert_eq!(pacer.delay_at(start + ms(5)), Some(ms(15)));
        assert_eq!(pacer.delay_at(start + ms(25)), None);

        pacer.mark(start + ms(25));
        assert_eq!(pacer.delay_at(start + ms(30)), Some(ms(15)));
    }

    #[test]
    fn clock_behind_mark_is_not_an_overflow() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(start);
        pacer.mark(start + ms(100));
        assert_eq!(pacer.delay_at(start), Some(FRAME_BUDGET));
    }

    #[test]
    fn pace_never_sleeps_past_budget() {
        let mut pacer = FramePacer::new(Instant::now());
        let mut slept = None;
        pacer.pace(|d| slept = Some(d));
        if let Some(d) = slept {
            assert!(d <= FRAME_BUDGET);
        }
    }
}
