use std::time::Duration;
use web_time::Instant;

/// Single-shot, resettable quiescence timer over a stream of values.
///
/// `submit` replaces the pending value and pushes the deadline out; `poll`
/// hands the value over once nothing new arrived for `window`. Superseded
/// values are dropped, never queued.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replaces any pending value and resets the deadline to `now + window`.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Emits the pending value if its deadline has passed. Emits at most once per burst.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Time left until the pending value is due (zero if already due).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
