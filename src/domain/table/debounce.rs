use std::time::{Duration, Instant};

/// Holds back a rapidly changing value until it has been stable for `delay`.
///
/// The clock is passed in by the caller, which keeps the debouncer free of
/// timers; the UI layer owns the actual sleep and calls [`Debouncer::poll`]
/// when [`Debouncer::deadline`] is reached.
#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    delay: Duration,
    pending: Option<(V, Instant)>,
}

impl<V> Debouncer<V> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new input value. Any earlier pending value is superseded and
    /// the delay restarts from `now`.
    pub fn push(&mut self, value: V, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Instant at which the pending value settles, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending value once `now` has reached its deadline.
    /// A settled value is handed out exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Returns the pending value immediately, skipping the rest of the delay.
    pub fn flush(&mut self) -> Option<V> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_held_until_delay_elapses() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("a", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("a"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn new_input_restarts_the_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("a", start);
        debouncer.push("an", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(500))
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("an"));
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        debouncer.push(1, start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn flush_emits_without_waiting() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_secs(5));

        debouncer.push("now", start);

        assert_eq!(debouncer.flush(), Some("now"));
        assert_eq!(debouncer.flush(), None);
    }
}
