/// Running/stopped flag standing in for a display-refresh-driven clock.
///
/// `start` and `stop` only flip the flag; no callbacks are scheduled.
#[derive(Debug, Clone, Default)]
pub struct TimelineClock {
    running: bool,
}

impl TimelineClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_is_stopped() {
        assert!(!TimelineClock::new().is_running());
    }

    #[test]
    fn start_then_stop() {
        let mut clock = TimelineClock::new();
        clock.start();
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn start_is_idempotent() {
        let mut clock = TimelineClock::new();
        clock.start();
        clock.start();
        assert!(clock.is_running());
    }
}
