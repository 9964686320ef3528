use std::sync::Arc;

use kairoscope_engine::time::{TimeScaleEngine, TimelineClock};
use kairoscope_engine::timeline::Snapshot;

use crate::environment::TimelineFactory;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockState {
    Stopped,
    Running,
}

/// Outcome of a lifecycle call on [`TimelineViewModel`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    /// `Stopped -> Running`; a snapshot was published.
    Started,
    /// `Running -> Stopped`; the published snapshot is untouched.
    Stopped,
    /// Already in the requested state; nothing happened.
    Ignored,
}

/// Coordinates timeline engine state and publishes snapshots for rendering.
///
/// Observers poll [`revision`](Self::revision): it increases every time a
/// snapshot is published, even when the published value is the same one.
#[derive(Debug)]
pub struct TimelineViewModel {
    state: ClockState,
    clock: TimelineClock,
    time_scale: TimeScaleEngine,
    placeholder: Arc<Snapshot>,
    snapshot: Arc<Snapshot>,
    revision: u64,
}

impl TimelineViewModel {
    pub fn new(clock: TimelineClock, time_scale: TimeScaleEngine) -> Self {
        Self::with_placeholder(clock, time_scale, Snapshot::placeholder())
    }

    /// Like [`new`](Self::new) with an explicit initial snapshot.
    pub fn with_placeholder(
        clock: TimelineClock,
        time_scale: TimeScaleEngine,
        placeholder: Snapshot,
    ) -> Self {
        let placeholder = Arc::new(placeholder);
        Self {
            state: ClockState::Stopped,
            clock,
            time_scale,
            snapshot: Arc::clone(&placeholder),
            placeholder,
            revision: 0,
        }
    }

    pub fn from_factory(factory: &TimelineFactory) -> Self {
        Self::new((factory.make_timeline_clock)(), (factory.make_time_scale_engine)())
    }

    pub fn start(&mut self) -> Transition {
        if self.state == ClockState::Running {
            return Transition::Ignored;
        }

        self.clock.start();
        self.state = ClockState::Running;
        // No scale integration yet: the placeholder is republished as-is.
        self.publish(Arc::clone(&self.placeholder));

        log::debug!("timeline started (revision {})", self.revision);
        Transition::Started
    }

    pub fn stop(&mut self) -> Transition {
        if self.state == ClockState::Stopped {
            return Transition::Ignored;
        }

        self.clock.stop();
        self.state = ClockState::Stopped;

        log::debug!("timeline stopped (revision {})", self.revision);
        Transition::Stopped
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Currently published snapshot.
    #[inline]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn clock(&self) -> &TimelineClock {
        &self.clock
    }

    #[inline]
    pub fn time_scale(&self) -> &TimeScaleEngine {
        &self.time_scale
    }

    fn publish(&mut self, snapshot: Arc<Snapshot>) {
        self.snapshot = snapshot;
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for TimelineViewModel {
    fn default() -> Self {
        Self::from_factory(&TimelineFactory::default())
    }
}
