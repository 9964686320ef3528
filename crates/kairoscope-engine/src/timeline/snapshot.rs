use chrono::{DateTime, Utc};

use super::tick::{Tick, TickSpec};

/// Immutable timeline state handed to presentation.
///
/// A snapshot is never edited after construction; a redraw replaces it with a
/// new one. Fields are private so renderers only get read access.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    center_time: DateTime<Utc>,
    ticks: Vec<Tick>,
}

impl Snapshot {
    pub fn new(center_time: DateTime<Utc>, ticks: Vec<Tick>) -> Self {
        Self { center_time, ticks }
    }

    /// Placeholder tick set centered on the current wall-clock time.
    pub fn placeholder() -> Self {
        Self::placeholder_at(Utc::now())
    }

    pub fn placeholder_at(center_time: DateTime<Utc>) -> Self {
        Self::new(center_time, TickSpec::placeholder().generate())
    }

    #[inline]
    pub fn center_time(&self) -> DateTime<Utc> {
        self.center_time
    }

    /// Ticks in left-to-right order.
    #[inline]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// The tick sitting on the present-moment anchor, if the set contains one.
    pub fn anchor_tick(&self) -> Option<&Tick> {
        self.ticks.iter().find(|t| t.is_anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_keeps_inputs() {
        let ticks = TickSpec::new(2, 10.0).generate();
        let snap = Snapshot::new(t0(), ticks.clone());
        assert_eq!(snap.center_time(), t0());
        assert_eq!(snap.ticks(), ticks.as_slice());
    }

    #[test]
    fn empty_tick_sequence_is_accepted() {
        let snap = Snapshot::new(t0(), Vec::new());
        assert!(snap.ticks().is_empty());
        assert!(snap.anchor_tick().is_none());
    }

    #[test]
    fn placeholder_at_uses_placeholder_ticks() {
        let snap = Snapshot::placeholder_at(t0());
        assert_eq!(snap.ticks().len(), 25);
        assert_eq!(snap.anchor_tick().map(|t| t.offset), Some(0.0));
    }

    #[test]
    fn placeholders_with_same_center_are_equal() {
        assert_eq!(Snapshot::placeholder_at(t0()), Snapshot::placeholder_at(t0()));
    }
}
