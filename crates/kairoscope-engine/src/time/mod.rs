//! Time subsystem.
//!
//! Holds the engine state the timeline view-model drives:
//! - `TimeScaleEngine`: elapsed time represented per point of screen distance
//! - `TimelineClock`: running/stopped flag for the (future) display-driven clock
//!
//! Neither engine performs any timing work yet; both are plain state holders.

mod clock;
mod scale;

pub use clock::TimelineClock;
pub use scale::{TimeScaleEngine, TimeScaleState};
