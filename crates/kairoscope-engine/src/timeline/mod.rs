//! Timeline model.
//!
//! Responsibilities:
//! - generate the ordered tick sequence around the present-moment anchor (`tick`)
//! - wrap a center timestamp and ticks into an immutable `Snapshot` (`snapshot`)
//! - place ticks, labels and the anchor inside a canvas (`layout`)
//!
//! Everything here is a pure function of its inputs.

mod layout;
mod snapshot;
mod tick;

pub use layout::{
    Emphasis, LabelPlacement, Point, Segment, ShellMetrics, TickLayout, TickMark, ANCHOR_LABEL,
};
pub use snapshot::Snapshot;
pub use tick::{Tick, TickKind, TickSpec, PLACEHOLDER_HALF_WIDTH, PLACEHOLDER_SPACING, UNIT_SUFFIX};
