//! Kairoscope engine crate.
//!
//! This crate owns the timeline primitives used by the application shell:
//! time-scale and clock engines, the tick model, snapshots, and tick layout.

pub mod logging;
pub mod time;
pub mod timeline;
