//! Screen models.
//!
//! Each screen exposes the content and lifecycle hooks a presentation layer
//! needs, without depending on any particular rendering backend.

mod auth_gate;
mod root;
mod timeline_shell;

pub use auth_gate::{AuthGate, SignInOption, SignInProvider};
pub use root::{Route, Screen};
pub use timeline_shell::{ShellFrame, TimelineShell};

/// Application title shown by every screen.
pub const APP_TITLE: &str = "Kairoscope";
