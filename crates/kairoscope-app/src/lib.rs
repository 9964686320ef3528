//! Kairoscope application shell.
//!
//! Layers, bottom-up:
//! - `config`: bundled configuration resource and its load errors
//! - `auth`: authentication capability and providers
//! - `environment`: explicit dependency context passed to constructors
//! - `view_model`: timeline lifecycle state machine publishing snapshots
//! - `screens`: root routing, auth gate, timeline shell
//! - `text_strip`: terminal rendering used by the `kairoscope` binary

pub mod auth;
pub mod config;
pub mod environment;
pub mod screens;
pub mod text_strip;
pub mod view_model;

pub use auth::{AuthProvider, AuthService, AuthSession, StubAuthService};
pub use config::{AppConfiguration, Bundle, DecodeError, LoadError};
pub use environment::{AppEnvironment, TimelineFactory};
pub use screens::{AuthGate, Route, Screen, TimelineShell};
pub use view_model::{ClockState, TimelineViewModel, Transition};
