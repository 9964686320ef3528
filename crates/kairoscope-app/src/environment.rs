use kairoscope_engine::time::{TimeScaleEngine, TimelineClock};

use crate::auth::{AuthProvider, StubAuthService};
use crate::config::AppConfiguration;

/// Constructors for timeline engines.
///
/// Plain function pointers so tests can swap in pre-configured engines.
#[derive(Debug, Clone, Copy)]
pub struct TimelineFactory {
    pub make_time_scale_engine: fn() -> TimeScaleEngine,
    pub make_timeline_clock: fn() -> TimelineClock,
}

impl Default for TimelineFactory {
    fn default() -> Self {
        Self {
            make_time_scale_engine: TimeScaleEngine::new,
            make_timeline_clock: TimelineClock::new,
        }
    }
}

/// Dependencies handed explicitly to screens and view-models.
#[derive(Debug, Clone)]
pub struct AppEnvironment {
    pub configuration: AppConfiguration,
    pub auth: AuthProvider,
    pub timeline_factory: TimelineFactory,
}

impl AppEnvironment {
    pub fn new(
        configuration: AppConfiguration,
        auth: impl Into<AuthProvider>,
        timeline_factory: TimelineFactory,
    ) -> Self {
        Self { configuration, auth: auth.into(), timeline_factory }
    }

    /// Standard runtime environment: signed-out stub auth, default engines.
    pub fn live(configuration: AppConfiguration) -> Self {
        Self::new(configuration, StubAuthService::signed_out(), TimelineFactory::default())
    }

    /// Environment for previews and tests.
    pub fn preview(is_auth_enabled: bool) -> Self {
        Self::live(AppConfiguration::mock_with(is_auth_enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthService;

    #[test]
    fn live_environment_is_signed_out() {
        let env = AppEnvironment::live(AppConfiguration::mock());
        assert!(!env.auth.current_session().is_authenticated);
    }

    #[test]
    fn preview_carries_auth_flag() {
        assert!(AppEnvironment::preview(true).configuration.is_auth_enabled);
        assert!(!AppEnvironment::preview(false).configuration.is_auth_enabled);
    }

    #[test]
    fn default_factory_builds_fresh_engines() {
        let factory = TimelineFactory::default();
        assert!(!(factory.make_timeline_clock)().is_running());
        assert_eq!((factory.make_time_scale_engine)().state().units_per_point, 1.0);
    }
}
