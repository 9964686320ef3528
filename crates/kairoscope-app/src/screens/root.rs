use crate::auth::{AuthService, AuthSession};
use crate::config::AppConfiguration;
use crate::environment::AppEnvironment;

use super::{AuthGate, TimelineShell};

/// Which screen the root presents.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Route {
    AuthGate,
    TimelineShell,
}

impl Route {
    /// The gate is shown only when auth is enabled and nobody is signed in.
    pub fn resolve(configuration: &AppConfiguration, session: &AuthSession) -> Self {
        if configuration.is_auth_enabled && !session.is_authenticated {
            Route::AuthGate
        } else {
            Route::TimelineShell
        }
    }
}

/// Instantiated root screen.
#[derive(Debug)]
pub enum Screen {
    AuthGate(AuthGate),
    TimelineShell(TimelineShell),
}

impl Screen {
    pub fn for_environment(environment: &AppEnvironment) -> Self {
        let session = environment.auth.current_session();
        let route = Route::resolve(&environment.configuration, &session);
        log::debug!(
            "root route {:?} (auth_enabled={}, authenticated={})",
            route,
            environment.configuration.is_auth_enabled,
            session.is_authenticated,
        );

        match route {
            Route::AuthGate => Screen::AuthGate(AuthGate),
            Route::TimelineShell => Screen::TimelineShell(TimelineShell::new(environment)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::AuthGate(_) => Route::AuthGate,
            Screen::TimelineShell(_) => Route::TimelineShell,
        }
    }
}
