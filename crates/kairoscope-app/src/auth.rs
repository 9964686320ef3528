//! Authentication capability.
//!
//! A single-method [`AuthService`] trait with the concrete providers collected
//! in [`AuthProvider`]. Only the stub exists until real sign-in lands.

/// Authentication state of the current user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
}

impl AuthSession {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self { is_authenticated: true, user_id: Some(user_id.into()) }
    }
}

pub trait AuthService {
    /// Synchronous; never performs network I/O.
    fn current_session(&self) -> AuthSession;
}

/// Returns a fixed session.
#[derive(Debug, Clone)]
pub struct StubAuthService {
    session: AuthSession,
}

impl StubAuthService {
    pub fn new(is_authenticated: bool, user_id: Option<String>) -> Self {
        Self { session: AuthSession { is_authenticated, user_id } }
    }

    pub fn signed_out() -> Self {
        Self::new(false, None)
    }
}

impl AuthService for StubAuthService {
    fn current_session(&self) -> AuthSession {
        self.session.clone()
    }
}

/// Available authentication providers.
#[derive(Debug, Clone)]
pub enum AuthProvider {
    Stub(StubAuthService),
}

impl AuthService for AuthProvider {
    fn current_session(&self) -> AuthSession {
        match self {
            AuthProvider::Stub(stub) => stub.current_session(),
        }
    }
}

impl From<StubAuthService> for AuthProvider {
    fn from(stub: StubAuthService) -> Self {
        AuthProvider::Stub(stub)
    }
}
