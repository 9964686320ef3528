use super::APP_TITLE;

const SUBTITLE: &str = "Sign in to sync your timeline across devices.";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SignInProvider {
    Apple,
    Google,
}

impl SignInProvider {
    pub fn name(self) -> &'static str {
        match self {
            SignInProvider::Apple => "Apple",
            SignInProvider::Google => "Google",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOption {
    pub provider: SignInProvider,
    pub label: String,
    /// The first option is the prominent one.
    pub prominent: bool,
    pub enabled: bool,
}

/// Sign-in prompt shown when authentication gates the timeline.
#[derive(Debug, Clone, Default)]
pub struct AuthGate;

impl AuthGate {
    pub fn title(&self) -> &'static str {
        APP_TITLE
    }

    pub fn subtitle(&self) -> &'static str {
        SUBTITLE
    }

    /// Sign-in buttons. All disabled until a real provider is wired into
    /// [`AuthProvider`](crate::auth::AuthProvider).
    pub fn sign_in_options(&self) -> Vec<SignInOption> {
        [SignInProvider::Apple, SignInProvider::Google]
            .into_iter()
            .enumerate()
            .map(|(i, provider)| SignInOption {
                provider,
                label: format!("Sign in with {}", provider.name()),
                prominent: i == 0,
                enabled: false,
            })
            .collect()
    }
}
