use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

/// Resource name of the bundled configuration.
pub const CONFIGURATION_RESOURCE: &str = "AppConfiguration";
pub const CONFIGURATION_EXTENSION: &str = "json";

/// Base URL used when no configuration could be loaded.
pub const DEFAULT_API_BASE_URL: &str = "https://api.dev.kairoscope.app";

// ── Bundle ────────────────────────────────────────────────────────────────

/// Directory of read-only resources shipped with the application.
#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of `name.ext` if it exists as a regular file.
    pub fn resource_path(&self, name: &str, ext: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{name}.{ext}"));
        path.is_file().then_some(path)
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

/// Why the contents of a configuration resource were rejected.
#[derive(Debug)]
pub enum DecodeError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidUrl { value: String, source: url::ParseError },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "read failed: {e}"),
            DecodeError::Json(e) => write!(f, "invalid contents: {e}"),
            DecodeError::InvalidUrl { value, source } => {
                write!(f, "apiBaseURL must be a valid URL string (got {value:?}: {source})")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            DecodeError::Json(e) => Some(e),
            DecodeError::InvalidUrl { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(e)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e)
    }
}

/// Configuration load failure.
#[derive(Debug)]
pub enum LoadError {
    /// The resource is not present in the bundle; `path` is where it was expected.
    ResourceMissing { path: PathBuf },
    DecodeFailed(DecodeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ResourceMissing { path } => {
                write!(f, "{} missing from bundle", path.display())
            }
            LoadError::DecodeFailed(e) => {
                write!(
                    f,
                    "failed to decode {CONFIGURATION_RESOURCE}.{CONFIGURATION_EXTENSION}: {e}"
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::ResourceMissing { .. } => None,
            LoadError::DecodeFailed(e) => Some(e),
        }
    }
}

// ── AppConfiguration ──────────────────────────────────────────────────────

/// Configuration values loaded at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfiguration {
    /// Whether authentication gates the timeline.
    pub is_auth_enabled: bool,
    /// Base URL for backend API requests.
    pub api_base_url: Url,
}

/// On-disk shape; `apiBaseURL` is validated after decoding.
#[derive(Deserialize)]
struct RawConfiguration {
    #[serde(rename = "isAuthEnabled")]
    is_auth_enabled: bool,
    #[serde(rename = "apiBaseURL")]
    api_base_url: String,
}

impl AppConfiguration {
    pub fn new(is_auth_enabled: bool, api_base_url: Url) -> Self {
        Self { is_auth_enabled, api_base_url }
    }

    /// Default configuration: auth disabled, development base URL.
    pub fn mock() -> Self {
        Self::mock_with(false)
    }

    pub fn mock_with(is_auth_enabled: bool) -> Self {
        Self::new(is_auth_enabled, default_api_base_url())
    }

    /// Decodes a configuration from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let raw: RawConfiguration = serde_json::from_slice(bytes)?;
        let api_base_url = Url::parse(&raw.api_base_url).map_err(|source| DecodeError::InvalidUrl {
            value: raw.api_base_url.clone(),
            source,
        })?;
        Ok(Self::new(raw.is_auth_enabled, api_base_url))
    }

    /// Loads `AppConfiguration.json` from `bundle`.
    pub fn load(bundle: &Bundle) -> Result<Self, LoadError> {
        let path = bundle
            .resource_path(CONFIGURATION_RESOURCE, CONFIGURATION_EXTENSION)
            .ok_or_else(|| LoadError::ResourceMissing {
                path: bundle
                    .root()
                    .join(format!("{CONFIGURATION_RESOURCE}.{CONFIGURATION_EXTENSION}")),
            })?;

        let bytes = std::fs::read(&path).map_err(|e| LoadError::DecodeFailed(e.into()))?;
        Self::from_json_slice(&bytes).map_err(LoadError::DecodeFailed)
    }

    /// Loads from `bundle`, substituting [`mock`](Self::mock) on any failure.
    pub fn load_or_mock(bundle: &Bundle) -> Self {
        match Self::load(bundle) {
            Ok(config) => {
                log::debug!("loaded configuration: auth_enabled={}", config.is_auth_enabled);
                config
            }
            Err(err) => {
                log::error!("failed to load configuration: {err}");
                Self::mock()
            }
        }
    }
}

impl Default for AppConfiguration {
    fn default() -> Self {
        Self::mock()
    }
}

fn default_api_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("DEFAULT_API_BASE_URL is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_with(contents: &str) -> (tempfile::TempDir, Bundle) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AppConfiguration.json"), contents).unwrap();
        let bundle = Bundle::new(dir.path());
        (dir, bundle)
    }

    // ── decoding ──────────────────────────────────────────────────────────

    #[test]
    fn decodes_valid_json() {
        let cfg = AppConfiguration::from_json_slice(
            br#"{ "isAuthEnabled": true, "apiBaseURL": "https://api.example.com/v1" }"#,
        )
        .unwrap();
        assert!(cfg.is_auth_enabled);
        assert_eq!(cfg.api_base_url.as_str(), "https://api.example.com/v1");
    }

    #[test]
    fn rejects_missing_field() {
        let err = AppConfiguration::from_json_slice(br#"{ "isAuthEnabled": true }"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_wrong_type() {
        let err = AppConfiguration::from_json_slice(
            br#"{ "isAuthEnabled": "yes", "apiBaseURL": "https://a.b" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = AppConfiguration::from_json_slice(
            br#"{ "isAuthEnabled": false, "apiBaseURL": "not a url" }"#,
        )
        .unwrap_err();
        match err {
            DecodeError::InvalidUrl { value, .. } => assert_eq!(value, "not a url"),
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn load_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfiguration::load(&Bundle::new(dir.path())).unwrap_err();
        match err {
            LoadError::ResourceMissing { path } => {
                assert_eq!(path, dir.path().join("AppConfiguration.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_malformed_resource_is_decode_failure() {
        let (_dir, bundle) = bundle_with("{ not json");
        let err = AppConfiguration::load(&bundle).unwrap_err();
        assert!(matches!(err, LoadError::DecodeFailed(DecodeError::Json(_))));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_valid_resource() {
        let (_dir, bundle) =
            bundle_with(r#"{ "isAuthEnabled": true, "apiBaseURL": "https://api.kairoscope.app" }"#);
        let cfg = AppConfiguration::load(&bundle).unwrap();
        assert!(cfg.is_auth_enabled);
        assert_eq!(cfg.api_base_url.host_str(), Some("api.kairoscope.app"));
    }

    #[test]
    fn directory_named_like_resource_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("AppConfiguration.json")).unwrap();
        let err = AppConfiguration::load(&Bundle::new(dir.path())).unwrap_err();
        assert!(matches!(err, LoadError::ResourceMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_resource_is_io_decode_failure() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, bundle) =
            bundle_with(r#"{ "isAuthEnabled": false, "apiBaseURL": "https://a.b" }"#);
        let path = dir.path().join("AppConfiguration.json");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users (root) bypass file modes.
        if std::fs::read(&path).is_ok() {
            return;
        }

        let err = AppConfiguration::load(&bundle).unwrap_err();
        assert!(matches!(err, LoadError::DecodeFailed(DecodeError::Io(_))));
        assert_eq!(AppConfiguration::load_or_mock(&bundle), AppConfiguration::mock());
    }

    // ── fallback ──────────────────────────────────────────────────────────

    #[test]
    fn missing_resource_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfiguration::load_or_mock(&Bundle::new(dir.path()));
        assert_eq!(cfg, AppConfiguration::mock());
        assert!(!cfg.is_auth_enabled);
        assert_eq!(cfg.api_base_url.as_str(), "https://api.dev.kairoscope.app/");
    }

    #[test]
    fn malformed_resource_falls_back_to_default() {
        let (_dir, bundle) = bundle_with(r#"{ "isAuthEnabled": 1 }"#);
        assert_eq!(AppConfiguration::load_or_mock(&bundle), AppConfiguration::default());
    }

    #[test]
    fn load_error_messages_are_distinguishable() {
        let missing = LoadError::ResourceMissing {
            path: PathBuf::from("res/AppConfiguration.json"),
        };
        assert_eq!(missing.to_string(), "res/AppConfiguration.json missing from bundle");

        let decode = LoadError::DecodeFailed(AppConfiguration::from_json_slice(b"[]").unwrap_err());
        assert!(decode.to_string().starts_with("failed to decode AppConfiguration.json: "));
    }
}
