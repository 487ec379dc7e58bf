use std::error::Error;
use std::fmt;

use tracing::{debug, warn};

use crate::core::constants::{API_KEY_ENV_VARS, API_KEY_URL};
use crate::core::keyring::{self, KeyringAccessError};

const QUICK_FIXES: &[&str] = &[
    "carenav auth                 # Store a key in the system keyring",
    "export API_KEY=...           # Or provide it through the environment",
    "export GEMINI_API_KEY=...    # Alternative variable name",
];

/// The API key could not be resolved; the app cannot talk to the model.
#[derive(Debug)]
pub struct CredentialError {
    message: String,
    quick_fixes: &'static [&'static str],
    exit_code: i32,
}

impl CredentialError {
    pub fn missing_api_key() -> Self {
        Self {
            message: format!(
                "❌ API Key Missing\n\nPlease set the {} environment variable (or {}) to use this application.\nGet a Gemini API key at {}",
                API_KEY_ENV_VARS[0], API_KEY_ENV_VARS[1], API_KEY_URL
            ),
            quick_fixes: QUICK_FIXES,
            exit_code: 2,
        }
    }

    pub fn quick_fixes(&self) -> &'static [&'static str] {
        self.quick_fixes
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn key_url(&self) -> &'static str {
        API_KEY_URL
    }
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CredentialError {}

/// Where an API key can come from. Real lookups use the process environment
/// and the platform keyring.
pub trait KeySource {
    fn env_var(&self, name: &str) -> Option<String>;
    fn stored_key(&self) -> Result<Option<String>, KeyringAccessError>;
}

pub struct SystemKeySource;

impl KeySource for SystemKeySource {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn stored_key(&self) -> Result<Option<String>, KeyringAccessError> {
        keyring::load_api_key()
    }
}

/// Resolves the API key: `API_KEY`, then `GEMINI_API_KEY`, then the keyring.
///
/// Keyring failures are logged and treated as "no key" so the caller shows
/// the configuration screen rather than crashing.
pub fn resolve_api_key<S: KeySource>(source: &S) -> Result<String, CredentialError> {
    for name in API_KEY_ENV_VARS {
        if let Some(value) = source.env_var(name).filter(|v| !v.trim().is_empty()) {
            debug!(source = name, "using API key from environment");
            return Ok(value.trim().to_string());
        }
    }

    match source.stored_key() {
        Ok(Some(key)) if !key.trim().is_empty() => {
            debug!("using API key from keyring");
            Ok(key.trim().to_string())
        }
        Ok(_) => Err(CredentialError::missing_api_key()),
        Err(err) => {
            warn!(
                error = %err,
                recoverable = err.is_recoverable(),
                "unable to read stored credentials"
            );
            Err(CredentialError::missing_api_key())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSource {
        env: HashMap<&'static str, &'static str>,
        stored: Option<&'static str>,
        keyring_broken: bool,
    }

    impl KeySource for FakeSource {
        fn env_var(&self, name: &str) -> Option<String> {
            self.env.get(name).map(|value| value.to_string())
        }

        fn stored_key(&self) -> Result<Option<String>, KeyringAccessError> {
            if self.keyring_broken {
                return Err(KeyringAccessError::from(::keyring::Error::NoStorageAccess(
                    Box::new(std::io::Error::other("locked")),
                )));
            }
            Ok(self.stored.map(str::to_string))
        }
    }

    #[test]
    fn api_key_env_var_wins() {
        let source = FakeSource {
            env: HashMap::from([("API_KEY", "env-key"), ("GEMINI_API_KEY", "gemini-key")]),
            stored: Some("stored-key"),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&source).expect("resolves"), "env-key");
    }

    #[test]
    fn gemini_env_var_is_second_choice() {
        let source = FakeSource {
            env: HashMap::from([("API_KEY", "  "), ("GEMINI_API_KEY", "gemini-key")]),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&source).expect("resolves"), "gemini-key");
    }

    #[test]
    fn keyring_is_last_resort() {
        let source = FakeSource {
            stored: Some("stored-key"),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&source).expect("resolves"), "stored-key");
    }

    #[test]
    fn missing_key_reports_link_and_exit_code() {
        let err = resolve_api_key(&FakeSource::default()).expect_err("no key anywhere");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("API Key Missing"));
        assert!(err.to_string().contains("https://aistudio.google.com/app/apikey"));
        assert!(!err.quick_fixes().is_empty());
    }

    #[test]
    fn keyring_failure_is_reported_as_missing_key() {
        let source = FakeSource {
            keyring_broken: true,
            ..Default::default()
        };
        let err = resolve_api_key(&source).expect_err("broken keyring and no env");
        assert_eq!(err.exit_code(), 2);
    }
}
