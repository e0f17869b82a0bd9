//! Application Configuration
//!
//! Configuration for the admin Token Authority, read from the environment.

use std::fmt;
use std::time::Duration;

use platform::crypto::{from_base64, random_bytes};
use thiserror::Error;

/// Bootstrap password used when none is configured in development.
pub const DEV_BOOTSTRAP_PASSWORD: &str = "ChangeMe-Bootstrap-2024";

pub const DEFAULT_BOOTSTRAP_USERNAME: &str = "admin";
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 480;
/// One year
pub const MAX_TOKEN_TTL_MINUTES: u64 = 525_600;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

pub const ENV_SECRET_KEY: &str = "ADMIN_SECRET_KEY";
pub const ENV_TOKEN_TTL_MINUTES: &str = "ADMIN_TOKEN_TTL_MINUTES";
pub const ENV_BOOTSTRAP_USERNAME: &str = "ADMIN_BOOTSTRAP_USERNAME";
pub const ENV_BOOTSTRAP_PASSWORD: &str = "ADMIN_BOOTSTRAP_PASSWORD";
pub const ENV_STORE_TIMEOUT_MS: &str = "ADMIN_STORE_TIMEOUT_MS";
pub const ENV_PASSWORD_PEPPER: &str = "ADMIN_PASSWORD_PEPPER";

/// Which defaults are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    /// Random secret and a well-known bootstrap password are acceptable
    Development,
    /// Secret and bootstrap password must be supplied explicitly
    Production,
}

impl RuntimeProfile {
    /// Development for debug builds, production otherwise
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            RuntimeProfile::Development
        } else {
            RuntimeProfile::Production
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("{0} still uses the development default; rotate it before production use")]
    DefaultCredential(&'static str),
}

/// Credentials for the account created in an empty store
#[derive(Clone)]
pub struct BootstrapCredentials {
    pub username: String,
    pub password: String,
}

impl BootstrapCredentials {
    pub fn uses_dev_default(&self) -> bool {
        self.password == DEV_BOOTSTRAP_PASSWORD
    }
}

impl fmt::Debug for BootstrapCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Token Authority configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing key. Rotating it invalidates every token.
    pub secret_key: [u8; 32],
    /// Token lifetime
    pub token_ttl: Duration,
    /// Default account for an empty store
    pub bootstrap: BootstrapCredentials,
    /// Upper bound for each credential store call
    pub store_timeout: Duration,
    /// Application-wide secret appended before hashing
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Random secret, development bootstrap credentials, default TTL
    pub fn development() -> Self {
        Self {
            secret_key: random_secret(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60),
            bootstrap: BootstrapCredentials {
                username: DEFAULT_BOOTSTRAP_USERNAME.to_string(),
                password: DEV_BOOTSTRAP_PASSWORD.to_string(),
            },
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
            password_pepper: None,
        }
    }

    /// Load from process environment variables
    pub fn from_env(profile: RuntimeProfile) -> Result<Self, ConfigError> {
        Self::from_lookup(profile, |name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(profile: RuntimeProfile, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let production = profile == RuntimeProfile::Production;

        let secret_key = match get(ENV_SECRET_KEY) {
            Some(encoded) => decode_secret(&encoded)?,
            None if production => return Err(ConfigError::Missing(ENV_SECRET_KEY)),
            None => {
                tracing::warn!("{} not set, using a random per-process key", ENV_SECRET_KEY);
                random_secret()
            }
        };

        let ttl_minutes = parse_u64(ENV_TOKEN_TTL_MINUTES, get(ENV_TOKEN_TTL_MINUTES))?
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);
        if ttl_minutes == 0 {
            return Err(ConfigError::Invalid {
                name: ENV_TOKEN_TTL_MINUTES,
                reason: "must be greater than zero".to_string(),
            });
        }
        let ttl_secs = ttl_minutes
            .checked_mul(60)
            .filter(|_| ttl_minutes <= MAX_TOKEN_TTL_MINUTES)
            .ok_or_else(|| ConfigError::Invalid {
                name: ENV_TOKEN_TTL_MINUTES,
                reason: format!("must be at most {MAX_TOKEN_TTL_MINUTES} minutes"),
            })?;

        let store_timeout_ms = parse_u64(ENV_STORE_TIMEOUT_MS, get(ENV_STORE_TIMEOUT_MS))?
            .unwrap_or(DEFAULT_STORE_TIMEOUT_MS);

        let username = get(ENV_BOOTSTRAP_USERNAME)
            .unwrap_or_else(|| DEFAULT_BOOTSTRAP_USERNAME.to_string());

        let password = match get(ENV_BOOTSTRAP_PASSWORD) {
            Some(p) if production && p == DEV_BOOTSTRAP_PASSWORD => {
                return Err(ConfigError::DefaultCredential(ENV_BOOTSTRAP_PASSWORD));
            }
            Some(p) => p,
            None if production => return Err(ConfigError::Missing(ENV_BOOTSTRAP_PASSWORD)),
            None => DEV_BOOTSTRAP_PASSWORD.to_string(),
        };

        let password_pepper = get(ENV_PASSWORD_PEPPER)
            .map(|encoded| {
                from_base64(encoded.trim()).map_err(|e| ConfigError::Invalid {
                    name: ENV_PASSWORD_PEPPER,
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            secret_key,
            token_ttl: Duration::from_secs(ttl_secs),
            bootstrap: BootstrapCredentials { username, password },
            store_timeout: Duration::from_millis(store_timeout_ms),
            password_pepper,
        })
    }

    /// Token TTL as a chrono duration, `None` if out of chrono's range
    pub fn token_ttl_chrono(&self) -> Option<chrono::Duration> {
        chrono::Duration::from_std(self.token_ttl).ok()
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("bootstrap", &self.bootstrap)
            .field("store_timeout", &self.store_timeout)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&random_bytes(32));
    secret
}

fn decode_secret(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = from_base64(encoded.trim()).map_err(|e| ConfigError::Invalid {
        name: ENV_SECRET_KEY,
        reason: e.to_string(),
    })?;

    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| ConfigError::Invalid {
        name: ENV_SECRET_KEY,
        reason: format!("expected 32 bytes, got {}", bytes.len()),
    })
}

fn parse_u64(name: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|v| {
            v.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
}
