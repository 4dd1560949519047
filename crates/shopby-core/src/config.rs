//! Environment-driven settings for the server API client.
//!
//! [`Settings::load`] reads `.{env}.env` (`.dev.env` or `.prod.env`) from the
//! working directory, where `env` comes from `SHOPBY_ENV`. Process variables
//! take precedence over the file.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://server-api.e-ncp.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_VAR: &str = "SHOPBY_ENV";
pub const ACCESS_TOKEN_VAR: &str = "SHOPBY_SERVER_ACCESS_TOKEN";
pub const SYSTEM_KEY_VAR: &str = "SHOPBY_SERVER_SYSTEM_KEY";
pub const BASE_URL_VAR: &str = "SHOPBY_BASE_URL";
pub const TIMEOUT_MS_VAR: &str = "SHOPBY_TIMEOUT_MS";

/// Deployment environment the credentials belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }

    /// Name of the env file holding this environment's credentials.
    pub fn file_name(self) -> String {
        format!(".{}.env", self.as_str())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            _ => Err(ConfigError::InvalidValue {
                name: ENV_VAR,
                value: value.to_owned(),
                reason: "expected dev or prod",
            }),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub env: Environment,
    pub access_token: String,
    pub system_key: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Settings {
    /// Reads the env file for `SHOPBY_ENV` from the working directory, then
    /// the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), |name| std::env::var(name).ok())
    }

    /// Like [`Settings::load`], with the file looked up in `dir` and variables
    /// read through `lookup`. A missing file is not an error.
    pub fn load_from<F>(dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let env = match read(ENV_VAR) {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };
        let file = read_env_file(&dir.join(env.file_name()))?;

        Self::from_lookup(|name| read(name).or_else(|| file.get(name).cloned()))
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let env = match read(ENV_VAR) {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };
        let access_token = read(ACCESS_TOKEN_VAR).ok_or(ConfigError::MissingVar {
            name: ACCESS_TOKEN_VAR,
        })?;
        let system_key = read(SYSTEM_KEY_VAR).ok_or(ConfigError::MissingVar {
            name: SYSTEM_KEY_VAR,
        })?;
        let base_url = read(BASE_URL_VAR).unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                name: BASE_URL_VAR,
                value: base_url,
                reason: "expected an http(s) URL",
            });
        }
        let timeout_ms = match read(TIMEOUT_MS_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|timeout| *timeout > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: TIMEOUT_MS_VAR,
                    value,
                    reason: "expected a positive integer",
                })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            env,
            access_token,
            system_key,
            base_url,
            timeout_ms,
        })
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |error: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        message: error.to_string(),
    };

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(error) if error.not_found() => {
            debug!(path = %path.display(), "no env file");
            return Ok(HashMap::new());
        }
        Err(error) => return Err(to_error(error)),
    };
    debug!(path = %path.display(), "reading env file");
    entries.map(|entry| entry.map_err(to_error)).collect()
}

impl Debug for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("env", &self.env)
            .field("access_token", &"<redacted>")
            .field("system_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let settings = Settings::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "token"),
            (SYSTEM_KEY_VAR, "key"),
        ]))
        .expect("must load");

        assert_eq!(settings.env, Environment::Dev);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "  "),
            (SYSTEM_KEY_VAR, "key"),
        ]))
        .expect_err("must fail");

        assert_eq!(
            err,
            ConfigError::MissingVar {
                name: ACCESS_TOKEN_VAR
            }
        );
    }

    #[test]
    fn rejects_unknown_environment_and_bad_timeout() {
        let err = Settings::from_lookup(lookup(&[
            (ENV_VAR, "staging"),
            (ACCESS_TOKEN_VAR, "token"),
            (SYSTEM_KEY_VAR, "key"),
        ]))
        .expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidValue { name: ENV_VAR, .. }));

        let err = Settings::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "token"),
            (SYSTEM_KEY_VAR, "key"),
            (TIMEOUT_MS_VAR, "0"),
        ]))
        .expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidValue { name: TIMEOUT_MS_VAR, .. }));
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_VAR, "PROD"),
            (ACCESS_TOKEN_VAR, "secret-token"),
            (SYSTEM_KEY_VAR, "secret-key"),
        ]))
        .expect("must load");

        let rendered = format!("{settings:?}");
        assert_eq!(settings.env, Environment::Prod);
        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn env_file_is_chosen_by_environment() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        fs::write(
            dir.path().join(".dev.env"),
            "SHOPBY_SERVER_ACCESS_TOKEN=dev-token\nSHOPBY_SERVER_SYSTEM_KEY=dev-key\n",
        )
        .expect("must write");
        fs::write(
            dir.path().join(".prod.env"),
            "SHOPBY_SERVER_ACCESS_TOKEN=prod-token\nSHOPBY_SERVER_SYSTEM_KEY=prod-key\n",
        )
        .expect("must write");

        let dev = Settings::load_from(dir.path(), lookup(&[])).expect("must load");
        assert_eq!(dev.env, Environment::Dev);
        assert_eq!(dev.access_token, "dev-token");

        let prod = Settings::load_from(dir.path(), lookup(&[(ENV_VAR, "prod")])).expect("must load");
        assert_eq!(prod.env, Environment::Prod);
        assert_eq!(prod.access_token, "prod-token");
        assert_eq!(prod.system_key, "prod-key");
    }

    #[test]
    fn process_variables_win_over_env_file() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        fs::write(
            dir.path().join(".dev.env"),
            "SHOPBY_SERVER_ACCESS_TOKEN=file-token\nSHOPBY_SERVER_SYSTEM_KEY=file-key\nSHOPBY_TIMEOUT_MS=2500\n",
        )
        .expect("must write");

        let settings = Settings::load_from(
            dir.path(),
            lookup(&[(ACCESS_TOKEN_VAR, "process-token"), (SYSTEM_KEY_VAR, " ")]),
        )
        .expect("must load");

        assert_eq!(settings.access_token, "process-token");
        assert_eq!(settings.system_key, "file-key");
        assert_eq!(settings.timeout_ms, 2_500);
    }

    #[test]
    fn missing_env_file_falls_back_to_variables() {
        let dir = tempfile::tempdir().expect("must create tempdir");

        let settings = Settings::load_from(
            dir.path(),
            lookup(&[(ACCESS_TOKEN_VAR, "token"), (SYSTEM_KEY_VAR, "key")]),
        )
        .expect("must load");
        assert_eq!(settings.access_token, "token");

        let err = Settings::load_from(dir.path(), lookup(&[])).expect_err("must fail");
        assert_eq!(err, ConfigError::MissingVar { name: ACCESS_TOKEN_VAR });
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().expect("must create tempdir");
        fs::write(dir.path().join(".dev.env"), "NOT A VALID LINE\n").expect("must write");

        let err = Settings::load_from(dir.path(), lookup(&[])).expect_err("must fail");
        assert!(matches!(err, ConfigError::EnvFile { .. }), "{err:?}");
    }
}
