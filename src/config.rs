//! Portal configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::path::PathBuf;
use std::time::Duration;

use crate::documents::FormDelays;

pub const DEFAULT_SAVE_DELAY_MS: u64 = 1000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
pub const DEFAULT_START_PATH: &str = "/";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable held something that is not a non-negative integer.
    #[error("invalid value for {var}: {value:?} (expected milliseconds)")]
    InvalidNumber { var: &'static str, value: String },
    /// A text variable held bytes that are not valid UTF-8.
    #[error("invalid value for {var}: {value:?} (not valid UTF-8)")]
    NotUnicode { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// JSON profile loaded on dashboard mount; `None` means no profile source.
    pub user_fixture: Option<PathBuf>,
    pub delays: FormDelays,
    /// Route the navigation menu starts on.
    pub start_path: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            user_fixture: None,
            delays: FormDelays {
                save: Duration::from_millis(DEFAULT_SAVE_DELAY_MS),
                submit: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            },
            start_path: DEFAULT_START_PATH.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Build typed portal config from environment variables.
    ///
    /// Optional:
    /// - `BANKDOCS_USER_FIXTURE`: path of a JSON user profile
    /// - `BANKDOCS_SAVE_DELAY_MS`: default 1000
    /// - `BANKDOCS_SUBMIT_DELAY_MS`: default 1000
    /// - `BANKDOCS_START_PATH`: default `/`
    ///
    /// # Errors
    ///
    /// `InvalidNumber` when a delay variable is set but not an integer
    /// (including non-UTF-8 bytes), `NotUnicode` when the start path is not
    /// valid UTF-8. The fixture path is an OS path and accepts any bytes.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_fixture = std::env::var_os("BANKDOCS_USER_FIXTURE")
            .filter(|v| !v.to_string_lossy().trim().is_empty())
            .map(PathBuf::from);
        let save = env_parse_millis("BANKDOCS_SAVE_DELAY_MS", DEFAULT_SAVE_DELAY_MS)?;
        let submit = env_parse_millis("BANKDOCS_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;
        let start_path = match std::env::var("BANKDOCS_START_PATH") {
            Ok(path) => path,
            Err(VarError::NotPresent) => DEFAULT_START_PATH.to_owned(),
            Err(VarError::NotUnicode(raw)) => {
                return Err(ConfigError::NotUnicode {
                    var: "BANKDOCS_START_PATH",
                    value: raw.to_string_lossy().into_owned(),
                });
            }
        };

        Ok(Self { user_fixture, delays: FormDelays { save, submit }, start_path })
    }
}

fn env_parse_millis(var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(VarError::NotPresent) => Ok(Duration::from_millis(default)),
        Err(VarError::NotUnicode(raw)) => {
            Err(ConfigError::InvalidNumber { var, value: raw.to_string_lossy().into_owned() })
        }
    }
}
