//! Endpoint configuration handed to adapters at activation.
//!
//! # Responsibility
//! - Carry the host's endpoint description into `init`.
//! - Select the whitespace policy of encoded text.
//!
//! # Invariants
//! - `path` is an absolute endpoint path, optionally templated (`/rooms/{id}`).
//! - Compact output is the wire default.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ENDPOINT_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?:[A-Za-z0-9._~-]+|\{[A-Za-z_][A-Za-z0-9_]*\})?(?:/(?:[A-Za-z0-9._~-]+|\{[A-Za-z_][A-Za-z0-9_]*\}))*$")
        .expect("valid endpoint path regex")
});

/// Whitespace policy for encoded JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonFormat {
    /// No insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indentation, for debugging endpoints.
    Pretty,
}

/// Host-provided endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint path the adapter is registered on, e.g. `/figures/{room}`.
    pub path: String,
    #[serde(default)]
    pub format: JsonFormat,
}

impl EndpointConfig {
    /// Creates a compact-output config for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: JsonFormat::Compact,
        }
    }

    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Validates the endpoint path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        if !ENDPOINT_PATH_RE.is_match(&self.path) {
            return Err(ConfigError::InvalidPath(self.path.clone()));
        }
        Ok(())
    }
}

/// Endpoint configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPath,
    InvalidPath(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "endpoint path must not be empty"),
            Self::InvalidPath(value) => write!(
                f,
                "endpoint path is invalid: {value} (expected `/segment/{{param}}` form)"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EndpointConfig, JsonFormat};

    #[test]
    fn accepts_plain_and_templated_paths() {
        for path in ["/", "/figures", "/figures/{room}", "/v1/draw-board/{board_id}/live"] {
            EndpointConfig::new(path)
                .validate()
                .unwrap_or_else(|err| panic!("{path} should be valid: {err}"));
        }
    }

    #[test]
    fn rejects_empty_path() {
        let err = EndpointConfig::new("  ").validate().unwrap_err();
        assert_eq!(err, ConfigError::EmptyPath);
    }

    #[test]
    fn rejects_malformed_paths() {
        for path in ["figures", "/figures//x", "/figures/{}", "/a b", "/figures/{room"] {
            let err = EndpointConfig::new(path).validate().unwrap_err();
            assert_eq!(err, ConfigError::InvalidPath(path.to_string()));
        }
    }

    #[test]
    fn deserializes_with_compact_default() {
        let config: EndpointConfig =
            serde_json::from_str(r#"{"path":"/figures"}"#).expect("config json");
        assert_eq!(config.format, JsonFormat::Compact);

        let config: EndpointConfig =
            serde_json::from_str(r#"{"path":"/figures","format":"pretty"}"#).expect("config json");
        assert_eq!(config, EndpointConfig::new("/figures").with_format(JsonFormat::Pretty));
    }
}
