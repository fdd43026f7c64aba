//! Text codec adapters for message-based transports.
//!
//! # Responsibility
//! - Define the host seam (`TextEncoder` / `TextDecoder`) a transport calls.
//! - Turn figures into wire text and back, guarded by an explicit lifecycle.
//!
//! # Invariants
//! - `encode`/`decode` are only valid between `init` and `destroy`.
//! - Lifecycle misuse fails with `EncoderError::LifecycleViolation`; it is
//!   never silently ignored.
//! - Encoding is a pure transform; the same input always yields the same
//!   text, so errors are never retried.

pub mod figure_decoder;
pub mod figure_encoder;
pub mod lifecycle;

use crate::config::{ConfigError, EndpointConfig};
use crate::model::figure::EncodingError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use lifecycle::LifecyclePhase;

pub type EncoderResult<T> = Result<T, EncoderError>;

/// Outbound adapter contract called by the host transport.
///
/// Hosts call `init` once, any number of `encode`, then `destroy` once.
pub trait TextEncoder<T> {
    fn init(&mut self, config: &EndpointConfig) -> EncoderResult<()>;
    fn encode(&self, message: &T) -> EncoderResult<String>;
    fn destroy(&mut self) -> EncoderResult<()>;
}

/// Inbound adapter contract called by the host transport.
pub trait TextDecoder<T> {
    fn init(&mut self, config: &EndpointConfig) -> EncoderResult<()>;
    /// Cheap pre-check; `false` tells the host to skip `decode` for `text`.
    fn will_decode(&self, text: &str) -> bool;
    fn decode(&self, text: &str) -> EncoderResult<T>;
    fn destroy(&mut self) -> EncoderResult<()>;
}

/// Adapter error surfaced to the host transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    Encoding(EncodingError),
    Decoding(DecodingError),
    LifecycleViolation {
        operation: &'static str,
        phase: LifecyclePhase,
    },
    InvalidConfig(ConfigError),
}

impl Display for EncoderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "encoding failed: {err}"),
            Self::Decoding(err) => write!(f, "decoding failed: {err}"),
            Self::LifecycleViolation { operation, phase } => write!(
                f,
                "lifecycle violation: `{operation}` is not valid while adapter is {phase}"
            ),
            Self::InvalidConfig(err) => write!(f, "invalid endpoint config: {err}"),
        }
    }
}

impl Error for EncoderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            Self::Decoding(err) => Some(err),
            Self::LifecycleViolation { .. } => None,
            Self::InvalidConfig(err) => Some(err),
        }
    }
}

impl From<EncodingError> for EncoderError {
    fn from(value: EncodingError) -> Self {
        Self::Encoding(value)
    }
}

impl From<DecodingError> for EncoderError {
    fn from(value: DecodingError) -> Self {
        Self::Decoding(value)
    }
}

impl From<ConfigError> for EncoderError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

/// Malformed inbound text, with the parser position when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for DecodingError {
    fn from(value: serde_json::Error) -> Self {
        Self {
            message: value.to_string(),
            line: value.line(),
            column: value.column(),
        }
    }
}

impl Display for DecodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "malformed json at line {} column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl Error for DecodingError {}
