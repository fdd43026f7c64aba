//! Core figure model and text codec adapters for streaming transports.
//! Transport framing and session handling live in the host, not here.

pub mod config;
pub mod encoder;
pub mod logging;
pub mod model;

pub use config::{ConfigError, EndpointConfig, JsonFormat};
pub use encoder::figure_decoder::FigureDecoder;
pub use encoder::figure_encoder::FigureEncoder;
pub use encoder::lifecycle::{Lifecycle, LifecyclePhase};
pub use encoder::{DecodingError, EncoderError, EncoderResult, TextDecoder, TextEncoder};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::coordinates::Coordinates;
pub use model::figure::{EncodingError, Figure, FIGURE_KIND_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
