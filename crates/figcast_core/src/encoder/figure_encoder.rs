//! Outbound figure adapter.

use crate::config::{EndpointConfig, JsonFormat};
use crate::encoder::lifecycle::{Lifecycle, LifecyclePhase};
use crate::encoder::{EncoderError, EncoderResult, TextEncoder};
use crate::model::figure::Figure;
use log::{debug, error, info, warn};
use uuid::Uuid;

/// Turns figures into JSON text messages.
///
/// `encode` only reads adapter state, so one `Ready` instance can serve
/// concurrent sends from several threads.
#[derive(Debug)]
pub struct FigureEncoder {
    id: Uuid,
    lifecycle: Lifecycle,
    format: JsonFormat,
}

impl FigureEncoder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            lifecycle: Lifecycle::new(),
            format: JsonFormat::Compact,
        }
    }

    /// Instance id used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    pub fn format(&self) -> JsonFormat {
        self.format
    }

    fn reject(&self, err: EncoderError) -> EncoderError {
        error!(
            "event=lifecycle_violation module=encoder status=error encoder_id={} error={}",
            self.id, err
        );
        err
    }
}

impl Default for FigureEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEncoder<Figure> for FigureEncoder {
    fn init(&mut self, config: &EndpointConfig) -> EncoderResult<()> {
        self.lifecycle
            .ensure_can_activate()
            .map_err(|err| self.reject(err))?;
        config.validate().map_err(|err| {
            warn!(
                "event=encoder_init module=encoder status=error encoder_id={} error={}",
                self.id, err
            );
            EncoderError::InvalidConfig(err)
        })?;
        self.lifecycle.activate().map_err(|err| self.reject(err))?;
        self.format = config.format;
        info!(
            "event=encoder_init module=encoder status=ok encoder_id={} path={} format={:?}",
            self.id, config.path, config.format
        );
        Ok(())
    }

    fn encode(&self, message: &Figure) -> EncoderResult<String> {
        self.lifecycle
            .ensure_ready("encode")
            .map_err(|err| self.reject(err))?;
        let text = message.render(self.format).map_err(|err| {
            warn!(
                "event=figure_encode module=encoder status=error encoder_id={} error={}",
                self.id, err
            );
            EncoderError::Encoding(err)
        })?;
        debug!(
            "event=figure_encode module=encoder status=ok encoder_id={} kind={} bytes={}",
            self.id,
            message.kind().unwrap_or("-"),
            text.len()
        );
        Ok(text)
    }

    fn destroy(&mut self) -> EncoderResult<()> {
        self.lifecycle.retire().map_err(|err| self.reject(err))?;
        info!(
            "event=encoder_destroy module=encoder status=ok encoder_id={}",
            self.id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FigureEncoder;
    use crate::config::{EndpointConfig, JsonFormat};
    use crate::encoder::{EncoderError, LifecyclePhase, TextEncoder};
    use crate::model::figure::{EncodingError, Figure};
    use serde_json::json;

    fn ready_encoder() -> FigureEncoder {
        let mut encoder = FigureEncoder::new();
        encoder
            .init(&EndpointConfig::new("/figures"))
            .expect("init with valid config");
        encoder
    }

    #[test]
    fn encodes_circle_example_in_input_key_order() {
        let encoder = ready_encoder();
        let figure = Figure::with_json(json!({
            "type": "circle",
            "radius": 5,
            "center": {"x": 1.0, "y": 2.0}
        }));

        assert_eq!(
            encoder.encode(&figure).expect("encode circle"),
            r#"{"type":"circle","radius":5,"center":{"x":1.0,"y":2.0}}"#
        );
    }

    #[test]
    fn init_rejects_invalid_config_and_stays_uninitialized() {
        let mut encoder = FigureEncoder::new();
        let err = encoder
            .init(&EndpointConfig::new("no-leading-slash"))
            .expect_err("invalid path must be rejected");
        assert!(matches!(err, EncoderError::InvalidConfig(_)));
        assert_eq!(encoder.phase(), LifecyclePhase::Uninitialized);

        encoder
            .init(&EndpointConfig::new("/figures"))
            .expect("valid config after rejection");
        assert_eq!(encoder.phase(), LifecyclePhase::Ready);
    }

    #[test]
    fn init_adopts_configured_format() {
        let mut encoder = FigureEncoder::new();
        encoder
            .init(&EndpointConfig::new("/debug").with_format(JsonFormat::Pretty))
            .expect("init pretty");
        assert_eq!(encoder.format(), JsonFormat::Pretty);

        let text = encoder
            .encode(&Figure::with_json(json!({"a": 1})))
            .expect("encode pretty");
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn rejects_second_init() {
        let mut encoder = ready_encoder();
        let err = encoder
            .init(&EndpointConfig::new("/figures"))
            .expect_err("second init must fail");
        assert_eq!(
            err,
            EncoderError::LifecycleViolation {
                operation: "init",
                phase: LifecyclePhase::Ready,
            }
        );
    }

    #[test]
    fn empty_figure_is_an_encoding_error() {
        let encoder = ready_encoder();
        let err = encoder.encode(&Figure::new()).unwrap_err();
        assert_eq!(err, EncoderError::Encoding(EncodingError::MissingValue));
        assert_eq!(encoder.phase(), LifecyclePhase::Ready);
    }

    #[test]
    fn instances_have_distinct_ids() {
        assert_ne!(FigureEncoder::new().id(), FigureEncoder::new().id());
    }
}
