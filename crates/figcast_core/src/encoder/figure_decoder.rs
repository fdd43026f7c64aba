//! Inbound figure adapter.

use crate::config::EndpointConfig;
use crate::encoder::lifecycle::{Lifecycle, LifecyclePhase};
use crate::encoder::{DecodingError, EncoderError, EncoderResult, TextDecoder};
use crate::model::figure::Figure;
use log::{debug, error, info, warn};
use serde::de::IgnoredAny;
use uuid::Uuid;

/// Parses JSON text messages back into figures.
#[derive(Debug)]
pub struct FigureDecoder {
    id: Uuid,
    lifecycle: Lifecycle,
}

impl FigureDecoder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    fn reject(&self, err: EncoderError) -> EncoderError {
        error!(
            "event=lifecycle_violation module=decoder status=error decoder_id={} error={}",
            self.id, err
        );
        err
    }
}

impl Default for FigureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDecoder<Figure> for FigureDecoder {
    fn init(&mut self, config: &EndpointConfig) -> EncoderResult<()> {
        self.lifecycle
            .ensure_can_activate()
            .map_err(|err| self.reject(err))?;
        config.validate().map_err(|err| {
            warn!(
                "event=decoder_init module=decoder status=error decoder_id={} error={}",
                self.id, err
            );
            EncoderError::InvalidConfig(err)
        })?;
        self.lifecycle.activate().map_err(|err| self.reject(err))?;
        info!(
            "event=decoder_init module=decoder status=ok decoder_id={} path={}",
            self.id, config.path
        );
        Ok(())
    }

    fn will_decode(&self, text: &str) -> bool {
        // Syntax check only; skips building the value tree.
        self.lifecycle.phase() == LifecyclePhase::Ready
            && serde_json::from_str::<IgnoredAny>(text).is_ok()
    }

    fn decode(&self, text: &str) -> EncoderResult<Figure> {
        self.lifecycle
            .ensure_ready("decode")
            .map_err(|err| self.reject(err))?;
        let figure = text.parse::<Figure>().map_err(|err| {
            let err = DecodingError::from(err);
            warn!(
                "event=figure_decode module=decoder status=error decoder_id={} error={}",
                self.id, err
            );
            EncoderError::Decoding(err)
        })?;
        debug!(
            "event=figure_decode module=decoder status=ok decoder_id={} kind={} bytes={}",
            self.id,
            figure.kind().unwrap_or("-"),
            text.len()
        );
        Ok(figure)
    }

    fn destroy(&mut self) -> EncoderResult<()> {
        self.lifecycle.retire().map_err(|err| self.reject(err))?;
        info!(
            "event=decoder_destroy module=decoder status=ok decoder_id={}",
            self.id
        );
        Ok(())
    }
}
