//! Adapter lifecycle state machine.
//!
//! `Uninitialized -(init)-> Ready -(encode)*-> Ready -(destroy)-> Destroyed`.
//! Every transition is checked; there is no way back out of `Destroyed`.

use crate::encoder::{EncoderError, EncoderResult};
use std::fmt::{Display, Formatter};

/// Phase of one adapter instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecyclePhase {
    #[default]
    Uninitialized,
    Ready,
    Destroyed,
}

impl LifecyclePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
            Self::Destroyed => "destroyed",
        }
    }
}

impl Display for LifecyclePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase guard shared by codec adapters.
#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: LifecyclePhase,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Fails unless `init` is still allowed.
    pub fn ensure_can_activate(&self) -> EncoderResult<()> {
        self.expect_phase("init", LifecyclePhase::Uninitialized)
    }

    /// `Uninitialized -> Ready`.
    pub fn activate(&mut self) -> EncoderResult<()> {
        self.ensure_can_activate()?;
        self.phase = LifecyclePhase::Ready;
        Ok(())
    }

    /// Fails unless the adapter is `Ready`.
    pub fn ensure_ready(&self, operation: &'static str) -> EncoderResult<()> {
        self.expect_phase(operation, LifecyclePhase::Ready)
    }

    /// `Ready -> Destroyed`.
    pub fn retire(&mut self) -> EncoderResult<()> {
        self.expect_phase("destroy", LifecyclePhase::Ready)?;
        self.phase = LifecyclePhase::Destroyed;
        Ok(())
    }

    fn expect_phase(&self, operation: &'static str, expected: LifecyclePhase) -> EncoderResult<()> {
        if self.phase == expected {
            return Ok(());
        }
        Err(EncoderError::LifecycleViolation {
            operation,
            phase: self.phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Lifecycle, LifecyclePhase};
    use crate::encoder::EncoderError;

    #[test]
    fn walks_the_happy_path() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.phase(), LifecyclePhase::Uninitialized);

        lifecycle.activate().expect("init from uninitialized");
        lifecycle.ensure_ready("encode").expect("ready after init");
        lifecycle.retire().expect("destroy from ready");
        assert_eq!(lifecycle.phase(), LifecyclePhase::Destroyed);
    }

    #[test]
    fn rejects_use_before_init() {
        let lifecycle = Lifecycle::new();
        let err = lifecycle.ensure_ready("encode").unwrap_err();
        assert_eq!(
            err,
            EncoderError::LifecycleViolation {
                operation: "encode",
                phase: LifecyclePhase::Uninitialized,
            }
        );
    }

    #[test]
    fn rejects_repeated_transitions() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.retire().is_err());

        lifecycle.activate().expect("first init");
        assert!(lifecycle.activate().is_err());

        lifecycle.retire().expect("first destroy");
        assert!(lifecycle.retire().is_err());
        assert!(lifecycle.activate().is_err());
        assert_eq!(lifecycle.phase(), LifecyclePhase::Destroyed);
    }
}
