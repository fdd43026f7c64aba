//! Payload model for figure messages.
//!
//! # Responsibility
//! - Define the geometric primitives and the figure container sent over
//!   text transports.
//!
//! # Invariants
//! - Figures are opaque JSON trees; no schema is enforced beyond
//!   well-formed JSON.

pub mod coordinates;
pub mod figure;
