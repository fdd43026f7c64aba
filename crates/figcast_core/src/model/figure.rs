//! Figure domain model.
//!
//! # Responsibility
//! - Hold one structured JSON value as the transmittable unit of data.
//! - Render that value to canonical JSON text.
//!
//! # Invariants
//! - Rendering requires a value; an unset figure fails with
//!   `EncodingError::MissingValue` instead of producing placeholder text.
//! - Object member order is preserved from construction/parse order.
//! - A present JSON `null` is a valid value and renders as `null`.

use crate::config::JsonFormat;
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Root object member that names a figure, e.g. `"circle"`.
pub const FIGURE_KIND_KEY: &str = "type";

/// Structured payload wrapper sent as one text message.
///
/// The tree is opaque to this type: it may embed `Coordinates` or any other
/// JSON-shaped data, and no schema is enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    json: Option<Value>,
}

impl Figure {
    /// Creates a figure with no value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a figure holding `json`.
    pub fn with_json(json: Value) -> Self {
        Self { json: Some(json) }
    }

    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    pub fn json_mut(&mut self) -> Option<&mut Value> {
        self.json.as_mut()
    }

    pub fn set_json(&mut self, json: Value) {
        self.json = Some(json);
    }

    /// Moves the value out, leaving the figure unset.
    pub fn take_json(&mut self) -> Option<Value> {
        self.json.take()
    }

    pub fn clear(&mut self) {
        self.json = None;
    }

    /// Returns whether no value has been set.
    pub fn is_empty(&self) -> bool {
        self.json.is_none()
    }

    /// Returns the root `type` member when it is a string.
    ///
    /// Untyped figures (non-object roots, or objects without a string
    /// `type`) return `None`.
    pub fn kind(&self) -> Option<&str> {
        self.json
            .as_ref()
            .and_then(|value| value.get(FIGURE_KIND_KEY))
            .and_then(Value::as_str)
    }

    /// Sets one member on the root object.
    ///
    /// An unset figure is promoted to an empty object first. Returns the
    /// previous member value, if any.
    ///
    /// # Errors
    /// - `NotAnObject` when the root holds a non-object value.
    /// - `Serialize` when `value` cannot be represented as JSON.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Option<Value>, EncodingError> {
        let value =
            serde_json::to_value(value).map_err(|err| EncodingError::Serialize(err.to_string()))?;
        let root = self.json.get_or_insert_with(|| Value::Object(Map::new()));
        match root {
            Value::Object(members) => Ok(members.insert(key.into(), value)),
            other => Err(EncodingError::NotAnObject(json_type_name(other))),
        }
    }

    /// Renders the compact canonical JSON text of the current value.
    pub fn to_json_string(&self) -> Result<String, EncodingError> {
        self.render(JsonFormat::Compact)
    }

    /// Renders the current value with the requested whitespace policy.
    pub fn render(&self, format: JsonFormat) -> Result<String, EncodingError> {
        let value = self.json.as_ref().ok_or(EncodingError::MissingValue)?;
        let rendered = match format {
            JsonFormat::Compact => serde_json::to_string(value),
            JsonFormat::Pretty => serde_json::to_string_pretty(value),
        };
        rendered.map_err(|err| EncodingError::Serialize(err.to_string()))
    }
}

impl From<Value> for Figure {
    fn from(value: Value) -> Self {
        Self::with_json(value)
    }
}

impl FromStr for Figure {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Value>(text).map(Self::with_json)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Figure rendering errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    MissingValue,
    NonFiniteNumber(&'static str),
    NotAnObject(&'static str),
    Serialize(String),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue => write!(f, "figure has no value to encode"),
            Self::NonFiniteNumber(field) => {
                write!(f, "field `{field}` is not a finite number")
            }
            Self::NotAnObject(found) => {
                write!(f, "figure root must be an object to insert members, found {found}")
            }
            Self::Serialize(message) => write!(f, "figure value is not representable: {message}"),
        }
    }
}

impl Error for EncodingError {}
