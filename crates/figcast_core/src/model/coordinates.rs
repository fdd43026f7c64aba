//! Planar coordinate value type.

use crate::model::figure::EncodingError;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// A 2D point used as a building block inside figure payloads.
///
/// Accessors do not validate. Non-finite components are only rejected when
/// the value is converted into JSON, because JSON has no NaN/inf literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Coordinates {
    x: f32,
    y: f32,
}

impl Coordinates {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Returns whether both components can be written as JSON numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let x = widen(self.x, "x").map_err(S::Error::custom)?;
        let y = widen(self.y, "y").map_err(S::Error::custom)?;
        let mut state = serializer.serialize_struct("Coordinates", 2)?;
        state.serialize_field("x", &x)?;
        state.serialize_field("y", &y)?;
        state.end()
    }
}

impl TryFrom<Coordinates> for Value {
    type Error = EncodingError;

    fn try_from(value: Coordinates) -> Result<Self, Self::Error> {
        let mut members = Map::new();
        members.insert("x".to_string(), Value::Number(widen(value.x, "x")?));
        members.insert("y".to_string(), Value::Number(widen(value.y, "y")?));
        Ok(Value::Object(members))
    }
}

// Widen through the shortest decimal form so `0.1f32` stays `0.1` on the
// wire instead of `0.10000000149011612`.
fn widen(component: f32, field: &'static str) -> Result<Number, EncodingError> {
    if !component.is_finite() {
        return Err(EncodingError::NonFiniteNumber(field));
    }
    let widened = component
        .to_string()
        .parse::<f64>()
        .unwrap_or(f64::from(component));
    Number::from_f64(widened).ok_or(EncodingError::NonFiniteNumber(field))
}
