//! Per-unit/per-type payload generation rules.
//!
//! Each unit maps to one field name and a numeric range per value type:
//!
//! | Unit | Field | Float range | Int range |
//! |------|-------|-------------|-----------|
//! | none | value | [0,1) | any int (boolean allowed) |
//! | °C   | degreeC | [0,1000) | [0,1000) |
//! | %    | percent | [0,100) | [0,100) |
//! | Pa   | pascal | [0,1000) | [0,1000) |
//! | m3/h | cubicMetersPerHour | [0,1000) | [0,1000) |
//! | V    | volt | [0,1000) | [0,1000) |
//! | A    | ampere | [0,1000) | [0,1000) |
//! | Sv/h | sivertPerHour | [0,1) | 0 |
//! | rpm  | rotationsPerMinute | [0,1000) | [0,1000) |
//! | W    | watt | [0,1e6) | [0,1e7) |
//! | m/s  | speed | [0,1) | 0 |
//!
//! A boolean request for any unit other than `none` is an invariant
//! violation reported as a typed error so callers (and tests) can catch
//! it instead of crashing the process.

use bench_core::{Unit, ValueType};
use rand::Rng;
use serde::Serialize;

/// Error type for payload generation.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Boolean values are only compatible with unit `none`
    #[error("boolean values are not allowed for unit {unit}")]
    BooleanNotAllowed {
        /// The offending unit
        unit: Unit,
    },

    /// Error encoding the payload record
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single generated measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean measurement
    Bool(bool),
    /// Integer measurement
    Int(i64),
    /// Floating point measurement
    Float(f64),
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Bool(b) => serde_json::Value::from(b),
            FieldValue::Int(i) => serde_json::Value::from(i),
            FieldValue::Float(f) => serde_json::Value::from(f),
        }
    }
}

/// Generate one randomized measurement for the given unit and type.
///
/// Returns the unit-specific field name together with the value. The
/// RNG is injected so workers can own independent generators and tests
/// can seed deterministically.
pub fn generate_value<R: Rng + ?Sized>(
    unit: Unit,
    value_type: ValueType,
    rng: &mut R,
) -> Result<(&'static str, FieldValue), PayloadError> {
    let field = field_name(unit);

    if unit == Unit::None {
        let value = match value_type {
            ValueType::Boolean => FieldValue::Bool(rng.gen_bool(0.5)),
            ValueType::Float => FieldValue::Float(rng.gen_range(0.0..1.0)),
            ValueType::Int => FieldValue::Int(rng.gen()),
        };
        return Ok((field, value));
    }

    let (float_max, int_max) = ranges(unit);
    let value = match value_type {
        ValueType::Boolean => return Err(PayloadError::BooleanNotAllowed { unit }),
        ValueType::Float => FieldValue::Float(rng.gen_range(0.0..float_max)),
        // Degenerate int ranges (Sv/h, m/s) always produce 0
        ValueType::Int if int_max == 0 => FieldValue::Int(0),
        ValueType::Int => FieldValue::Int(rng.gen_range(0..int_max)),
    };
    Ok((field, value))
}

/// Payload field name for a unit.
pub fn field_name(unit: Unit) -> &'static str {
    match unit {
        Unit::None => "value",
        Unit::DegreeC => "degreeC",
        Unit::Percent => "percent",
        Unit::Pascal => "pascal",
        Unit::CubicMetersPerHour => "cubicMetersPerHour",
        Unit::Volt => "volt",
        Unit::Ampere => "ampere",
        Unit::SievertPerHour => "sivertPerHour",
        Unit::RotationsPerMinute => "rotationsPerMinute",
        Unit::Watt => "watt",
        Unit::Speed => "speed",
    }
}

/// Exclusive upper bounds (float, int) for the numeric units.
fn ranges(unit: Unit) -> (f64, i64) {
    match unit {
        Unit::None => (1.0, 0),
        Unit::DegreeC | Unit::Pascal | Unit::CubicMetersPerHour => (1000.0, 1000),
        Unit::Volt | Unit::Ampere | Unit::RotationsPerMinute => (1000.0, 1000),
        Unit::Percent => (100.0, 100),
        Unit::SievertPerHour | Unit::Speed => (1.0, 0),
        Unit::Watt => (1_000_000.0, 10_000_000),
    }
}
