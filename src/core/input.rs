//! The loosely-typed boundary the validators accept.
//!
//! Callers hand the wallet whatever a config file, RPC payload, or UI field
//! produced. `RawInput` tags the shapes we care about; every validator does
//! its own type narrowing before semantic checks run.

use num_bigint::BigInt;

/// Placeholder rendered into diagnostics when no input was supplied at all.
pub const ABSENT_TOKEN: &str = "<none>";

/// An untyped value presented for validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Text(String),
    Int(i64),
    Float(f64),
    Big(BigInt),
    Bool(bool),
    Json(serde_json::Value),
    Absent,
}

impl RawInput {
    /// String view, for the validators whose first check is "is a string".
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawInput::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view used by the safe integer checks. Only genuinely numeric
    /// shapes qualify; everything else has no ordering against zero.
    pub fn numeric_view(&self) -> Option<f64> {
        match self {
            RawInput::Int(v) => Some(*v as f64),
            RawInput::Float(v) => Some(*v),
            RawInput::Json(value) => value.as_f64(),
            _ => None,
        }
    }

    /// Diagnostic rendering: raw text stays raw, absent input becomes a
    /// placeholder token, everything else is JSON-rendered.
    pub fn render(&self) -> String {
        match self {
            RawInput::Text(s) => s.clone(),
            RawInput::Int(v) => v.to_string(),
            RawInput::Float(v) => v.to_string(),
            RawInput::Big(v) => v.to_string(),
            RawInput::Bool(v) => v.to_string(),
            RawInput::Json(v) => v.to_string(),
            RawInput::Absent => ABSENT_TOKEN.to_string(),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Int(value as i64)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Int(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Float(value)
    }
}

impl From<BigInt> for RawInput {
    fn from(value: BigInt) -> Self {
        RawInput::Big(value)
    }
}

impl From<bool> for RawInput {
    fn from(value: bool) -> Self {
        RawInput::Bool(value)
    }
}

impl From<serde_json::Value> for RawInput {
    fn from(value: serde_json::Value) -> Self {
        RawInput::Json(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => RawInput::Absent,
        }
    }
}
