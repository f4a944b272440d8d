use crate::types::descriptor::{DescribeType, TypeDescriptor};
use crate::types::names::{CHAR_SEQUENCE_TYPE_NAME, NUMBER_TYPE_NAME};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// Numeric supertype of the integer and floating point values held by the demo beans
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i32),
    Long(i64),
    Double(f64),
}

impl Number {
    /// Widen to `f64`.
    ///
    /// Lossy for `Long` values beyond 2^53, which round to the nearest
    /// representable double.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(value) => f64::from(value),
            Number::Long(value) => value as f64,
            Number::Double(value) => value,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Long(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

impl FromStr for Number {
    type Err = ParseFloatError;

    /// Integers that fit 32 bits parse as `Int`, wider ones as `Long`, the rest as `Double`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i32>() {
            return Ok(Number::Int(value));
        }
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Number::Long(value));
        }
        s.parse::<f64>().map(Number::Double)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Long(value) => write!(f, "{}", value),
            Number::Double(value) => write!(f, "{}", value),
        }
    }
}

impl DescribeType for Number {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(NUMBER_TYPE_NAME)
    }
}

/// Text supertype; every `String` converts into one
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharSequence(String);

impl CharSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CharSequence {
    fn from(value: String) -> Self {
        CharSequence(value)
    }
}

impl From<&str> for CharSequence {
    fn from(value: &str) -> Self {
        CharSequence(value.to_string())
    }
}

impl FromStr for CharSequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CharSequence::from(s))
    }
}

impl fmt::Display for CharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DescribeType for CharSequence {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(CHAR_SEQUENCE_TYPE_NAME)
    }
}

/// Uninhabited bottom type.
///
/// No value of it exists, so a holder over `Nothing` can never be read from.
/// As a type argument it is described as unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl DescribeType for Nothing {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::unresolved()
    }
}
