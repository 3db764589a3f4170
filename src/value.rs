//! Runtime attribute values
//!
//! An attribute slot holds either a scalar (represented as a
//! [`serde_json::Value`]) or a nested entity instance. Type enforcement
//! happens at the write path against the owning shape's declared
//! descriptor; this module only represents and classifies values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::instance::Instance;

/// A value held by an attribute slot
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A scalar value: string, integer, number, or boolean
    Scalar(Value),
    /// A nested entity instance
    Nested(Instance),
}

/// Classification of a value's runtime type, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
    Entity,
}

impl AttrValue {
    /// Classify the runtime type of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            AttrValue::Scalar(value) => match value {
                Value::Null => ValueKind::Null,
                Value::Bool(_) => ValueKind::Boolean,
                Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
                Value::Number(_) => ValueKind::Number,
                Value::String(_) => ValueKind::String,
                Value::Array(_) => ValueKind::Array,
                Value::Object(_) => ValueKind::Object,
            },
            AttrValue::Nested(_) => ValueKind::Entity,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Scalar(value) => value.as_str(),
            AttrValue::Nested(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Scalar(value) => value.as_i64(),
            AttrValue::Nested(_) => None,
        }
    }

    /// Numeric view; integral values are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Scalar(value) => value.as_f64(),
            AttrValue::Nested(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Scalar(value) => value.as_bool(),
            AttrValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Instance> {
        match self {
            AttrValue::Scalar(_) => None,
            AttrValue::Nested(instance) => Some(instance),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Entity => "entity",
        };
        f.write_str(label)
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        AttrValue::Scalar(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Scalar(Value::from(value))
    }
}

impl From<Instance> for AttrValue {
    fn from(instance: Instance) -> Self {
        AttrValue::Nested(instance)
    }
}
