//! Entity instances
//!
//! An [`Instance`] owns a private name→value store and a shared handle to
//! its [`Shape`]. Values enter the store only through [`Instance::set`],
//! which checks the candidate against the declared descriptor; the
//! constructor threads its input through the same path after verifying
//! that every required attribute was supplied.
//!
//! Construction either returns a fully valid instance or an error; no
//! partially populated instance ever escapes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ShapeError;
use crate::shape::Shape;
use crate::value::AttrValue;

/// One constructed entity, validated against its shape
#[derive(Debug, Clone)]
pub struct Instance {
    shape: Arc<Shape>,
    values: HashMap<String, AttrValue>,
}

impl Instance {
    /// Construct an instance from `(name, value)` pairs.
    ///
    /// Required attributes are checked first, in the shape's resolved
    /// order, before any value is stored; the first missing name aborts
    /// construction. The pairs are then assigned in input order through
    /// [`set`](Self::set), so an unknown name or an ill-typed value also
    /// aborts construction.
    pub fn new<I, K, V>(shape: &Arc<Shape>, attrs: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let supplied: Vec<(String, AttrValue)> = attrs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        for name in shape.required() {
            if !supplied.iter().any(|(key, _)| key == name) {
                return Err(ShapeError::MissingRequired {
                    attribute: name.clone(),
                });
            }
        }

        let mut instance = Instance {
            shape: shape.clone(),
            values: HashMap::new(),
        };
        for (name, value) in supplied {
            instance.set(name, value)?;
        }
        Ok(instance)
    }

    /// Construct with the default, empty input mapping
    pub fn empty(shape: &Arc<Shape>) -> Result<Self, ShapeError> {
        Self::new(shape, std::iter::empty::<(String, AttrValue)>())
    }

    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// The shape's resolved required-attribute list
    pub fn required(&self) -> &[String] {
        self.shape.required()
    }

    /// Read an attribute; `None` until it has been set
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(AttrValue::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttrValue::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(AttrValue::as_bool)
    }

    pub fn get_nested(&self, name: &str) -> Option<&Instance> {
        self.get(name).and_then(AttrValue::as_nested)
    }

    /// Whether the attribute currently holds a value
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Currently set attributes and their values
    pub fn values(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Write an attribute. This is the sole enforcement point: the name
    /// must be declared on the shape and the value's runtime type must
    /// satisfy the declared descriptor. On a type mismatch the rejected
    /// value is handed back inside the error and the previously stored
    /// value, if any, is left untouched.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<(), ShapeError> {
        let name = name.into();
        let value = value.into();
        let descriptor = match self.shape.attribute_type(&name) {
            Some(descriptor) => descriptor,
            None => return Err(ShapeError::UnknownAttribute { attribute: name }),
        };
        if !descriptor.admits(&value) {
            return Err(ShapeError::TypeMismatch {
                expected: descriptor.clone(),
                attribute: name,
                actual: value,
            });
        }
        self.values.insert(name, value);
        Ok(())
    }
}

/// Instance equality: same definition (by identity) and equal values
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shape, &other.shape) && self.values == other.values
    }
}
