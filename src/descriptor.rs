//! Declared attribute types
//!
//! A [`TypeDescriptor`] is the tag recorded in a shape's registry for each
//! attribute. The write path asks the descriptor whether a candidate value
//! is admissible; there is no coercion and no content validation.

use std::fmt;
use std::sync::Arc;

use crate::shape::Shape;
use crate::value::AttrValue;

/// The declared type of an attribute
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    /// A string value
    String,
    /// An integral numeric value
    Integer,
    /// Any numeric value, integral included
    Number,
    /// A boolean value
    Boolean,
    /// An instance of the given shape, or of any shape derived from it
    Shape(Arc<Shape>),
}

impl TypeDescriptor {
    /// Check whether a value's runtime type satisfies this descriptor
    pub fn admits(&self, value: &AttrValue) -> bool {
        match (self, value) {
            (TypeDescriptor::String, AttrValue::Scalar(v)) => v.is_string(),
            (TypeDescriptor::Integer, AttrValue::Scalar(v)) => v.is_i64() || v.is_u64(),
            (TypeDescriptor::Number, AttrValue::Scalar(v)) => v.is_number(),
            (TypeDescriptor::Boolean, AttrValue::Scalar(v)) => v.is_boolean(),
            (TypeDescriptor::Shape(shape), AttrValue::Nested(instance)) => {
                instance.shape().conforms_to(shape)
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::String => f.write_str("string"),
            TypeDescriptor::Integer => f.write_str("integer"),
            TypeDescriptor::Number => f.write_str("number"),
            TypeDescriptor::Boolean => f.write_str("boolean"),
            TypeDescriptor::Shape(shape) => write!(f, "instance of '{}'", shape.name()),
        }
    }
}

/// Descriptor equality; shape descriptors compare by definition identity
impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeDescriptor::String, TypeDescriptor::String)
            | (TypeDescriptor::Integer, TypeDescriptor::Integer)
            | (TypeDescriptor::Number, TypeDescriptor::Number)
            | (TypeDescriptor::Boolean, TypeDescriptor::Boolean) => true,
            (TypeDescriptor::Shape(a), TypeDescriptor::Shape(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    #[test]
    fn test_scalar_admission() {
        assert!(TypeDescriptor::String.admits(&AttrValue::from("Ada")));
        assert!(!TypeDescriptor::String.admits(&AttrValue::from(7)));

        assert!(TypeDescriptor::Integer.admits(&AttrValue::from(7)));
        assert!(!TypeDescriptor::Integer.admits(&AttrValue::from(7.5)));

        assert!(TypeDescriptor::Boolean.admits(&AttrValue::from(false)));
        assert!(!TypeDescriptor::Boolean.admits(&AttrValue::from("false")));
    }

    #[test]
    fn test_number_admits_integral_values() {
        assert!(TypeDescriptor::Number.admits(&AttrValue::from(7.5)));
        assert!(TypeDescriptor::Number.admits(&AttrValue::from(7)));
        assert!(!TypeDescriptor::Number.admits(&AttrValue::from("7")));
    }

    #[test]
    fn test_shape_admission_follows_the_parent_chain() {
        let base = Shape::builder("base").build();
        let derived = Shape::builder("derived").extends(&base).build();
        let other = Shape::builder("other").build();

        let descriptor = TypeDescriptor::Shape(base.clone());
        let of_derived = Instance::empty(&derived).unwrap();
        let of_other = Instance::empty(&other).unwrap();

        assert!(descriptor.admits(&AttrValue::from(of_derived)));
        assert!(!descriptor.admits(&AttrValue::from(of_other)));
        assert!(!descriptor.admits(&AttrValue::from("base")));
    }

    #[test]
    fn test_descriptor_equality_is_by_identity_for_shapes() {
        let a = Shape::builder("a").build();
        let b = Shape::builder("a").build();
        assert_eq!(TypeDescriptor::Shape(a.clone()), TypeDescriptor::Shape(a.clone()));
        assert_ne!(TypeDescriptor::Shape(a), TypeDescriptor::Shape(b));
        assert_eq!(TypeDescriptor::Integer, TypeDescriptor::Integer);
        assert_ne!(TypeDescriptor::Integer, TypeDescriptor::Number);
    }
}
