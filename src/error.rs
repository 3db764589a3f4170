//! Error types for shape declaration misuse
//!
//! Every failure in this crate signals caller-side misuse of a declared
//! shape: a missing required attribute, a value of the wrong runtime type,
//! or a write to an attribute the shape never declared. None of them is
//! recoverable internally; callers branch on the variant.

use thiserror::Error;

use crate::descriptor::TypeDescriptor;
use crate::value::AttrValue;

/// Errors surfaced by instance construction and attribute writes
#[derive(Error, Debug, Clone)]
pub enum ShapeError {
    /// A required attribute was absent from the construction input
    #[error("attribute '{attribute}' is required for construction")]
    MissingRequired { attribute: String },

    /// A value's runtime type does not satisfy the declared descriptor
    #[error("attribute '{attribute}' expected {expected}, got {}", .actual.kind())]
    TypeMismatch {
        attribute: String,
        expected: TypeDescriptor,
        actual: AttrValue,
    },

    /// The named attribute is not declared on the shape
    #[error("unknown attribute '{attribute}'")]
    UnknownAttribute { attribute: String },
}

impl ShapeError {
    /// Name of the attribute the error is about
    pub fn attribute(&self) -> &str {
        match self {
            ShapeError::MissingRequired { attribute }
            | ShapeError::TypeMismatch { attribute, .. }
            | ShapeError::UnknownAttribute { attribute } => attribute,
        }
    }

    /// Recover the rejected value from a type-mismatch error
    pub fn into_rejected_value(self) -> Option<AttrValue> {
        match self {
            ShapeError::TypeMismatch { actual, .. } => Some(actual),
            _ => None,
        }
    }
}
