//! Onboarding shape catalog
//!
//! Concrete shape definitions for a client-onboarding flow. These are
//! declaration-only consumers of the engine: each accessor builds its
//! definition once, on first use, and every caller shares the same
//! definition thereafter, so nested-shape checks agree on identity.

use std::sync::{Arc, OnceLock};

use crate::descriptor::TypeDescriptor;
use crate::shape::Shape;

static ADDRESS: OnceLock<Arc<Shape>> = OnceLock::new();
static PARTY: OnceLock<Arc<Shape>> = OnceLock::new();
static INDIVIDUAL: OnceLock<Arc<Shape>> = OnceLock::new();
static CORPORATION: OnceLock<Arc<Shape>> = OnceLock::new();

/// A postal address; nothing is required
pub fn address() -> Arc<Shape> {
    ADDRESS
        .get_or_init(|| {
            Shape::builder("address")
                .attribute("street", TypeDescriptor::String)
                .attribute("city", TypeDescriptor::String)
                .build()
        })
        .clone()
}

/// Base shape for anything that can be onboarded
pub fn party() -> Arc<Shape> {
    PARTY
        .get_or_init(|| {
            Shape::builder("party")
                .attribute("reference", TypeDescriptor::String)
                .require("reference")
                .build()
        })
        .clone()
}

/// A natural person; inherits the party requirements
pub fn individual() -> Arc<Shape> {
    INDIVIDUAL
        .get_or_init(|| {
            Shape::builder("individual")
                .extends(&party())
                .attribute("full_name", TypeDescriptor::String)
                .attribute("age", TypeDescriptor::Integer)
                .require("full_name")
                .build()
        })
        .clone()
}

/// A legal entity with a nested registered address
pub fn corporation() -> Arc<Shape> {
    CORPORATION
        .get_or_init(|| {
            Shape::builder("corporation")
                .extends(&party())
                .attribute("company_name", TypeDescriptor::String)
                .attribute("registered_address", TypeDescriptor::Shape(address()))
                .require("company_name")
                .build()
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_the_same_definition() {
        assert!(Arc::ptr_eq(&address(), &address()));
        assert!(Arc::ptr_eq(&individual(), &individual()));
    }

    #[test]
    fn test_derived_shapes_extend_party() {
        assert!(individual().conforms_to(&party()));
        assert!(corporation().conforms_to(&party()));
        assert!(!address().conforms_to(&party()));
    }

    #[test]
    fn test_requirements_accumulate_down_the_hierarchy() {
        assert_eq!(party().required(), ["reference"]);
        assert_eq!(individual().required(), ["reference", "full_name"]);
        assert_eq!(corporation().required(), ["reference", "company_name"]);
    }
}
