//! Shape definitions and the declaration builder
//!
//! A [`Shape`] is the definition-level registry for one kind of entity:
//! which attribute names exist, the declared type of each, and which names
//! must be supplied at construction. Shapes are built once through
//! [`ShapeBuilder`] and shared read-only behind an [`Arc`] by every
//! instance and by any descriptor that nests them.
//!
//! A derived shape names its ancestor with [`ShapeBuilder::extends`]; the
//! ancestor's registry and required list are merged into the derived shape
//! when it is built, so lookups at runtime never walk the chain. The
//! parent link is kept only for instance-of checks on nested descriptors.

use std::collections::HashMap;
use std::ptr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::descriptor::TypeDescriptor;

/// Definition of one kind of entity: its typed attributes and which of
/// them are required at construction
#[derive(Debug)]
pub struct Shape {
    name: String,
    parent: Option<Arc<Shape>>,
    /// Merged registry: ancestor declarations, then own (last write wins)
    attributes: HashMap<String, TypeDescriptor>,
    /// Resolved required list: ancestor entries first, duplicates kept
    required: Vec<String>,
}

impl Shape {
    /// Start declaring a new shape
    pub fn builder(name: impl Into<String>) -> ShapeBuilder {
        ShapeBuilder {
            name: name.into(),
            parent: None,
            attributes: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Shape>> {
        self.parent.as_ref()
    }

    /// Declared type of an attribute, if the shape declares it
    pub fn attribute_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.attributes.get(name)
    }

    /// Whether the shape (or an ancestor) declares the attribute
    pub fn declares(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Names of all declared attributes, ancestors included
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// The resolved required-attribute list: every ancestor's declarations
    /// in order, then this shape's own. A shape that requires nothing of
    /// its own returns its ancestor's list unchanged.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Whether this shape is `other` or derives from it
    pub fn conforms_to(&self, other: &Arc<Shape>) -> bool {
        let mut current: Option<&Shape> = Some(self);
        while let Some(shape) = current {
            if ptr::eq(shape as *const Shape, Arc::as_ptr(other)) {
                return true;
            }
            current = shape.parent.as_deref();
        }
        false
    }
}

/// Accumulates attribute and requirement declarations for one shape
#[derive(Debug)]
pub struct ShapeBuilder {
    name: String,
    parent: Option<Arc<Shape>>,
    attributes: Vec<(String, TypeDescriptor)>,
    required: Vec<String>,
}

impl ShapeBuilder {
    /// Derive from an existing shape; its attributes and required list are
    /// merged in at build time
    pub fn extends(mut self, parent: &Arc<Shape>) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Declare an attribute of the given type. Redeclaring a name, here or
    /// in an ancestor, silently overwrites the earlier descriptor.
    pub fn attribute(mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.attributes.push((name.into(), descriptor));
        self
    }

    /// Mark an attribute as required at construction. Calls accumulate;
    /// requiring the same name twice keeps both entries.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Merge the ancestor chain and freeze the definition
    pub fn build(self) -> Arc<Shape> {
        let (mut attributes, mut required) = match &self.parent {
            Some(parent) => (parent.attributes.clone(), parent.required.clone()),
            None => (HashMap::new(), Vec::new()),
        };
        for (name, descriptor) in self.attributes {
            attributes.insert(name, descriptor);
        }
        for name in &self.required {
            if !attributes.contains_key(name) {
                warn!(
                    shape = %self.name,
                    attribute = %name,
                    "required attribute has no declaration; instances will not be constructible"
                );
            }
        }
        required.extend(self.required);

        debug!(
            shape = %self.name,
            attributes = attributes.len(),
            required = required.len(),
            "shape built"
        );

        Arc::new(Shape {
            name: self.name,
            parent: self.parent,
            attributes,
            required,
        })
    }
}
