//! shapekit - runtime-defined entity shapes
//!
//! Declare a shape's typed attributes and required attributes once, then
//! construct and mutate instances through accessors that enforce the
//! declared types. A shape may extend another shape, inheriting both its
//! attribute registry and its required-attribute list, and may declare
//! attributes whose type is another shape, nesting typed entities.
//!
//! The engine validates value *type identity* and *presence* only; it does
//! not validate content, serialize, or persist anything.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapekit::{attrs, Instance, Shape, TypeDescriptor};
//!
//! # fn main() -> Result<(), shapekit::ShapeError> {
//! let person = Shape::builder("person")
//!     .attribute("full_name", TypeDescriptor::String)
//!     .attribute("age", TypeDescriptor::Integer)
//!     .require("full_name")
//!     .build();
//!
//! let mut ada = Instance::new(&person, attrs! {
//!     "full_name" => "Ada Lovelace",
//!     "age" => 36,
//! })?;
//! assert_eq!(ada.get_str("full_name"), Some("Ada Lovelace"));
//! assert_eq!(ada.get_i64("age"), Some(36));
//!
//! // writes are type-checked against the declaration
//! assert!(ada.set("age", "thirty-six").is_err());
//!
//! // a missing required attribute aborts construction
//! assert!(Instance::empty(&person).is_err());
//! # Ok(())
//! # }
//! ```

// Error taxonomy
pub mod error;

// Declared types and runtime values
pub mod descriptor;
pub mod value;

// Shape definitions and their instances
pub mod instance;
pub mod shape;

// Demonstration shape catalog
pub mod onboarding;

pub use descriptor::TypeDescriptor;
pub use error::ShapeError;
pub use instance::Instance;
pub use shape::{Shape, ShapeBuilder};
pub use value::{AttrValue, ValueKind};

/// Build the `(name, value)` input mapping for [`Instance::new`] from
/// `name => value` pairs; values go through [`AttrValue::from`].
#[macro_export]
macro_rules! attrs {
    () => {
        Vec::<(String, $crate::AttrValue)>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        vec![$(($name.to_string(), $crate::AttrValue::from($value))),+]
    };
}
