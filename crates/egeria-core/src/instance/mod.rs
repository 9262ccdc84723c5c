//! Generic property-graph instances.
//!
//! This is the type-erased representation exchanged with the metadata
//! repository layer:
//!
//! - [`EntityDetail`] - an entity with properties and classifications
//! - [`Relationship`] - a link between two entity proxies
//! - [`Classification`] - a named sub-record attached to an entity
//! - [`InstancePropertyValue`] - tagged property values (primitive, enum,
//!   map, array, struct)

mod entity;
mod header;
mod property;
mod relationship;

pub use entity::*;
pub use header::*;
pub use property::*;
pub use relationship::*;
