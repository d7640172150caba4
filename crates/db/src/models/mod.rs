//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the stored document
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity is mutable
//!
//! Serialized field names follow the wire format of the browser client
//! (`_id`, camelCase).

pub mod note;
pub mod user;
