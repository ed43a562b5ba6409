//! Role domain model and the in-memory role registry.
//!
//! A Role is a named reference to an assumable IAM identity. The registry
//! keeps Roles unique by alias.

mod model;
mod registry;

pub use model::Role;
pub use registry::RoleRegistry;
