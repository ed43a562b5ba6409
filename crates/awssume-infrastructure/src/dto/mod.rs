//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs describe exactly what is written to the configuration file.
//! They are private to the infrastructure layer; the domain types in
//! `awssume-core` never carry persistence-only concerns.

mod config_document;

pub use config_document::ConfigDocument;
