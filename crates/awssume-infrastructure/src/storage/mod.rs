//! Storage layer: format codec and the config store.

pub mod codec;
mod config_store;

pub use config_store::ConfigStore;
