//! Storage layer for wallet-cli
//!
//! Provides JSON file storage with atomic writes and a versioned snapshot of
//! the account registry.

pub mod file_io;
pub mod registry;

pub use file_io::{quarantine_file, read_json_optional, write_json_atomic};
pub use registry::{LoadOutcome, LoadedRegistry, RegistryStore, SNAPSHOT_SCHEMA_VERSION};
