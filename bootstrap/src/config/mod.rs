// src/config/mod.rs
// Declarative configuration resources: parsing and validation.

pub mod de; // Deserialization helpers
pub mod processed; // Validated bindings, ready to apply
pub mod raw; // Structs directly mapping to the YAML/JSON structure

pub use processed::{process_raw_config, DeclaredBinding};
pub use raw::ConfigRaw;
