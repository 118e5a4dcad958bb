//! Persistenz gespeicherter Designs.
//!
//! `codec` übersetzt Szene ↔ JSON, `store` kapselt den externen
//! Key-Value-Speicher (im Speicher oder als Dateien).

pub mod codec;
pub mod store;

pub use codec::{parse_design, parse_design_bytes, write_design};
pub use store::{FileStore, KeyValueStore, MemoryStore};
