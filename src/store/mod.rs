//! Caller-side containers keyed by key descriptors.
//!
//! This module is the reference call site for the hashing rules in [`crate::keyinfo`]:
//! it deduplicates resolved trust material in concurrent maps while working around the
//! salted hash of empty [`crate::keyinfo::X509KeyDescriptor`]s.
//!
//! # Key Components
//!
//! - [`KeyMaterialSet`] - Concurrent set of distinct RSA key values and X.509 descriptors
//! - [`KeySetConfig`] - Sizing of the maps behind the set
//!
//! # Logging
//!
//! Inserts emit `tracing` events: `debug` for new material, `trace` for duplicates and for
//! empty descriptors recorded through the sentinel. No subscriber is installed by this crate.

mod config;
mod set;

pub use config::KeySetConfig;
pub use set::KeyMaterialSet;
