//! # dsig-keyinfo Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dsig-keyinfo library. Import this module to get quick access to the key
//! descriptor types together with the [`HashCode`] trait.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dsig-keyinfo operations
pub use crate::Error;

/// The result type used throughout dsig-keyinfo
pub use crate::Result;

// ================================================================================================
// Key Descriptors
// ================================================================================================

/// Leaf value objects
pub use crate::keyinfo::{IssuerSerial, RsaKeyValue};

/// X.509 descriptors and their builder
pub use crate::keyinfo::{X509KeyDescriptor, X509KeyDescriptorBuilder};

/// Whole `KeyInfo` blocks and element names
pub use crate::keyinfo::{KeyInfo, KeyInfoBuilder, KeyInfoElement};

// ================================================================================================
// Hashing and Containers
// ================================================================================================

/// Process-stable hash codes
pub use crate::utils::HashCode;

/// Concurrent deduplication of trust material
pub use crate::store::{KeyMaterialSet, KeySetConfig};
