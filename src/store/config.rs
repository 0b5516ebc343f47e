//! Configuration for [`crate::store::KeyMaterialSet`]
//!
//! Sizing options for the concurrent maps backing the set. Every preset passes
//! [`KeySetConfig::validate`]; hand-built configurations are checked when the set is created.

use crate::{Error, Result};

/// Sizing of the concurrent maps behind a [`crate::store::KeyMaterialSet`]
///
/// The same settings apply to each of the maps (RSA key values, X.509 descriptors and the
/// issuer/serial index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySetConfig {
    /// Capacity reserved up front in each map (default: 64)
    pub initial_capacity: usize,

    /// Number of shards per map, `None` for the `dashmap` default
    /// Must be a power of two greater than one when set
    pub shard_amount: Option<usize>,
}

impl Default for KeySetConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            shard_amount: None,
        }
    }
}

impl KeySetConfig {
    /// Creates a configuration for short-lived sets used by a single validation
    ///
    /// Reserves nothing and uses the smallest legal shard count.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            initial_capacity: 0,
            shard_amount: Some(2),
        }
    }

    /// Creates a configuration for long-lived trust caches shared across threads
    #[must_use]
    pub fn concurrent() -> Self {
        Self {
            initial_capacity: 1024,
            shard_amount: None,
        }
    }

    /// Check that the configuration can be honoured.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if `shard_amount` is set to a value that is not a power
    /// of two greater than one.
    pub fn validate(&self) -> Result<()> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(Error::Configuration(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }
        Ok(())
    }
}
