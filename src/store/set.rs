//! Concurrent deduplication of resolved trust material.
//!
//! [`KeyMaterialSet`] collects the RSA key values and X.509 descriptors resolved while
//! validating signatures, counting how often each distinct value was seen and indexing
//! descriptors by issuer/serial.
//!
//! Empty [`X509KeyDescriptor`]s never enter the hashed maps. Their hash is salted per
//! construction, so two equal empty descriptors would land in different buckets and the map
//! would keep both. A sentinel counter records them instead.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::{mapref::entry::Entry, DashMap};
use tracing::{debug, trace};

use crate::{
    keyinfo::{IssuerSerial, KeyInfo, RsaKeyValue, X509KeyDescriptor},
    store::KeySetConfig,
    Result,
};

/// Thread-safe set of distinct key material with occurrence counts.
///
/// # Architecture
///
/// - **RSA key values**: `DashMap<RsaKeyValue, usize>`, case-insensitive via the key's `Hash`
/// - **X.509 descriptors**: `DashMap<X509KeyDescriptor, usize>` for non-empty descriptors
/// - **Empty descriptors**: an [`AtomicUsize`] sentinel, compared by equality instead of hash
/// - **Issuer/serial index**: first descriptor inserted for each issuer/serial
///
/// # Thread Safety
///
/// All methods take `&self` and may be called concurrently. Counts are updated under the
/// shard lock of the entry being modified.
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::{
///     keyinfo::{RsaKeyValue, X509KeyDescriptor},
///     store::KeyMaterialSet,
/// };
///
/// let set = KeyMaterialSet::new();
/// assert!(set.insert_rsa(RsaKeyValue::new("modulus", "AQAB")));
/// assert!(!set.insert_rsa(RsaKeyValue::new("MODULUS", "aqab")));
///
/// assert!(set.insert_x509(X509KeyDescriptor::new()));
/// assert!(!set.insert_x509(X509KeyDescriptor::new()));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug)]
pub struct KeyMaterialSet {
    rsa: DashMap<RsaKeyValue, usize>,
    x509: DashMap<X509KeyDescriptor, usize>,
    empty_x509: AtomicUsize,
    by_issuer_serial: DashMap<IssuerSerial, X509KeyDescriptor>,
}

impl KeyMaterialSet {
    /// Create an empty set with [`KeySetConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::build(KeySetConfig::default())
    }

    /// Create an empty set with the given sizing.
    ///
    /// # Errors
    /// Returns [`crate::Error::Configuration`] if the configuration fails
    /// [`KeySetConfig::validate`].
    pub fn with_config(config: KeySetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: KeySetConfig) -> Self {
        fn map<K: Eq + std::hash::Hash, V>(config: &KeySetConfig) -> DashMap<K, V> {
            match config.shard_amount {
                Some(shards) => {
                    DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
                }
                None => DashMap::with_capacity(config.initial_capacity),
            }
        }

        Self {
            rsa: map(&config),
            x509: map(&config),
            empty_x509: AtomicUsize::new(0),
            by_issuer_serial: map(&config),
        }
    }

    /// Record an RSA key value. Returns `true` if no equal value was present.
    pub fn insert_rsa(&self, key: RsaKeyValue) -> bool {
        match self.rsa.entry(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                trace!(key = %entry.key(), count = *entry.get(), "duplicate RSA key value");
                false
            }
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "new RSA key value");
                entry.insert(1);
                true
            }
        }
    }

    /// Record an X.509 descriptor. Returns `true` if no equal descriptor was present.
    ///
    /// The first descriptor inserted for a given issuer/serial becomes the one returned by
    /// [`find_by_issuer_serial`](Self::find_by_issuer_serial).
    pub fn insert_x509(&self, descriptor: X509KeyDescriptor) -> bool {
        if descriptor.is_empty() {
            let previous = self.empty_x509.fetch_add(1, Ordering::AcqRel);
            trace!(count = previous + 1, "empty X509Data recorded through sentinel");
            return previous == 0;
        }

        if let Some(issuer_serial) = descriptor.issuer_serial() {
            self.by_issuer_serial
                .entry(issuer_serial.clone())
                .or_insert_with(|| descriptor.clone());
        }

        match self.x509.entry(descriptor) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                trace!(descriptor = %entry.key(), count = *entry.get(), "duplicate X509Data");
                false
            }
            Entry::Vacant(entry) => {
                debug!(descriptor = %entry.key(), "new X509Data");
                entry.insert(1);
                true
            }
        }
    }

    /// Record all key material declared by a `KeyInfo` block.
    ///
    /// Returns how many of the inserted values were new.
    pub fn insert_key_info(&self, key_info: &KeyInfo) -> usize {
        let mut added = 0;
        if let Some(key) = key_info.rsa_key_value() {
            added += usize::from(self.insert_rsa(key.clone()));
        }
        for descriptor in key_info.x509_data() {
            added += usize::from(self.insert_x509(descriptor.clone()));
        }
        added
    }

    /// `true` if an equal RSA key value was recorded.
    #[must_use]
    pub fn contains_rsa(&self, key: &RsaKeyValue) -> bool {
        self.rsa.contains_key(key)
    }

    /// `true` if an equal X.509 descriptor was recorded.
    #[must_use]
    pub fn contains_x509(&self, descriptor: &X509KeyDescriptor) -> bool {
        if descriptor.is_empty() {
            return self.empty_x509.load(Ordering::Acquire) > 0;
        }
        self.x509.contains_key(descriptor)
    }

    /// How many times an equal RSA key value was inserted.
    #[must_use]
    pub fn rsa_occurrences(&self, key: &RsaKeyValue) -> usize {
        self.rsa.get(key).map(|count| *count).unwrap_or_default()
    }

    /// How many times an equal X.509 descriptor was inserted.
    #[must_use]
    pub fn x509_occurrences(&self, descriptor: &X509KeyDescriptor) -> usize {
        if descriptor.is_empty() {
            return self.empty_x509.load(Ordering::Acquire);
        }
        self.x509
            .get(descriptor)
            .map(|count| *count)
            .unwrap_or_default()
    }

    /// The first descriptor recorded for `issuer_serial`.
    #[must_use]
    pub fn find_by_issuer_serial(&self, issuer_serial: &IssuerSerial) -> Option<X509KeyDescriptor> {
        self.by_issuer_serial
            .get(issuer_serial)
            .map(|entry| entry.value().clone())
    }

    /// Number of distinct values recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        let empty = usize::from(self.empty_x509.load(Ordering::Acquire) > 0);
        self.rsa.len() + self.x509.len() + empty
    }

    /// `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove everything.
    pub fn clear(&self) {
        self.rsa.clear();
        self.x509.clear();
        self.by_issuer_serial.clear();
        self.empty_x509.store(0, Ordering::Release);
        debug!("key material set cleared");
    }
}

impl Default for KeyMaterialSet {
    fn default() -> Self {
        Self::new()
    }
}
