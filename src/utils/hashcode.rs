//! Process-stable hash codes for key descriptors.
//!
//! The [`HashCode`] trait exposes a single `u64` per value, computed with a hasher whose keys are
//! drawn at random once per process. Values that hash equal in one process hash equal for the
//! whole lifetime of that process, but an attacker who controls certificate bytes cannot predict
//! bucket placement in another process.
//!
//! # Thread Safety
//!
//! The shared [`RandomState`] is initialised once through a [`OnceLock`] and only read
//! afterwards. [`HashCode::hash_code`] can be called concurrently from any thread.

use std::{
    collections::hash_map::{DefaultHasher, RandomState},
    hash::{BuildHasher, Hash, Hasher},
    sync::{
        atomic::{AtomicU64, Ordering},
        OnceLock,
    },
};

static PROCESS_STATE: OnceLock<RandomState> = OnceLock::new();

static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Build a hasher keyed with the process-wide random state.
#[must_use]
pub fn process_hasher() -> DefaultHasher {
    PROCESS_STATE.get_or_init(RandomState::new).build_hasher()
}

/// Return a value that is unique for every call within this process.
///
/// Used to give values that are deliberately excluded from structural hashing a hash of
/// their own.
pub(crate) fn next_instance_salt() -> u64 {
    INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Hash code computation shared by the key descriptor types.
///
/// The default implementation feeds the value's [`Hash`] implementation into
/// [`process_hasher`]. Implementors document whether equal values are guaranteed to produce
/// equal hash codes; see [`crate::keyinfo::X509KeyDescriptor`] for the one type that
/// deliberately does not.
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::{keyinfo::RsaKeyValue, utils::HashCode};
///
/// let lower = RsaKeyValue::new("modulus", "exponent");
/// let upper = RsaKeyValue::new("MODULUS", "EXPONENT");
/// assert_eq!(lower, upper);
/// assert_eq!(lower.hash_code(), upper.hash_code());
/// ```
pub trait HashCode: Hash {
    /// Hash code of this value, stable for the lifetime of the process.
    fn hash_code(&self) -> u64 {
        let mut state = process_hasher();
        self.hash(&mut state);
        state.finish()
    }
}
