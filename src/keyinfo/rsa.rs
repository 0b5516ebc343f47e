//! RSA public key values carried by `<RSAKeyValue>`.
//!
//! An [`RsaKeyValue`] keeps the modulus and exponent exactly as the base64 text found in the
//! document. Producers disagree about letter case in that text, so equality and hashing treat
//! both components case-insensitively rather than decoding them.
//!
//! # Examples
//!
//! ```rust
//! use dsig_keyinfo::{keyinfo::RsaKeyValue, utils::HashCode};
//!
//! let declared = RsaKeyValue::new("modulus", "exponent");
//! let trusted = RsaKeyValue::new("MODULUS", "EXPONENT");
//!
//! assert_eq!(declared, trusted);
//! assert_eq!(declared.hash_code(), trusted.hash_code());
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    keyinfo::KeyInfoElement,
    utils::{decode_base64, encode_base64, eq_ignore_case, hash_ignore_case, HashCode},
    Result,
};

/// An RSA public key as a base64 `(modulus, exponent)` pair.
///
/// # Equality Semantics
///
/// Two values are equal if and only if their moduli are equal under ordinal ASCII
/// case-insensitive comparison and their exponents are equal under the same comparison.
/// Empty components are legal and compare equal to each other.
///
/// The hash is computed over the upper-cased components, so equal values always have equal
/// hash codes. Values of this type are used as keys in key-lookup caches, where breaking that
/// guarantee would cause missed lookups rather than just slower ones.
///
/// No check is made that the components are valid base64 or form a usable RSA key.
#[derive(Debug, Clone, Default)]
pub struct RsaKeyValue {
    modulus: String,
    exponent: String,
}

impl RsaKeyValue {
    /// Create a key value from the base64 text of `<Modulus>` and `<Exponent>`.
    pub fn new(modulus: impl Into<String>, exponent: impl Into<String>) -> Self {
        Self {
            modulus: modulus.into(),
            exponent: exponent.into(),
        }
    }

    /// Create a key value from raw big-endian component bytes.
    ///
    /// The bytes are base64-encoded with the standard alphabet, which is the form a trust
    /// store entry takes when it is compared against a value parsed from a document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsig_keyinfo::keyinfo::RsaKeyValue;
    ///
    /// let key = RsaKeyValue::from_components(&[0xAC, 0x2C], &[0x01, 0x00, 0x01]);
    /// assert_eq!(key.exponent(), "AQAB");
    /// ```
    #[must_use]
    pub fn from_components(modulus: &[u8], exponent: &[u8]) -> Self {
        Self {
            modulus: encode_base64(modulus),
            exponent: encode_base64(exponent),
        }
    }

    /// Base64 text of the modulus.
    #[must_use]
    pub fn modulus(&self) -> &str {
        &self.modulus
    }

    /// Base64 text of the exponent.
    #[must_use]
    pub fn exponent(&self) -> &str {
        &self.exponent
    }

    /// `true` when both components are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modulus.is_empty() && self.exponent.is_empty()
    }

    /// Decode the modulus into raw big-endian bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::Base64`] naming [`KeyInfoElement::Modulus`] if the text is not
    /// valid base64.
    pub fn modulus_bytes(&self) -> Result<Vec<u8>> {
        decode_base64(KeyInfoElement::Modulus, &self.modulus)
    }

    /// Decode the exponent into raw big-endian bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::Base64`] naming [`KeyInfoElement::Exponent`] if the text is not
    /// valid base64.
    pub fn exponent_bytes(&self) -> Result<Vec<u8>> {
        decode_base64(KeyInfoElement::Exponent, &self.exponent)
    }
}

impl PartialEq for RsaKeyValue {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.modulus, &other.modulus)
            && eq_ignore_case(&self.exponent, &other.exponent)
    }
}

impl Eq for RsaKeyValue {}

impl Hash for RsaKeyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.modulus, state);
        hash_ignore_case(&self.exponent, state);
    }
}

impl HashCode for RsaKeyValue {}

impl fmt::Display for RsaKeyValue {
    /// Short form used in diagnostics; long moduli are truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 16;
        let modulus = match self.modulus.get(..PREVIEW) {
            Some(prefix) if self.modulus.len() > PREVIEW => format!("{prefix}..."),
            _ => self.modulus.clone(),
        };
        write!(f, "RSA(modulus={}, exponent={})", modulus, self.exponent)
    }
}
