//! X.509 key descriptors carried by `<X509Data>`.
//!
//! An [`X509KeyDescriptor`] bundles the certificate blobs, subject key identifier, CRL and
//! issuer/serial reference declared by one `<X509Data>` element. Instances are assembled in one
//! step, either through the plain constructors or through [`X509KeyDescriptorBuilder`], and are
//! never modified afterwards.
//!
//! # Hashing
//!
//! Unlike the other key descriptor types, this one does **not** uphold the equality/hash
//! contract in every case. See the type-level documentation of [`X509KeyDescriptor`] before
//! placing it in a hashed container.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    keyinfo::{IssuerSerial, KeyInfoElement},
    utils::{decode_base64, next_instance_salt, HashCode},
    Result,
};

/// Certificates, SKI, CRL and issuer/serial declared by one `<X509Data>` element.
///
/// Certificates are opaque DER bytes. Nothing in this type parses or validates them; rejecting
/// malformed certificates is the job of whoever builds the descriptor.
///
/// # Equality Semantics
///
/// Two descriptors are equal if and only if all of the following hold:
/// - the certificate sequences have the same length and are byte-wise equal position by
///   position (order matters)
/// - the SKI strings are equal
/// - the CRL strings are equal
/// - the issuer/serial values are equal, where two absent values count as equal
///
/// Absent SKI and CRL are stored as empty strings. An issuer/serial whose parts are both empty
/// is stored as absent.
///
/// # Hash Semantics
///
/// The hash has two branches:
/// - **Non-empty** descriptors (at least one certificate, a SKI, a CRL or an issuer/serial)
///   hash structurally. Equal descriptors produce equal hash codes for the lifetime of the
///   process, so repeated parses of the same document hit the same cache entry.
/// - **Empty** descriptors hash a salt assigned when the value was constructed. Two separately
///   constructed empty descriptors are equal but have **different** hash codes; a clone keeps
///   the salt of its original.
///
/// Every empty descriptor would otherwise land in one constant bucket. Code that keys a hashed
/// container with this type must not rely on hashing to find an empty descriptor: check
/// [`X509KeyDescriptor::is_empty`] first and fall back to a sentinel or to `==`.
/// [`crate::store::KeyMaterialSet`] and [`crate::keyinfo::KeyInfo`] both do this.
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::{
///     keyinfo::{IssuerSerial, X509KeyDescriptor},
///     utils::HashCode,
/// };
///
/// let parsed = X509KeyDescriptor::builder()
///     .ski("SKISampleString")
///     .issuer_serial(IssuerSerial::new("IssuerName", "SerialNumber"))
///     .build();
/// let trusted = X509KeyDescriptor::builder()
///     .ski("SKISampleString")
///     .issuer_serial(IssuerSerial::new("IssuerName", "SerialNumber"))
///     .build();
/// assert_eq!(parsed, trusted);
/// assert_eq!(parsed.hash_code(), trusted.hash_code());
///
/// // Empty descriptors are equal, but do not share a hash code
/// let (a, b) = (X509KeyDescriptor::new(), X509KeyDescriptor::new());
/// assert_eq!(a, b);
/// assert_ne!(a.hash_code(), b.hash_code());
/// ```
#[derive(Debug, Clone)]
pub struct X509KeyDescriptor {
    certificates: Vec<Vec<u8>>,
    ski: String,
    crl: String,
    issuer_serial: Option<IssuerSerial>,
    /// Hash input for the empty branch only, never compared
    salt: u64,
}

impl X509KeyDescriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        X509KeyDescriptorBuilder::new().build()
    }

    /// Create a descriptor holding a single certificate.
    pub fn from_certificate(certificate: impl Into<Vec<u8>>) -> Self {
        X509KeyDescriptorBuilder::new()
            .certificate(certificate)
            .build()
    }

    /// Create a descriptor holding an ordered sequence of certificates.
    pub fn from_certificates<I, C>(certificates: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        X509KeyDescriptorBuilder::new()
            .certificates(certificates)
            .build()
    }

    /// Create a descriptor from the base64 text of `<X509Certificate>` elements.
    ///
    /// Whitespace inside the text is ignored. Order is preserved.
    ///
    /// # Errors
    /// Returns [`crate::Error::Base64`] naming [`KeyInfoElement::X509Certificate`] for the first
    /// entry that is not valid base64.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsig_keyinfo::keyinfo::X509KeyDescriptor;
    ///
    /// let descriptor = X509KeyDescriptor::from_base64_certificates(["MIIB", "MIIC"])?;
    /// assert_eq!(descriptor.certificates().len(), 2);
    /// # Ok::<(), dsig_keyinfo::Error>(())
    /// ```
    pub fn from_base64_certificates<I, S>(encoded: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let certificates = encoded
            .into_iter()
            .map(|text| decode_base64(KeyInfoElement::X509Certificate, text.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_certificates(certificates))
    }

    /// Start building a descriptor with optional fields.
    #[must_use]
    pub fn builder() -> X509KeyDescriptorBuilder {
        X509KeyDescriptorBuilder::new()
    }

    /// Certificate blobs, in document order.
    #[must_use]
    pub fn certificates(&self) -> &[Vec<u8>] {
        &self.certificates
    }

    /// Subject key identifier text, empty when absent.
    #[must_use]
    pub fn ski(&self) -> &str {
        &self.ski
    }

    /// Certificate revocation list text, empty when absent.
    #[must_use]
    pub fn crl(&self) -> &str {
        &self.crl
    }

    /// Issuer/serial reference, if declared.
    #[must_use]
    pub fn issuer_serial(&self) -> Option<&IssuerSerial> {
        self.issuer_serial.as_ref()
    }

    /// `true` when no field carries a value.
    ///
    /// Empty descriptors take the salted branch of the hash; see the type documentation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
            && self.ski.is_empty()
            && self.crl.is_empty()
            && self.issuer_serial.is_none()
    }

    /// `true` if one of the certificates is byte-wise equal to `certificate`.
    #[must_use]
    pub fn contains_certificate(&self, certificate: &[u8]) -> bool {
        self.certificates
            .iter()
            .any(|candidate| candidate.as_slice() == certificate)
    }

    /// Feed the structural part of the hash. Only meaningful for non-empty descriptors.
    pub(crate) fn hash_structure<H: Hasher>(&self, state: &mut H) {
        self.certificates.hash(state);
        self.ski.hash(state);
        self.crl.hash(state);
        self.issuer_serial.hash(state);
    }
}

impl Default for X509KeyDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for X509KeyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.certificates == other.certificates
            && self.ski == other.ski
            && self.crl == other.crl
            && self.issuer_serial == other.issuer_serial
        // salt is excluded: it only feeds the empty branch of the hash
    }
}

impl Eq for X509KeyDescriptor {}

impl Hash for X509KeyDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            state.write_u8(0);
            state.write_u64(self.salt);
        } else {
            state.write_u8(1);
            self.hash_structure(state);
        }
    }
}

impl HashCode for X509KeyDescriptor {}

impl fmt::Display for X509KeyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X509Data(certificates={}", self.certificates.len())?;
        if !self.ski.is_empty() {
            write!(f, ", ski={}", self.ski)?;
        }
        if !self.crl.is_empty() {
            write!(f, ", crl={} chars", self.crl.len())?;
        }
        if let Some(issuer_serial) = &self.issuer_serial {
            write!(f, ", issuer_serial=[{}]", issuer_serial)?;
        }
        write!(f, ")")
    }
}

/// Builder assembling an [`X509KeyDescriptor`] in one step.
///
/// Replaces setting optional fields on a published value: the descriptor only exists once
/// [`build`](Self::build) returns, and is immutable from then on.
///
/// ```rust
/// use dsig_keyinfo::keyinfo::{IssuerSerial, X509KeyDescriptor};
///
/// let descriptor = X509KeyDescriptor::builder()
///     .certificate(vec![0x30, 0x82, 0x01, 0x0A])
///     .crl("CRLSampleString")
///     .issuer_serial(IssuerSerial::new("CN=Test CA", "42"))
///     .build();
/// assert_eq!(descriptor.certificates().len(), 1);
/// assert_eq!(descriptor.crl(), "CRLSampleString");
/// ```
#[derive(Debug, Clone, Default)]
pub struct X509KeyDescriptorBuilder {
    certificates: Vec<Vec<u8>>,
    ski: Option<String>,
    crl: Option<String>,
    issuer_serial: Option<IssuerSerial>,
}

impl X509KeyDescriptorBuilder {
    /// Create a builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one certificate blob.
    #[must_use]
    pub fn certificate(mut self, certificate: impl Into<Vec<u8>>) -> Self {
        self.certificates.push(certificate.into());
        self
    }

    /// Append several certificate blobs, preserving their order.
    #[must_use]
    pub fn certificates<I, C>(mut self, certificates: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        self.certificates
            .extend(certificates.into_iter().map(Into::into));
        self
    }

    /// Set the subject key identifier text.
    #[must_use]
    pub fn ski(mut self, ski: impl Into<String>) -> Self {
        self.ski = Some(ski.into());
        self
    }

    /// Set the certificate revocation list text.
    #[must_use]
    pub fn crl(mut self, crl: impl Into<String>) -> Self {
        self.crl = Some(crl.into());
        self
    }

    /// Set the issuer/serial reference.
    #[must_use]
    pub fn issuer_serial(mut self, issuer_serial: IssuerSerial) -> Self {
        self.issuer_serial = Some(issuer_serial);
        self
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> X509KeyDescriptor {
        X509KeyDescriptor {
            certificates: self.certificates,
            ski: self.ski.unwrap_or_default(),
            crl: self.crl.unwrap_or_default(),
            issuer_serial: self.issuer_serial.filter(|value| !value.is_empty()),
            salt: next_instance_salt(),
        }
    }
}
