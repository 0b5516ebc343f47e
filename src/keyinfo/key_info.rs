use std::hash::{Hash, Hasher};

use crate::{
    keyinfo::{IssuerSerial, KeyInfoElement, RsaKeyValue, X509KeyDescriptor},
    utils::HashCode,
};

/// The key material declared by one `<KeyInfo>` block.
///
/// Aggregates the parts of `<KeyInfo>` this crate models: `<KeyName>`, the URI of a
/// `<RetrievalMethod>`, an optional `<RSAKeyValue>` and the `<X509Data>` elements in document
/// order. Absent strings are stored as empty strings.
///
/// # Equality Semantics
///
/// Two values are equal if and only if:
/// - the key names are ordinally equal
/// - the retrieval-method URIs are ordinally equal
/// - the RSA key values are equal (case-insensitive, both absent counts as equal)
/// - the X.509 descriptor sequences are equal position by position
///
/// # Hash Semantics
///
/// Unlike [`X509KeyDescriptor`], this type upholds the equality/hash contract in every case.
/// Empty descriptors are skipped when hashing and only counted, so a block containing empty
/// `<X509Data>` elements still hashes deterministically.
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::{
///     keyinfo::{KeyInfo, RsaKeyValue, X509KeyDescriptor},
///     utils::HashCode,
/// };
///
/// let build = || {
///     KeyInfo::builder()
///         .key_name("signing-key")
///         .rsa_key_value(RsaKeyValue::new("rCz8", "AQAB"))
///         .x509_data(X509KeyDescriptor::new())
///         .build()
/// };
/// let (first, second) = (build(), build());
/// assert_eq!(first, second);
/// assert_eq!(first.hash_code(), second.hash_code());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInfo {
    key_name: String,
    retrieval_method_uri: String,
    rsa_key_value: Option<RsaKeyValue>,
    x509_data: Vec<X509KeyDescriptor>,
}

impl KeyInfo {
    /// Start building a `KeyInfo` value.
    #[must_use]
    pub fn builder() -> KeyInfoBuilder {
        KeyInfoBuilder::default()
    }

    /// Text of `<KeyName>`, empty when absent.
    #[must_use]
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// URI attribute of `<RetrievalMethod>`, empty when absent.
    #[must_use]
    pub fn retrieval_method_uri(&self) -> &str {
        &self.retrieval_method_uri
    }

    /// The declared RSA key value, if any.
    #[must_use]
    pub fn rsa_key_value(&self) -> Option<&RsaKeyValue> {
        self.rsa_key_value.as_ref()
    }

    /// The `<X509Data>` descriptors in document order.
    #[must_use]
    pub fn x509_data(&self) -> &[X509KeyDescriptor] {
        &self.x509_data
    }

    /// `true` when nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_name.is_empty()
            && self.retrieval_method_uri.is_empty()
            && self.rsa_key_value.is_none()
            && self.x509_data.is_empty()
    }

    /// The child elements present, in schema order.
    ///
    /// The X.509 sub-elements are reported once each if any descriptor carries them.
    #[must_use]
    pub fn elements(&self) -> Vec<KeyInfoElement> {
        let mut elements = Vec::new();
        if !self.key_name.is_empty() {
            elements.push(KeyInfoElement::KeyName);
        }
        if !self.retrieval_method_uri.is_empty() {
            elements.push(KeyInfoElement::RetrievalMethod);
        }
        if self.rsa_key_value.is_some() {
            elements.push(KeyInfoElement::RsaKeyValue);
        }
        if self.x509_data.is_empty() {
            return elements;
        }

        elements.push(KeyInfoElement::X509Data);
        let any = |check: fn(&X509KeyDescriptor) -> bool| self.x509_data.iter().any(check);
        if any(|data| !data.certificates().is_empty()) {
            elements.push(KeyInfoElement::X509Certificate);
        }
        if any(|data| !data.ski().is_empty()) {
            elements.push(KeyInfoElement::X509Ski);
        }
        if any(|data| !data.crl().is_empty()) {
            elements.push(KeyInfoElement::X509Crl);
        }
        if any(|data| data.issuer_serial().is_some()) {
            elements.push(KeyInfoElement::X509IssuerSerial);
        }
        elements
    }

    /// `true` if the declared RSA key value equals `key`.
    #[must_use]
    pub fn matches_rsa_key(&self, key: &RsaKeyValue) -> bool {
        self.rsa_key_value.as_ref() == Some(key)
    }

    /// `true` if any `<X509Data>` carries a certificate byte-wise equal to `certificate`.
    #[must_use]
    pub fn references_certificate(&self, certificate: &[u8]) -> bool {
        self.x509_data
            .iter()
            .any(|data| data.contains_certificate(certificate))
    }

    /// The first `<X509Data>` whose issuer/serial equals `issuer_serial`.
    #[must_use]
    pub fn find_by_issuer_serial(&self, issuer_serial: &IssuerSerial) -> Option<&X509KeyDescriptor> {
        self.x509_data
            .iter()
            .find(|data| data.issuer_serial() == Some(issuer_serial))
    }
}

impl Hash for KeyInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_name.hash(state);
        self.retrieval_method_uri.hash(state);
        self.rsa_key_value.hash(state);
        state.write_usize(self.x509_data.len());
        for data in self.x509_data.iter().filter(|data| !data.is_empty()) {
            data.hash_structure(state);
        }
    }
}

impl HashCode for KeyInfo {}

/// Builder assembling a [`KeyInfo`] in one step.
#[derive(Debug, Clone, Default)]
pub struct KeyInfoBuilder {
    key_name: Option<String>,
    retrieval_method_uri: Option<String>,
    rsa_key_value: Option<RsaKeyValue>,
    x509_data: Vec<X509KeyDescriptor>,
}

impl KeyInfoBuilder {
    /// Set the `<KeyName>` text.
    #[must_use]
    pub fn key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    /// Set the `<RetrievalMethod>` URI.
    #[must_use]
    pub fn retrieval_method_uri(mut self, uri: impl Into<String>) -> Self {
        self.retrieval_method_uri = Some(uri.into());
        self
    }

    /// Set the `<RSAKeyValue>`.
    #[must_use]
    pub fn rsa_key_value(mut self, key: RsaKeyValue) -> Self {
        self.rsa_key_value = Some(key);
        self
    }

    /// Append one `<X509Data>` descriptor.
    #[must_use]
    pub fn x509_data(mut self, data: X509KeyDescriptor) -> Self {
        self.x509_data.push(data);
        self
    }

    /// Finish the value.
    #[must_use]
    pub fn build(self) -> KeyInfo {
        KeyInfo {
            key_name: self.key_name.unwrap_or_default(),
            retrieval_method_uri: self.retrieval_method_uri.unwrap_or_default(),
            rsa_key_value: self.rsa_key_value,
            x509_data: self.x509_data,
        }
    }
}
