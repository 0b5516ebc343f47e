use std::fmt;

use crate::utils::HashCode;

/// Issuer distinguished name and serial number identifying a certificate.
///
/// Corresponds to `<X509IssuerSerial>`. Both parts are kept as the opaque strings found in the
/// document; no DN normalisation or serial-number parsing takes place.
///
/// # Equality Semantics
///
/// Two values are equal if and only if both strings are equal byte for byte. Comparison is
/// case-sensitive. Equal values always have equal hash codes, which matters because this type
/// is hashed as part of [`crate::keyinfo::X509KeyDescriptor`].
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::keyinfo::IssuerSerial;
///
/// let first = IssuerSerial::new("IssuerName", "SerialNumber");
/// let second = IssuerSerial::new("IssuerName", "SerialNumber");
/// assert_eq!(first, second);
/// assert_ne!(first, IssuerSerial::new("issuername", "SerialNumber"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IssuerSerial {
    issuer_name: String,
    serial_number: String,
}

impl IssuerSerial {
    /// Create a new issuer/serial pair.
    pub fn new(issuer_name: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            issuer_name: issuer_name.into(),
            serial_number: serial_number.into(),
        }
    }

    /// Issuer distinguished name, as found in `<X509IssuerName>`.
    #[must_use]
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// Serial number, as found in `<X509SerialNumber>`.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// `true` when both parts are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issuer_name.is_empty() && self.serial_number.is_empty()
    }
}

impl HashCode for IssuerSerial {}

impl fmt::Display for IssuerSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, SerialNumber={}", self.issuer_name, self.serial_number)
    }
}
