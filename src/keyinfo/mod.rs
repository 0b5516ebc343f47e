//! Key descriptor value objects for XML-DSig `<KeyInfo>` blocks.
//!
//! The types in this module are produced by whatever parses a signed document's `<KeyInfo>`
//! element and are consumed by signature-validation code that needs to decide whether two
//! independently parsed descriptors name the same key. Each type offers structural equality
//! through [`PartialEq`] and a process-stable hash through [`crate::utils::HashCode`].
//!
//! # XML-DSig References
//!
//! - **Section 4.5**: The KeyInfo element
//! - **Section 4.5.2.2**: The RSAKeyValue element
//! - **Section 4.5.4**: The X509Data element
//!
//! See: <https://www.w3.org/TR/xmldsig-core1/>
//!
//! # Key Components
//!
//! - [`RsaKeyValue`] - Base64 modulus/exponent pair, compared case-insensitively
//! - [`IssuerSerial`] - Issuer name and serial number, compared exactly
//! - [`X509KeyDescriptor`] - Certificates, SKI, CRL and issuer/serial of one `<X509Data>`
//! - [`KeyInfo`] - Everything one `<KeyInfo>` block declares
//! - [`KeyInfoElement`] - Element names used for reporting
//!
//! # Hash Contract
//!
//! [`RsaKeyValue`], [`IssuerSerial`] and [`KeyInfo`] guarantee that equal values produce equal
//! hash codes. [`X509KeyDescriptor`] guarantees it for non-empty descriptors only; empty
//! descriptors hash a per-construction salt. Read its documentation before using it as a key.
//!
//! # Thread Safety
//!
//! All values are immutable once built and are [`Send`] and [`Sync`]. Builders are plain
//! owned values; nothing is shared until [`X509KeyDescriptorBuilder::build`] or
//! [`KeyInfoBuilder::build`] returns.

mod element;
mod issuer_serial;
mod key_info;
mod rsa;
mod x509;

pub use element::KeyInfoElement;
pub use issuer_serial::IssuerSerial;
pub use key_info::{KeyInfo, KeyInfoBuilder};
pub use rsa::RsaKeyValue;
pub use x509::{X509KeyDescriptor, X509KeyDescriptorBuilder};
