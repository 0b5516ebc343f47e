use thiserror::Error;

use crate::keyinfo::KeyInfoElement;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Comparing and hashing key descriptors never fails. Errors only arise from the helpers that
/// move between base64 text and raw bytes, and from configuring a
/// [`crate::store::KeyMaterialSet`].
///
/// # Error Categories
///
/// ## Encoding Errors
/// - [`Error::Base64`] - Base64 text carried by a `KeyInfo` element could not be decoded
///
/// ## Configuration Errors
/// - [`Error::Configuration`] - A [`crate::store::KeySetConfig`] failed validation
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::{Error, keyinfo::X509KeyDescriptor};
///
/// match X509KeyDescriptor::from_base64_certificates(["not base64!"]) {
///     Ok(descriptor) => println!("{} certificates", descriptor.certificates().len()),
///     Err(Error::Base64 { element, source }) => {
///         eprintln!("<{}> is not valid base64: {}", element, source);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Base64 text could not be decoded.
    ///
    /// Raised by the decoding helpers on [`crate::keyinfo::RsaKeyValue`] and
    /// [`crate::keyinfo::X509KeyDescriptor`]. The element name identifies which part of the
    /// `KeyInfo` block carried the malformed text.
    ///
    /// # Fields
    ///
    /// * `element` - The `KeyInfo` element whose text failed to decode
    /// * `source` - The underlying decoder error
    #[error("Invalid base64 in <{element}>: {source}")]
    Base64 {
        /// The element that carried the malformed text
        element: KeyInfoElement,
        /// The decoder error
        #[source]
        source: base64::DecodeError,
    },

    /// Invalid configuration.
    ///
    /// Returned by [`crate::store::KeySetConfig::validate`] when a setting cannot be honoured
    /// by the underlying concurrent containers.
    #[error("Invalid configuration - {0}")]
    Configuration(String),
}
