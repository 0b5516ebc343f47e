use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// Child elements of an XML-DSig `<KeyInfo>` block modelled by this crate.
///
/// `Display` renders the XML local name, e.g. `X509IssuerSerial`. Used to name the element in
/// error messages and to report which parts of a [`crate::keyinfo::KeyInfo`] are present.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum KeyInfoElement {
    /// The `<KeyInfo>` block itself
    KeyInfo,
    /// `<KeyName>`
    KeyName,
    /// `<RetrievalMethod>`
    RetrievalMethod,
    /// `<RSAKeyValue>`
    #[strum(serialize = "RSAKeyValue")]
    RsaKeyValue,
    /// `<Modulus>` inside `<RSAKeyValue>`
    Modulus,
    /// `<Exponent>` inside `<RSAKeyValue>`
    Exponent,
    /// `<X509Data>`
    X509Data,
    /// `<X509Certificate>` inside `<X509Data>`
    X509Certificate,
    /// `<X509SKI>` inside `<X509Data>`
    #[strum(serialize = "X509SKI")]
    X509Ski,
    /// `<X509CRL>` inside `<X509Data>`
    #[strum(serialize = "X509CRL")]
    X509Crl,
    /// `<X509IssuerSerial>` inside `<X509Data>`
    X509IssuerSerial,
}
