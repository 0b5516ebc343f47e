// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dsig-keyinfo
//!
//! Equality, identity and hashing for the key descriptors of an XML digital-signature
//! `<KeyInfo>` block. The value objects in this crate are handed over fully built by whatever
//! parses the signed document, and are then compared to deduplicate resolved trust material,
//! to match a signature's declared key against a trust store, and to key hashed lookup
//! structures in a validation pipeline.
//!
//! ## Features
//!
//! - **Encoding-tolerant equality** - Base64 RSA components compare case-insensitively without
//!   decoding or allocating
//! - **Process-stable hashing** - Hash codes keyed with per-process randomness, so adversarial
//!   certificate bytes cannot be crafted to collide
//! - **Explicit hash contract** - The one deliberate deviation (empty X.509 descriptors) is
//!   documented on the type and handled by every container in the crate
//! - **Immutable values** - Builders produce finished values; nothing is mutated after
//!   publication, so values are freely shared across threads
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use dsig_keyinfo::prelude::*;
//!
//! let declared = RsaKeyValue::new("rCz8Sn3GGXmikH2M", "AQAB");
//! let trusted = RsaKeyValue::new("RCZ8SN3GGXMIKH2M", "aqab");
//!
//! assert_eq!(declared, trusted);
//! assert_eq!(declared.hash_code(), trusted.hash_code());
//! ```
//!
//! ### X.509 Descriptors
//!
//! ```rust
//! use dsig_keyinfo::prelude::*;
//!
//! let parsed = X509KeyDescriptor::builder()
//!     .certificate(vec![0x30, 0x82, 0x01, 0x0A])
//!     .issuer_serial(IssuerSerial::new("CN=Test CA", "42"))
//!     .build();
//! let trusted = X509KeyDescriptor::builder()
//!     .certificate(vec![0x30, 0x82, 0x01, 0x0A])
//!     .issuer_serial(IssuerSerial::new("CN=Test CA", "42"))
//!     .build();
//!
//! assert_eq!(parsed, trusted);
//! assert_eq!(parsed.hash_code(), trusted.hash_code());
//! ```
//!
//! ### Deduplicating Trust Material
//!
//! ```rust
//! use dsig_keyinfo::prelude::*;
//!
//! let set = KeyMaterialSet::with_config(KeySetConfig::minimal())?;
//! let key_info = KeyInfo::builder()
//!     .rsa_key_value(RsaKeyValue::new("rCz8", "AQAB"))
//!     .x509_data(X509KeyDescriptor::new())
//!     .build();
//!
//! assert_eq!(set.insert_key_info(&key_info), 2);
//! assert_eq!(set.insert_key_info(&key_info), 0);
//! # Ok::<(), dsig_keyinfo::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`keyinfo`] - The key descriptor value objects and their equality/hash rules
//! - [`utils`] - Case-insensitive base64 helpers and the [`utils::HashCode`] trait
//! - [`store`] - Concurrent containers keyed by key descriptors
//! - [`Error`] and [`Result`] - Error handling for the few fallible helpers
//!
//! ## Scope
//!
//! XML parsing, canonicalization, signature verification and certificate-chain validation
//! belong to the caller. This crate never parses DER, never checks that an RSA key is
//! well-formed, and performs no cryptographic operation.
//!
//! ## Error Handling
//!
//! Comparisons and hashing never fail. Decoding helpers and configuration return
//! [`Result<T, Error>`](Result):
//!
//! ```rust
//! use dsig_keyinfo::{Error, keyinfo::RsaKeyValue};
//!
//! match RsaKeyValue::new("not base64!", "AQAB").modulus_bytes() {
//!     Ok(bytes) => println!("{} modulus bytes", bytes.len()),
//!     Err(Error::Base64 { element, .. }) => println!("bad <{}>", element),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dsig_keyinfo::prelude::*;
///
/// let first = IssuerSerial::new("IssuerName", "SerialNumber");
/// let second = IssuerSerial::new("IssuerName", "SerialNumber");
/// assert_eq!(first.hash_code(), second.hash_code());
/// ```
pub mod prelude;

pub mod keyinfo;

pub mod store;

pub mod utils;

/// `dsig-keyinfo` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dsig-keyinfo` Error type
///
/// Returned by the decoding helpers and by container configuration.
pub use error::Error;
