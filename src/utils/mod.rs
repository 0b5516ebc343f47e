//! Shared helpers for comparing and hashing key descriptors.
//!
//! - `encoding` - Case-insensitive base64 comparison, hash feeding, and decode/encode helpers
//! - `hashcode` - The [`HashCode`] trait and the process-wide hasher behind it

mod encoding;
mod hashcode;

pub use encoding::{decode_base64, encode_base64, eq_ignore_case, hash_ignore_case};
pub use hashcode::{process_hasher, HashCode};

pub(crate) use hashcode::next_instance_salt;
