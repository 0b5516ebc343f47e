//! Base64 canonicalization helpers shared by the key descriptors.
//!
//! Different producers emit the base64 text of a `KeyInfo` block with different letter case and
//! line wrapping. Comparison code uses an ordinal, ASCII case-insensitive check as an inexpensive
//! proxy for decoding both sides, and the matching hash feed so that strings that compare equal
//! always feed identical bytes into a [`Hasher`].
//!
//! None of the comparison helpers allocate. All of them are total: every `&str`, including the
//! empty string, is a valid input.

use std::hash::Hasher;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{keyinfo::KeyInfoElement, Error, Result};

/// Size of the stack buffer used to upper-case text before feeding it to a hasher.
const HASH_CHUNK: usize = 64;

/// Compare two strings ordinally, ignoring ASCII letter case.
///
/// Rejects on length mismatch before looking at any content. Non-ASCII bytes must match
/// exactly.
///
/// # Examples
///
/// ```rust
/// use dsig_keyinfo::utils::eq_ignore_case;
///
/// assert!(eq_ignore_case("AQAB", "aqab"));
/// assert!(eq_ignore_case("", ""));
/// assert!(!eq_ignore_case("AQAB", "AQABAA"));
/// ```
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.as_bytes().eq_ignore_ascii_case(b.as_bytes())
}

/// Feed `value` into `state` as if it had been upper-cased first.
///
/// The length is written after the content so that adjacent fields cannot shift bytes
/// between each other. For any `a`, `b` with [`eq_ignore_case`]`(a, b)`, both calls
/// produce the same hasher state.
pub fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    let mut buffer = [0u8; HASH_CHUNK];
    for chunk in value.as_bytes().chunks(HASH_CHUNK) {
        let upper = &mut buffer[..chunk.len()];
        upper.copy_from_slice(chunk);
        upper.make_ascii_uppercase();
        state.write(upper);
    }
    state.write_usize(value.len());
}

/// Decode base64 text taken from the content of a `KeyInfo` element.
///
/// ASCII whitespace is ignored, since signed documents frequently wrap long base64 values
/// across lines. Uses the standard alphabet with padding.
///
/// # Arguments
/// * `element` - The element the text came from, reported on failure
/// * `text` - The element's text content
///
/// # Errors
/// Returns [`Error::Base64`] if the text is not valid base64 once whitespace is removed.
pub fn decode_base64(element: KeyInfoElement, text: &str) -> Result<Vec<u8>> {
    let decoded = if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD.decode(compact)
    } else {
        STANDARD.decode(text)
    };

    decoded.map_err(|source| Error::Base64 { element, source })
}

/// Encode raw bytes as standard, padded base64 text.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}
