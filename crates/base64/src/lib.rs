//! Base64 encoding and decoding (RFC 4648).
//!
//! This crate implements the standard and URL-and-filename-safe base64
//! alphabets as pure functions: each call takes its input and alphabet
//! [`Variant`] explicitly and holds no state between calls. Decoding
//! validates length, alphabet membership, and padding placement, and
//! reports failures as a [`DecodeError`] instead of producing partial
//! output.
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode_standard, Variant};
//!
//! let encoded = encode_standard(b"hello world");
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//!
//! let decoded = decode(&encoded, Variant::Standard).unwrap();
//! assert_eq!(decoded, b"hello world");
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod encode;
mod variant;

pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use decode::decode;
pub use encode::{encode, encode_standard, encode_url_safe};
pub use variant::Variant;

/// Error type for base64 decoding. Encoding cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The encoded length is neither 0 nor a positive multiple of 4.
    #[error("encoded length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A character outside the selected alphabet, and not legally placed
    /// padding, appeared in the input.
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    /// A `=` appeared anywhere other than the last one or two positions
    /// of the final 4-character group.
    #[error("misplaced padding at index {index}")]
    InvalidPadding { index: usize },
}
