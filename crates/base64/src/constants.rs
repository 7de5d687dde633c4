//! The two RFC 4648 base64 alphabets and the padding symbol.

/// Standard base64 alphabet (RFC 4648 §4).
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-and-filename-safe alphabet (RFC 4648 §5). Differs from the standard
/// alphabet only at indices 62 and 63: `-` and `_` instead of `+` and `/`.
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding byte. Marks that the final 4-character group encodes fewer than
/// 3 bytes; never a data-bearing symbol.
pub const PAD: u8 = b'=';
