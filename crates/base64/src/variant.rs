//! Alphabet variant selection and the precomputed inverse lookup tables.

use crate::constants::{ALPHABET, ALPHABET_URL};

/// Inverse of the standard alphabet: symbol byte → 6-bit value.
static INVERSE: [Option<u8>; 128] = invert(ALPHABET);

/// Inverse of the URL-safe alphabet.
static INVERSE_URL: [Option<u8>; 128] = invert(ALPHABET_URL);

const fn invert(symbols: &[u8; 64]) -> [Option<u8>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < 64 {
        table[symbols[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

/// Which RFC 4648 alphabet governs an encode or decode call.
///
/// The two variants differ only in the symbols at indices 62 and 63;
/// padding behaves identically under both. A `Variant` carries no state,
/// so calls may run concurrently without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `+` and `/` at indices 62 and 63 (RFC 4648 §4).
    Standard,
    /// `-` and `_` at indices 62 and 63 (RFC 4648 §5).
    UrlSafe,
}

impl Variant {
    /// The 64-symbol alphabet table for this variant.
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Variant::Standard => ALPHABET,
            Variant::UrlSafe => ALPHABET_URL,
        }
    }

    /// Resolves a symbol byte to its 6-bit value, in O(1) via the
    /// precomputed inverse table.
    ///
    /// Returns `None` for any byte outside this variant's alphabet,
    /// including the padding byte `=`. A failed lookup must short-circuit
    /// decoding; it is never substituted with a numeric fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_codec::Variant;
    ///
    /// assert_eq!(Variant::Standard.index_of(b'A'), Some(0));
    /// assert_eq!(Variant::Standard.index_of(b'/'), Some(63));
    /// assert_eq!(Variant::UrlSafe.index_of(b'_'), Some(63));
    /// assert_eq!(Variant::UrlSafe.index_of(b'/'), None);
    /// assert_eq!(Variant::Standard.index_of(b'='), None);
    /// ```
    pub fn index_of(self, symbol: u8) -> Option<u8> {
        let table = match self {
            Variant::Standard => &INVERSE,
            Variant::UrlSafe => &INVERSE_URL,
        };
        if symbol < 128 {
            table[symbol as usize]
        } else {
            None
        }
    }
}
