//! Base64 encoding.

use crate::constants::PAD;
use crate::Variant;

/// Encodes a byte slice to base64 text under the given alphabet variant.
///
/// Input is consumed in groups of 3 bytes packed into a 24-bit accumulator
/// and emitted as four 6-bit symbols, most significant first. When the
/// input length is not a multiple of 3, the final group is completed with
/// one or two `=` padding characters, so the output length is always
/// `4 * ceil(n / 3)`. Encoding cannot fail; the empty input encodes to the
/// empty string.
///
/// # Example
///
/// ```
/// use base64_codec::{encode, Variant};
///
/// assert_eq!(encode(b"Man", Variant::Standard), "TWFu");
/// assert_eq!(encode(b"Ma", Variant::Standard), "TWE=");
/// assert_eq!(encode(b"M", Variant::Standard), "TQ==");
/// ```
pub fn encode(bytes: &[u8], variant: Variant) -> String {
    let symbols = variant.symbols();
    let length = bytes.len();
    let mut out = String::with_capacity((length * 4 / 3) + 4);

    // Tail shape is decided by length % 3 alone, up front.
    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let group = ((bytes[i] as u32) << 16) | ((bytes[i + 1] as u32) << 8) | bytes[i + 2] as u32;
        out.push(symbols[(group >> 18) as usize] as char);
        out.push(symbols[(group >> 12 & 0x3f) as usize] as char);
        out.push(symbols[(group >> 6 & 0x3f) as usize] as char);
        out.push(symbols[(group & 0x3f) as usize] as char);
        i += 3;
    }

    if extra_length == 1 {
        // One leftover byte spans the first two symbols.
        let group = (bytes[base_length] as u32) << 16;
        out.push(symbols[(group >> 18) as usize] as char);
        out.push(symbols[(group >> 12 & 0x3f) as usize] as char);
        out.push(PAD as char);
        out.push(PAD as char);
    } else if extra_length == 2 {
        let group = ((bytes[base_length] as u32) << 16) | ((bytes[base_length + 1] as u32) << 8);
        out.push(symbols[(group >> 18) as usize] as char);
        out.push(symbols[(group >> 12 & 0x3f) as usize] as char);
        out.push(symbols[(group >> 6 & 0x3f) as usize] as char);
        out.push(PAD as char);
    }

    out
}

/// Encodes a byte slice with the standard alphabet (RFC 4648 §4).
///
/// # Example
///
/// ```
/// use base64_codec::encode_standard;
///
/// assert_eq!(encode_standard(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode_standard(bytes: &[u8]) -> String {
    encode(bytes, Variant::Standard)
}

/// Encodes a byte slice with the URL-and-filename-safe alphabet
/// (RFC 4648 §5). Padding is emitted exactly as in the standard variant.
///
/// # Example
///
/// ```
/// use base64_codec::encode_url_safe;
///
/// assert_eq!(encode_url_safe(&[0xfb, 0xff]), "-_8=");
/// ```
pub fn encode_url_safe(bytes: &[u8]) -> String {
    encode(bytes, Variant::UrlSafe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(encode_standard(b""), "");
        assert_eq!(encode_url_safe(b""), "");
    }

    #[test]
    fn rfc_vectors() {
        assert_eq!(encode_standard(b""), "");
        assert_eq!(encode_standard(b"f"), "Zg==");
        assert_eq!(encode_standard(b"fo"), "Zm8=");
        assert_eq!(encode_standard(b"foo"), "Zm9v");
        assert_eq!(encode_standard(b"foob"), "Zm9vYg==");
        assert_eq!(encode_standard(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode_standard(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn tail_padding() {
        assert_eq!(encode_standard(b"Man"), "TWFu");
        assert_eq!(encode_standard(b"Ma"), "TWE=");
        assert_eq!(encode_standard(b"M"), "TQ==");
    }

    #[test]
    fn high_indices_select_variant_symbols() {
        // 0xfb 0xff encodes to indices 62, 63, 63 plus padding.
        assert_eq!(encode_standard(&[0xfb, 0xff]), "+/8=");
        assert_eq!(encode_url_safe(&[0xfb, 0xff]), "-_8=");
    }
}
