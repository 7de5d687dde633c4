//! Validating base64 decoding.

use crate::constants::PAD;
use crate::{DecodeError, Variant};

/// Decodes base64 text under the given alphabet variant.
///
/// The input must be empty or have a length that is a multiple of 4. Every
/// character must belong to the variant's alphabet, except that the final
/// group may end in one or two `=` padding characters; each trailing `=`
/// drops one byte from the final group's output. A symbol that resolves to
/// nothing aborts decoding with an error rather than contributing a
/// fallback value to the output.
///
/// # Errors
///
/// * [`DecodeError::InvalidLength`] — length is neither 0 nor a positive
///   multiple of 4.
/// * [`DecodeError::InvalidCharacter`] — a byte outside the alphabet that
///   is not legally placed padding.
/// * [`DecodeError::InvalidPadding`] — `=` anywhere but the last one or
///   two positions of the whole input.
///
/// # Example
///
/// ```
/// use base64_codec::{decode, DecodeError, Variant};
///
/// assert_eq!(decode("TWFu", Variant::Standard).unwrap(), b"Man");
/// assert_eq!(decode("TWE=", Variant::Standard).unwrap(), b"Ma");
/// assert_eq!(
///     decode("TWF", Variant::Standard),
///     Err(DecodeError::InvalidLength { length: 3 })
/// );
/// ```
pub fn decode(text: &str, variant: Variant) -> Result<Vec<u8>, DecodeError> {
    let encoded = text.as_bytes();
    let length = encoded.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if length % 4 != 0 {
        return Err(DecodeError::InvalidLength { length });
    }

    // Trailing padding of the whole input; any other '=' placement is
    // caught by resolve() below.
    let padding = if encoded[length - 1] == PAD {
        if encoded[length - 2] == PAD {
            2
        } else {
            1
        }
    } else {
        0
    };

    let main_length = if padding > 0 { length - 4 } else { length };
    let mut out = Vec::with_capacity(length / 4 * 3 - padding);

    let mut i = 0;
    while i < main_length {
        let group = (resolve(encoded[i], i, variant)? << 18)
            | (resolve(encoded[i + 1], i + 1, variant)? << 12)
            | (resolve(encoded[i + 2], i + 2, variant)? << 6)
            | resolve(encoded[i + 3], i + 3, variant)?;
        out.push((group >> 16) as u8);
        out.push((group >> 8) as u8);
        out.push(group as u8);
        i += 4;
    }

    if padding == 1 {
        // Three data symbols recover two bytes; the low 2 bits are discarded.
        let group = (resolve(encoded[i], i, variant)? << 18)
            | (resolve(encoded[i + 1], i + 1, variant)? << 12)
            | (resolve(encoded[i + 2], i + 2, variant)? << 6);
        out.push((group >> 16) as u8);
        out.push((group >> 8) as u8);
    } else if padding == 2 {
        // Two data symbols recover one byte; the low 4 bits are discarded.
        let group =
            (resolve(encoded[i], i, variant)? << 18) | (resolve(encoded[i + 1], i + 1, variant)? << 12);
        out.push((group >> 16) as u8);
    }

    Ok(out)
}

/// Resolves one symbol byte to its 6-bit value, widened for accumulator
/// packing. Misplaced padding and unknown bytes are distinguished so the
/// caller reports the right error.
fn resolve(symbol: u8, index: usize, variant: Variant) -> Result<u32, DecodeError> {
    match variant.index_of(symbol) {
        Some(value) => Ok(value as u32),
        None if symbol == PAD => Err(DecodeError::InvalidPadding { index }),
        None => Err(DecodeError::InvalidCharacter {
            character: symbol as char,
            index,
        }),
    }
}
