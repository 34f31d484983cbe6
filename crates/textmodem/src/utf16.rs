//! UTF-16 codecs, little and big endian.
//!
//! Decoding is a pull pipeline: an iterator lifts bytes into 16-bit code
//! units, `char::decode_utf16` pairs surrogates, and a single-pass writer
//! appends scalars to the output, routing each erroneous code unit through
//! the error policy. Encoding is the inverse and never fails.

use alloc::{string::String, vec::Vec};

use crate::{
    error::DecodeError,
    policy::{self, Policy, PolicyFn},
    text::Text,
};

/// Byte order of a 16- or 32-bit code unit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Little,
    Big,
}

/// Iterator over the complete 16-bit code units of a byte stream.
struct Units<'a> {
    bytes: &'a [u8],
    endian: Endian,
}

impl Iterator for Units<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let (pair, rest) = self.bytes.split_first_chunk::<2>()?;
        self.bytes = rest;
        Some(match self.endian {
            Endian::Little => u16::from_le_bytes(*pair),
            Endian::Big => u16::from_be_bytes(*pair),
        })
    }
}

fn decode_with_endian<P: Policy>(
    policy: &mut P,
    bytes: &[u8],
    endian: Endian,
) -> Result<Text, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    for unit in char::decode_utf16(Units { bytes, endian }) {
        match unit {
            Ok(c) => out.push(c),
            // One error per unpaired surrogate; pairing is retried at the
            // unit that broke the pair.
            Err(_) => policy::handle_unit_err(policy, policy::MSG_INVALID_UTF16, &mut out)?,
        }
    }
    if bytes.len() % 2 != 0 {
        // Truncated final code unit.
        policy::handle_unit_err(policy, policy::MSG_INVALID_UTF16, &mut out)?;
    }
    Ok(Text::from(out))
}

fn encode_with_endian(text: &Text, endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    let mut units = [0u16; 2];
    for c in text.chars() {
        let n = c.encode_utf16(&mut units).len();
        for &unit in &units[..n] {
            let bytes = match endian {
                Endian::Little => unit.to_le_bytes(),
                Endian::Big => unit.to_be_bytes(),
            };
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Decodes UTF-16LE with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises.
pub fn decode_utf16le_with<P: Policy>(mut policy: P, bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_with_endian(&mut policy, bytes, Endian::Little)
}

/// Decodes UTF-16BE with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises.
pub fn decode_utf16be_with<P: Policy>(mut policy: P, bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_with_endian(&mut policy, bytes, Endian::Big)
}

/// Strictly decodes UTF-16LE.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf16`] on an unpaired surrogate or a truncated
/// final code unit.
pub fn decode_utf16le(bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_utf16le_with(policy::strict as PolicyFn, bytes)
}

/// Strictly decodes UTF-16BE.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf16`] on an unpaired surrogate or a truncated
/// final code unit.
pub fn decode_utf16be(bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_utf16be_with(policy::strict as PolicyFn, bytes)
}

/// Encodes `text` as UTF-16LE. Total: texts are well-formed.
#[must_use]
pub fn encode_utf16le(text: &Text) -> Vec<u8> {
    encode_with_endian(text, Endian::Little)
}

/// Encodes `text` as UTF-16BE. Total: texts are well-formed.
#[must_use]
pub fn encode_utf16be(text: &Text) -> Vec<u8> {
    encode_with_endian(text, Endian::Big)
}

#[cfg(test)]
mod tests {
    use super::{decode_utf16be, decode_utf16le, decode_utf16le_with, encode_utf16be, encode_utf16le};
    use crate::{error::DecodeError, policy, text::Text};

    #[test]
    fn snowman_round_trips_in_both_orders() {
        let text = Text::from("☃");
        let le = encode_utf16le(&text);
        assert_eq!(le, [0x03, 0x26]);
        assert_eq!(decode_utf16le(&le).unwrap(), "☃");

        let be = encode_utf16be(&text);
        assert_eq!(be, [0x26, 0x03]);
        assert_eq!(decode_utf16be(&be).unwrap(), "☃");
    }

    #[test]
    fn surrogate_pairs_decode_to_one_scalar() {
        // U+1F496 = D83D DC96.
        let bytes = [0x3D, 0xD8, 0x96, 0xDC];
        assert_eq!(decode_utf16le(&bytes).unwrap(), "💖");
        assert_eq!(encode_utf16le(&Text::from("💖")), bytes);
    }

    #[test]
    fn unpaired_surrogates_error_per_unit() {
        // High surrogate followed by a plain scalar: one error, scalar kept.
        let bytes = [0x3D, 0xD8, 0x41, 0x00];
        assert_eq!(decode_utf16le(&bytes), Err(DecodeError::InvalidUtf16));
        let lenient = decode_utf16le_with(policy::replacing as policy::PolicyFn, &bytes).unwrap();
        assert_eq!(lenient, "\u{FFFD}A");

        // Lone low surrogate.
        let lenient = decode_utf16le_with(policy::replacing as policy::PolicyFn, &[0x96, 0xDC]).unwrap();
        assert_eq!(lenient, "\u{FFFD}");
    }

    #[test]
    fn truncated_final_unit_is_one_error() {
        assert_eq!(decode_utf16le(&[0x41, 0x00, 0x42]), Err(DecodeError::InvalidUtf16));
        let lenient = decode_utf16le_with(policy::replacing as policy::PolicyFn, &[0x41, 0x00, 0x42]).unwrap();
        assert_eq!(lenient, "A\u{FFFD}");
    }
}
