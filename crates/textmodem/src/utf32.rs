//! UTF-32 codecs, little and big endian.
//!
//! Each 4-byte code unit either is a Unicode scalar value or goes through
//! the error policy; surrogates and values above U+10FFFF are rejected by
//! `char::from_u32`. Encoding writes one unit per scalar and never fails.

use alloc::{string::String, vec::Vec};

use crate::{
    error::DecodeError,
    policy::{self, Policy, PolicyFn},
    text::Text,
    utf16::Endian,
};

fn decode_with_endian<P: Policy>(
    policy: &mut P,
    bytes: &[u8],
    endian: Endian,
) -> Result<Text, DecodeError> {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while let Some((quad, tail)) = rest.split_first_chunk::<4>() {
        rest = tail;
        let value = match endian {
            Endian::Little => u32::from_le_bytes(*quad),
            Endian::Big => u32::from_be_bytes(*quad),
        };
        match char::from_u32(value) {
            Some(c) => out.push(c),
            None => policy::handle_unit_err(policy, policy::MSG_INVALID_UTF32, &mut out)?,
        }
    }
    if !rest.is_empty() {
        // Truncated final code unit.
        policy::handle_unit_err(policy, policy::MSG_INVALID_UTF32, &mut out)?;
    }
    Ok(Text::from(out))
}

fn encode_with_endian(text: &Text, endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 4);
    for c in text.chars() {
        let bytes = match endian {
            Endian::Little => u32::from(c).to_le_bytes(),
            Endian::Big => u32::from(c).to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
    out
}

/// Decodes UTF-32LE with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises.
pub fn decode_utf32le_with<P: Policy>(mut policy: P, bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_with_endian(&mut policy, bytes, Endian::Little)
}

/// Decodes UTF-32BE with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises.
pub fn decode_utf32be_with<P: Policy>(mut policy: P, bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_with_endian(&mut policy, bytes, Endian::Big)
}

/// Strictly decodes UTF-32LE.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf32`] on a surrogate, an out-of-range value, or a
/// truncated final code unit.
pub fn decode_utf32le(bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_utf32le_with(policy::strict as PolicyFn, bytes)
}

/// Strictly decodes UTF-32BE.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf32`] on a surrogate, an out-of-range value, or a
/// truncated final code unit.
pub fn decode_utf32be(bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_utf32be_with(policy::strict as PolicyFn, bytes)
}

/// Encodes `text` as UTF-32LE. Total: texts are well-formed.
#[must_use]
pub fn encode_utf32le(text: &Text) -> Vec<u8> {
    encode_with_endian(text, Endian::Little)
}

/// Encodes `text` as UTF-32BE. Total: texts are well-formed.
#[must_use]
pub fn encode_utf32be(text: &Text) -> Vec<u8> {
    encode_with_endian(text, Endian::Big)
}
