//! Error policies.
//!
//! A policy decides what happens at each malformed position of a decode:
//! raise a typed error, substitute a replacement scalar, drop the offending
//! unit, or anything a caller-supplied closure chooses.

use alloc::string::String;

use crate::error::DecodeError;

/// The replacement character substituted for malformed input.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Message passed to policies for an invalid byte in a UTF-8 stream.
pub const MSG_INVALID_UTF8: &str = "Invalid UTF-8 stream";

/// Message passed to policies when input ends inside a UTF-8 code point.
pub const MSG_INCOMPLETE_UTF8: &str = "Incomplete UTF-8 code point";

/// Message passed to policies for a malformed UTF-16 code unit.
pub const MSG_INVALID_UTF16: &str = "Invalid UTF-16 stream";

/// Message passed to policies for a malformed UTF-32 code unit.
pub const MSG_INVALID_UTF32: &str = "Invalid UTF-32 stream";

/// Maps one erroneous unit to an optional replacement scalar, or raises.
///
/// `byte` is the offending byte where the error unit is a single byte
/// (UTF-8) and `None` for the wider UTF-16/UTF-32 code units. A returned
/// scalar in the surrogate range or above U+10FFFF is remapped to U+FFFD by
/// the decoder rather than silently accepted.
///
/// Implemented by every `FnMut(&'static str, Option<u8>) ->
/// Result<Option<u32>, DecodeError>`, so plain closures work; capture state
/// in the closure to observe the error sequence.
pub trait Policy {
    /// Handles one erroneous unit.
    ///
    /// # Errors
    ///
    /// Any error aborts the decode that invoked the policy; partial output is
    /// discarded.
    fn handle(&mut self, msg: &'static str, byte: Option<u8>) -> Result<Option<u32>, DecodeError>;
}

impl<F> Policy for F
where
    F: FnMut(&'static str, Option<u8>) -> Result<Option<u32>, DecodeError>,
{
    fn handle(&mut self, msg: &'static str, byte: Option<u8>) -> Result<Option<u32>, DecodeError> {
        self(msg, byte)
    }
}

/// Signature of the built-in policies; usable wherever a [`Policy`] is.
pub type PolicyFn = fn(&'static str, Option<u8>) -> Result<Option<u32>, DecodeError>;

/// Raises a typed error at the first malformed unit.
///
/// # Errors
///
/// Always fails, classifying the error by `msg`.
pub fn strict(msg: &'static str, byte: Option<u8>) -> Result<Option<u32>, DecodeError> {
    Err(match (msg, byte) {
        (MSG_INCOMPLETE_UTF8, _) => DecodeError::IncompleteUtf8,
        (MSG_INVALID_UTF16, _) => DecodeError::InvalidUtf16,
        (MSG_INVALID_UTF32, _) => DecodeError::InvalidUtf32,
        (_, Some(byte)) => DecodeError::InvalidUtf8 { byte },
        // The drivers pass the offending byte with every per-byte message; a
        // byte-less call is an end-of-input condition.
        (_, None) => DecodeError::IncompleteUtf8,
    })
}

/// Replaces every malformed unit with U+FFFD.
///
/// # Errors
///
/// Never fails.
pub fn replacing(_msg: &'static str, _byte: Option<u8>) -> Result<Option<u32>, DecodeError> {
    Ok(Some(REPLACEMENT as u32))
}

/// Drops malformed units without replacement.
///
/// # Errors
///
/// Never fails.
pub fn ignoring(_msg: &'static str, _byte: Option<u8>) -> Result<Option<u32>, DecodeError> {
    Ok(None)
}

/// Applies `policy` to one erroneous code unit, appending any replacement.
pub(crate) fn handle_unit_err<P: Policy>(
    policy: &mut P,
    msg: &'static str,
    out: &mut String,
) -> Result<(), DecodeError> {
    if let Some(scalar) = policy.handle(msg, None)? {
        out.push(char::from_u32(scalar).unwrap_or(REPLACEMENT));
    }
    Ok(())
}
