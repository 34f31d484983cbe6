//! High-level UTF-8 decoding.
//!
//! The decoders drive the chunk validator, commit validated ranges to a
//! [`SegmentStack`], and walk malformed ranges through the error policy, so
//! every valid byte is copied exactly once no matter how the input was
//! chunked.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use core::fmt;

use crate::{
    carry::Carry,
    error::DecodeError,
    policy::{self, Policy, PolicyFn, REPLACEMENT},
    segments::SegmentStack,
    text::Text,
    validate::{Outcome, validate_next_chunk},
};

/// Walks the error byte range `[err_start, err_end)` and applies `policy`.
///
/// Indices are virtual: `-carry.len()..0` addresses the carry's pending
/// bytes, `0..` addresses `bytes`, so a continuation error that began before
/// the chunk boundary is enumerated without concatenating any buffers.
/// Replacement scalars returned by the policy are pushed onto `stack`;
/// surrogates and out-of-range values are remapped to U+FFFD.
///
/// # Errors
///
/// Propagates the policy's error, aborting the decode.
pub fn handle_err<'a, P: Policy>(
    policy: &mut P,
    msg: &'static str,
    err_start: isize,
    err_end: isize,
    carry: &Carry,
    bytes: &'a [u8],
    stack: &mut SegmentStack<'a>,
) -> Result<(), DecodeError> {
    debug_assert!(-(carry.len() as isize) <= err_start && err_start <= err_end);
    for pos in err_start..err_end {
        let byte = if pos < 0 {
            carry.bytes()[(carry.len() as isize + pos) as usize]
        } else {
            bytes[pos as usize]
        };
        if let Some(scalar) = policy.handle(msg, Some(byte))? {
            stack.push_scalar(char::from_u32(scalar).unwrap_or(REPLACEMENT));
        }
    }
    Ok(())
}

/// Validates the next chunk and commits the carry plus validated prefix.
///
/// Returns what [`validate_next_chunk`] returns; when the validated end is
/// non-negative, the carried bytes and `bytes[..end]` have been pushed onto
/// `stack`.
pub fn decode_next_chunk<'a>(
    bytes: &'a [u8],
    carry: Carry,
    stack: &mut SegmentStack<'a>,
) -> (isize, Outcome) {
    let (end, outcome) = validate_next_chunk(bytes, carry);
    if end >= 0 {
        stack.push_inline(carry.bytes());
        stack.push_bytes(&bytes[..end as usize]);
    }
    (end, outcome)
}

/// [`decode_next_chunk`] from a clean start.
pub fn decode_chunk<'a>(bytes: &'a [u8], stack: &mut SegmentStack<'a>) -> (isize, Outcome) {
    decode_next_chunk(bytes, Carry::empty(), stack)
}

/// Decodes all of `bytes`, restarting after each error range, and returns
/// the carry left at the end of the chunk.
fn decode_loop<'a, P: Policy>(
    policy: &mut P,
    mut bytes: &'a [u8],
    mut carry: Carry,
    stack: &mut SegmentStack<'a>,
) -> Result<Carry, DecodeError> {
    loop {
        let (end, outcome) = decode_next_chunk(bytes, carry, stack);
        match outcome {
            Outcome::Carry(next) => return Ok(next),
            Outcome::Invalid { resume } => {
                handle_err(
                    policy,
                    policy::MSG_INVALID_UTF8,
                    end,
                    resume as isize,
                    &carry,
                    bytes,
                    stack,
                )?;
                bytes = &bytes[resume..];
                carry = Carry::empty();
            }
        }
    }
}

/// Reports any pending carry bytes as an incomplete code point.
fn finalize<P: Policy>(
    policy: &mut P,
    carry: &Carry,
    stack: &mut SegmentStack<'_>,
) -> Result<(), DecodeError> {
    if carry.is_empty() {
        return Ok(());
    }
    handle_err(
        policy,
        policy::MSG_INCOMPLETE_UTF8,
        -(carry.len() as isize),
        0,
        carry,
        &[],
        stack,
    )
}

/// Decodes `bytes` with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises; no partial output is
/// returned.
pub fn decode_utf8_with<P: Policy>(mut policy: P, bytes: &[u8]) -> Result<Text, DecodeError> {
    let mut stack = SegmentStack::new();
    let carry = decode_loop(&mut policy, bytes, Carry::empty(), &mut stack)?;
    finalize(&mut policy, &carry, &mut stack)?;
    Ok(stack.materialize())
}

/// Strict decoding: any malformed input is a typed error.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf8`] naming the first malformed byte, or
/// [`DecodeError::IncompleteUtf8`] when input ends inside a code point.
pub fn decode_utf8(bytes: &[u8]) -> Result<Text, DecodeError> {
    decode_utf8_with(policy::strict as PolicyFn, bytes)
}

/// Lenient decoding: one U+FFFD per malformed byte. Total.
#[must_use]
pub fn decode_utf8_lenient(bytes: &[u8]) -> Text {
    match decode_utf8_with(policy::replacing as PolicyFn, bytes) {
        Ok(text) => text,
        // `replacing` never raises.
        Err(_) => unreachable!(),
    }
}

/// A paused streaming decode.
///
/// Holds the text produced by the most recent chunk, an independent copy of
/// the 0–3 bytes retained across the boundary, and the policy in force for
/// the rest of the stream. Input slices may be dropped as soon as the call
/// that consumed them returns.
pub struct Decoding<P> {
    produced: Text,
    carry: Carry,
    policy: P,
}

impl<P> fmt::Debug for Decoding<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoding")
            .field("produced", &self.produced)
            .field("leftover", &self.carry.bytes())
            .finish_non_exhaustive()
    }
}

impl<P: Policy> Decoding<P> {
    /// The text decoded from the most recent chunk.
    #[must_use]
    pub fn produced(&self) -> &Text {
        &self.produced
    }

    /// The bytes of an incomplete trailing code point, retained until the
    /// next chunk arrives.
    #[must_use]
    pub fn leftover(&self) -> &[u8] {
        self.carry.bytes()
    }

    /// Decodes the next chunk, continuing from the retained carry.
    ///
    /// # Errors
    ///
    /// Propagates the policy's error; the stream cannot be resumed after
    /// that.
    pub fn resume(mut self, bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut stack = SegmentStack::new();
        let carry = decode_loop(&mut self.policy, bytes, self.carry, &mut stack)?;
        Ok(Self {
            produced: stack.materialize(),
            carry,
            policy: self.policy,
        })
    }

    /// Ends the stream, applying end-of-input handling to any pending carry,
    /// and returns the text that produces.
    ///
    /// # Errors
    ///
    /// A strictly-policed stream fails here when bytes are still pending.
    pub fn finish(mut self) -> Result<Text, DecodeError> {
        let mut stack = SegmentStack::new();
        finalize(&mut self.policy, &self.carry, &mut stack)?;
        Ok(stack.materialize())
    }
}

/// Starts a streaming decode with a caller-supplied error policy.
///
/// # Errors
///
/// Propagates the first error the policy raises on this chunk.
pub fn stream_decode_utf8_with<P: Policy>(
    mut policy: P,
    bytes: &[u8],
) -> Result<Decoding<P>, DecodeError> {
    let mut stack = SegmentStack::new();
    let carry = decode_loop(&mut policy, bytes, Carry::empty(), &mut stack)?;
    Ok(Decoding {
        produced: stack.materialize(),
        carry,
        policy,
    })
}

/// Starts a strict streaming decode.
///
/// # Errors
///
/// [`DecodeError::InvalidUtf8`] if this chunk contains a malformed byte. An
/// incomplete trailing code point is not an error until
/// [`finish`](Decoding::finish).
pub fn stream_decode_utf8(bytes: &[u8]) -> Result<Decoding<PolicyFn>, DecodeError> {
    stream_decode_utf8_with(policy::strict as PolicyFn, bytes)
}
