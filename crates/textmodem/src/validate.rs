//! Chunk-at-a-time UTF-8 validation.
//!
//! The validators never allocate and never fail: they report the longest
//! well-formed prefix of a chunk together with either the position of an
//! invalid byte or the carry to resume from when the next chunk arrives.

use crate::{
    carry::Carry,
    machine::{self, State},
};

/// How a chunk scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An invalid byte was found. The bytes between the reported prefix end
    /// and `resume` form the error range; scanning may restart at `resume`.
    Invalid {
        /// Index of the next candidate byte.
        resume: usize,
    },
    /// The chunk was exhausted; 0–3 trailing bytes are pending.
    Carry(Carry),
}

/// End of the all-ASCII run starting at `i`, a machine word at a time.
pub(crate) fn ascii_run(bytes: &[u8], mut i: usize) -> usize {
    const LANES: usize = size_of::<u64>();
    while i + LANES <= bytes.len() {
        let mut word = [0u8; LANES];
        word.copy_from_slice(&bytes[i..i + LANES]);
        if u64::from_ne_bytes(word) & 0x8080_8080_8080_8080 != 0 {
            break;
        }
        i += LANES;
    }
    while i < bytes.len() && bytes[i] < 0x80 {
        i += 1;
    }
    i
}

/// Scans `bytes` from the `Start` state.
///
/// Returns the length of the longest well-formed prefix and how the scan
/// ended. On an invalid byte the resume index skips exactly one byte when the
/// offender led a new code point, and points at the offender itself when it
/// broke a multi-byte sequence, since it may itself lead a valid code point.
#[must_use]
pub fn validate_chunk(bytes: &[u8]) -> (usize, Outcome) {
    let mut state = State::Start;
    let mut last_complete = 0;
    let mut i = 0;

    while i < bytes.len() {
        if state.is_complete() {
            i = ascii_run(bytes, i);
            last_complete = i;
            if i == bytes.len() {
                break;
            }
        }
        match machine::step(state, bytes[i]) {
            Some(next) => {
                state = next;
                i += 1;
                if state.is_complete() {
                    last_complete = i;
                }
            }
            None => {
                let resume = if i == last_complete { i + 1 } else { i };
                return (last_complete, Outcome::Invalid { resume });
            }
        }
    }

    (
        last_complete,
        Outcome::Carry(Carry::pending(&bytes[last_complete..], state)),
    )
}

/// Continues a scan across a chunk boundary.
///
/// A negative first component equals `-(carry.len() as isize)` and signals
/// that the pending or erroneous range begins inside the carry rather than in
/// `bytes`. Otherwise it counts the leading bytes of `bytes` — carry
/// completion included — that extend the well-formed output.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn validate_next_chunk(bytes: &[u8], carry: Carry) -> (isize, Outcome) {
    if carry.is_empty() {
        let (n, outcome) = validate_chunk(bytes);
        return (n as isize, outcome);
    }

    let pending = -(carry.len() as isize);
    let mut state = carry.state();
    for (i, &byte) in bytes.iter().enumerate() {
        match machine::step(state, byte) {
            Some(next) if next.is_complete() => {
                let done = i + 1;
                let (n, outcome) = validate_chunk(&bytes[done..]);
                let outcome = match outcome {
                    Outcome::Invalid { resume } => Outcome::Invalid {
                        resume: resume + done,
                    },
                    Outcome::Carry(c) => Outcome::Carry(c),
                };
                return ((done + n) as isize, outcome);
            }
            Some(next) => state = next,
            None => return (pending, Outcome::Invalid { resume: i }),
        }
    }

    (pending, Outcome::Carry(carry.extended(bytes, state)))
}
