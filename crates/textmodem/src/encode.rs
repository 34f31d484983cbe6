//! UTF-8 output: buffer copies and resumable builders.
//!
//! The builders write into caller-supplied buffers and report, instead of
//! recursing into a continuation, whether they finished or how much space the
//! next buffer must offer. The caller drives: allocate, step, repeat.

use alloc::vec::Vec;

use crate::text::Text;

/// The UTF-8 bytes of `text` as a fresh buffer.
#[must_use]
pub fn encode_utf8(text: &Text) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Outcome of one builder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    /// All output has been written.
    Done {
        /// Bytes produced by this step.
        written: usize,
    },
    /// The output buffer is full; call again with at least `min` free bytes.
    NeedMore {
        /// Bytes produced by this step.
        written: usize,
        /// Minimum capacity of the next buffer.
        min: usize,
    },
}

/// Copies a text into caller-supplied buffers, chunking across buffer-full
/// boundaries.
#[derive(Debug, Clone)]
pub struct Utf8Builder {
    text: Text,
    pos: usize,
}

impl Utf8Builder {
    /// A builder over the bytes of `text`.
    #[must_use]
    pub fn new(text: Text) -> Self {
        Self { text, pos: 0 }
    }

    /// Writes as much pending output into `out` as fits.
    pub fn step(&mut self, out: &mut [u8]) -> BuildStep {
        let rest = &self.text.as_bytes()[self.pos..];
        let n = rest.len().min(out.len());
        out[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        if n == rest.len() {
            BuildStep::Done { written: n }
        } else {
            BuildStep::NeedMore { written: n, min: 1 }
        }
    }
}

/// A bounded serialiser for ASCII bytes.
///
/// `write` must never produce more than `size_bound()` bytes; the escaped
/// builder checks its remaining space against that bound before every scalar.
pub trait Escape {
    /// Maximum bytes one `write` call may produce. Must be non-zero.
    fn size_bound(&self) -> usize;

    /// Serialises `byte` into the front of `out`, returning the length used.
    ///
    /// `out` is always at least `size_bound()` bytes long.
    fn write(&mut self, byte: u8, out: &mut [u8]) -> usize;
}

/// Copies a text into caller-supplied buffers, passing every ASCII byte
/// through a caller escape primitive and copying non-ASCII scalars verbatim.
#[derive(Debug, Clone)]
pub struct Utf8EscapedBuilder<E> {
    escape: E,
    text: Text,
    pos: usize,
    bound: usize,
}

impl<E: Escape> Utf8EscapedBuilder<E> {
    /// A builder over the scalars of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `escape.size_bound()` is zero.
    #[must_use]
    pub fn new(escape: E, text: Text) -> Self {
        assert!(
            escape.size_bound() > 0,
            "escape primitive must have a non-zero size bound"
        );
        let bound = escape.size_bound().max(4);
        Self {
            escape,
            text,
            pos: 0,
            bound,
        }
    }

    /// Writes as many pending scalars into `out` as fit.
    ///
    /// Each scalar needs up to `max(4, size_bound)` free bytes; when less
    /// remains, the step reports what the next buffer must offer.
    pub fn step(&mut self, out: &mut [u8]) -> BuildStep {
        let mut written = 0;
        loop {
            let rest = &self.text.as_str()[self.pos..];
            let Some(c) = rest.chars().next() else {
                return BuildStep::Done { written };
            };
            if out.len() - written < self.bound {
                return BuildStep::NeedMore {
                    written,
                    min: self.bound,
                };
            }
            let slot = &mut out[written..];
            written += if c.is_ascii() {
                let n = self.escape.write(c as u8, slot);
                debug_assert!(n <= self.bound);
                n
            } else {
                let encoded = &rest.as_bytes()[..c.len_utf8()];
                slot[..encoded.len()].copy_from_slice(encoded);
                encoded.len()
            };
            self.pos += c.len_utf8();
        }
    }
}
