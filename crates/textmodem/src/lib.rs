//! Incremental Unicode text encoding and decoding.
//!
//! The core is a streaming UTF-8 validator/decoder that accepts input split
//! at arbitrary byte boundaries: each chunk is walked once, the 1–3 bytes of
//! an unfinished code point are retained across boundaries, and the decoded
//! text is assembled with a single copy of every valid byte. Error handling
//! is pluggable — strict typed errors, U+FFFD replacement, silent dropping,
//! or a caller-supplied policy. ASCII, Latin-1, UTF-16 and UTF-32 round out
//! the codec set.
//!
//! ```rust
//! use textmodem::{decode_utf8, stream_decode_utf8};
//!
//! let text = decode_utf8(&[0x68, 0x69, 0x20, 0xE2, 0x98, 0x83]).unwrap();
//! assert_eq!(text, "hi ☃");
//!
//! // The same bytes, split inside the snowman:
//! let decoding = stream_decode_utf8(&[0x68, 0x69, 0x20, 0xE2]).unwrap();
//! assert_eq!(decoding.produced(), "hi ");
//! assert_eq!(decoding.leftover(), &[0xE2][..]);
//! let decoding = decoding.resume(&[0x98, 0x83]).unwrap();
//! assert_eq!(decoding.produced(), "☃");
//! ```

#![no_std]
#![allow(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod carry;
mod chunk_utils;
mod decode;
mod encode;
mod error;
pub mod machine;
mod policy;
mod segments;
mod text;
mod utf16;
mod utf32;
mod validate;

pub use ascii::{decode_ascii, decode_ascii_prefix, decode_latin1};
pub use carry::Carry;
pub use chunk_utils::produce_chunks;
pub use decode::{
    Decoding, decode_chunk, decode_next_chunk, decode_utf8, decode_utf8_lenient, decode_utf8_with,
    handle_err, stream_decode_utf8, stream_decode_utf8_with,
};
pub use encode::{BuildStep, Escape, Utf8Builder, Utf8EscapedBuilder, encode_utf8};
pub use error::DecodeError;
pub use machine::State;
pub use policy::{
    MSG_INCOMPLETE_UTF8, MSG_INVALID_UTF8, MSG_INVALID_UTF16, MSG_INVALID_UTF32, Policy, PolicyFn,
    REPLACEMENT, ignoring, replacing, strict,
};
pub use segments::{Segment, SegmentStack};
pub use text::Text;
pub use utf16::{
    decode_utf16be, decode_utf16be_with, decode_utf16le, decode_utf16le_with, encode_utf16be,
    encode_utf16le,
};
pub use utf32::{
    decode_utf32be, decode_utf32be_with, decode_utf32le, decode_utf32le_with, encode_utf32be,
    encode_utf32le,
};
pub use validate::{Outcome, validate_chunk, validate_next_chunk};

#[cfg(test)]
mod tests;
