use thiserror::Error;

/// Decoding failures surfaced by the strict policy and the partial decoders.
///
/// The validators themselves never fail; errors arise only when a policy
/// chooses to raise or when a decoder's input contract is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An invalid byte in a UTF-8 stream.
    #[error("invalid UTF-8 stream (byte {byte:#04x})")]
    InvalidUtf8 {
        /// The offending byte.
        byte: u8,
    },
    /// Input ended in the middle of a UTF-8 code point.
    #[error("incomplete UTF-8 code point at end of input")]
    IncompleteUtf8,
    /// A byte outside the ASCII range in input declared as ASCII.
    #[error("non-ASCII byte {byte:#04x} at offset {offset}")]
    NonAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        offset: usize,
    },
    /// An unpaired surrogate or truncated code unit in a UTF-16 stream.
    #[error("invalid UTF-16 stream")]
    InvalidUtf16,
    /// An out-of-range scalar or truncated code unit in a UTF-32 stream.
    #[error("invalid UTF-32 stream")]
    InvalidUtf32,
}
