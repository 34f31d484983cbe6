use alloc::{string::String, sync::Arc, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str,
};

use crate::error::DecodeError;

/// An immutable, reference-counted sequence of Unicode scalar values.
///
/// `Text` stores well-formed UTF-8 in a shared heap buffer; cloning never
/// copies the underlying bytes. Every construction path validates the byte
/// range (or is fed by the decoder, which only ever produces validated
/// output), so `as_str` is free.
///
/// # Examples
///
/// ```rust
/// use textmodem::Text;
///
/// let text = Text::from("snow ☃");
/// assert_eq!(text.len(), 8);
/// assert_eq!(&text[5..], "☃");
/// ```
#[derive(Clone)]
pub struct Text {
    buf: Arc<[u8]>,
    start: usize,
    len: usize,
}

impl Text {
    /// The empty text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Arc::from(&b""[..]),
            start: 0,
            len: 0,
        }
    }

    /// Wraps a range of a shared buffer, checking that it is well-formed
    /// UTF-8.
    ///
    /// The buffer is not copied; the text holds a reference to it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidUtf8`] if the range contains a malformed byte,
    /// [`DecodeError::IncompleteUtf8`] if it ends inside a code point.
    ///
    /// # Panics
    ///
    /// Panics if `start + len` is out of bounds of `buf`.
    pub fn from_utf8_shared(buf: Arc<[u8]>, start: usize, len: usize) -> Result<Self, DecodeError> {
        match str::from_utf8(&buf[start..start + len]) {
            Ok(_) => Ok(Self { buf, start, len }),
            Err(err) => Err(match err.error_len() {
                Some(_) => DecodeError::InvalidUtf8 {
                    byte: buf[start + err.valid_up_to()],
                },
                None => DecodeError::IncompleteUtf8,
            }),
        }
    }

    /// Wraps a buffer the decoder has already validated in full.
    ///
    /// Invariant: `buf` is well-formed UTF-8.
    pub(crate) fn from_validated(buf: Vec<u8>) -> Self {
        debug_assert!(str::from_utf8(&buf).is_ok());
        let len = buf.len();
        Self {
            buf: Arc::from(buf),
            start: 0,
            len,
        }
    }

    /// Byte length of the UTF-8 representation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the text contains no scalar values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: the byte range is validated on every construction path.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// The UTF-8 bytes of the text.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..self.start + self.len]
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            buf: Arc::from(s.as_bytes()),
            start: 0,
            len: s.len(),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        let len = s.len();
        Self {
            buf: Arc::from(s.into_bytes()),
            start: 0,
            len,
        }
    }
}

impl From<char> for Text {
    fn from(c: char) -> Self {
        Self::from(c.encode_utf8(&mut [0; 4]) as &str)
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Text> for str {
    fn eq(&self, other: &Text) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == other.as_str()
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
