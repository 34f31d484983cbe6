//! Deferred assembly of decoded output.

use alloc::{vec, vec::Vec};

use crate::text::Text;

/// One validated piece of output.
#[derive(Debug, Clone)]
pub enum Segment<'a> {
    /// Already-decoded text.
    Text(Text),
    /// A validated byte range borrowed from a caller's chunk.
    Bytes(&'a [u8]),
    /// Up to four owned bytes: a replacement scalar or the bytes of a code
    /// point that straddled a chunk boundary.
    Inline {
        /// Backing storage.
        buf: [u8; 4],
        /// Occupied length of `buf`.
        len: u8,
    },
}

impl Segment<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Segment::Text(text) => text.as_bytes(),
            Segment::Bytes(bytes) => bytes,
            Segment::Inline { buf, len } => &buf[..*len as usize],
        }
    }
}

/// Append-only accumulator of validated segments.
///
/// The stack owns no chunk bytes: `Bytes` segments borrow from the caller's
/// buffers until [`materialize`](SegmentStack::materialize) copies everything
/// into one contiguous text and releases the borrows. No segment is mutated
/// after it is pushed.
#[derive(Debug, Default)]
pub struct SegmentStack<'a> {
    items: Vec<Segment<'a>>,
    total: usize,
}

impl<'a> SegmentStack<'a> {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total byte length of all pushed segments.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.total
    }

    /// Pushes decoded text. Zero-length texts are dropped.
    pub fn push_text(&mut self, text: Text) {
        if text.is_empty() {
            return;
        }
        self.total += text.len();
        self.items.push(Segment::Text(text));
    }

    /// Pushes a validated byte range. Zero-length ranges are dropped.
    ///
    /// Invariant: `bytes` is a well-formed UTF-8 sequence.
    pub fn push_bytes(&mut self, bytes: &'a [u8]) {
        if bytes.is_empty() {
            return;
        }
        self.total += bytes.len();
        self.items.push(Segment::Bytes(bytes));
    }

    /// Pushes the UTF-8 encoding of one scalar value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_scalar(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let len = c.encode_utf8(&mut buf).len();
        self.total += len;
        self.items.push(Segment::Inline {
            buf,
            len: len as u8,
        });
    }

    /// Pushes up to four owned bytes forming a complete validated sequence.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push_inline(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        debug_assert!(bytes.len() <= 4);
        let mut buf = [0u8; 4];
        buf[..bytes.len()].copy_from_slice(bytes);
        self.total += bytes.len();
        self.items.push(Segment::Inline {
            buf,
            len: bytes.len() as u8,
        });
    }

    /// Assembles every segment into one contiguous text.
    ///
    /// Allocates exactly [`total_bytes`](SegmentStack::total_bytes) and fills
    /// it from the end backwards, walking the segments in reverse push order.
    /// An empty stack yields the canonical empty text.
    #[must_use]
    pub fn materialize(self) -> Text {
        if self.total == 0 {
            return Text::new();
        }
        let mut out = vec![0u8; self.total];
        let mut end = self.total;
        for item in self.items.iter().rev() {
            let bytes = item.as_bytes();
            end -= bytes.len();
            out[end..end + bytes.len()].copy_from_slice(bytes);
        }
        debug_assert_eq!(end, 0);
        Text::from_validated(out)
    }
}
