//! ASCII and Latin-1 decoding.

use alloc::vec::Vec;

use crate::{error::DecodeError, text::Text, validate::ascii_run};

/// Splits `bytes` at the first byte `>= 0x80`.
///
/// Returns the decoded ASCII prefix and, when the input was not pure ASCII,
/// the first offending byte with its index.
#[must_use]
pub fn decode_ascii_prefix(bytes: &[u8]) -> (Text, Option<(u8, usize)>) {
    let k = ascii_run(bytes, 0);
    let prefix = Text::from_validated(bytes[..k].to_vec());
    (prefix, bytes.get(k).map(|&byte| (byte, k)))
}

/// Decodes input that must be pure ASCII.
///
/// # Errors
///
/// [`DecodeError::NonAscii`] naming the first byte `>= 0x80` and its offset.
pub fn decode_ascii(bytes: &[u8]) -> Result<Text, DecodeError> {
    match decode_ascii_prefix(bytes) {
        (text, None) => Ok(text),
        (_, Some((byte, offset))) => Err(DecodeError::NonAscii { byte, offset }),
    }
}

/// Decodes ISO-8859-1: every byte maps to the scalar of the same value.
///
/// Total. ASCII runs are copied in bulk; each byte `>= 0x80` expands to its
/// two-byte UTF-8 form.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> Text {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    let mut rest = bytes;
    while !rest.is_empty() {
        let run = ascii_run(rest, 0);
        out.extend_from_slice(&rest[..run]);
        rest = &rest[run..];
        if let Some((&byte, tail)) = rest.split_first() {
            out.push(0xC0 | (byte >> 6));
            out.push(0x80 | (byte & 0x3F));
            rest = tail;
        }
    }
    Text::from_validated(out)
}

#[cfg(test)]
mod tests {
    use super::{decode_ascii, decode_ascii_prefix, decode_latin1};
    use crate::error::DecodeError;

    #[test]
    fn ascii_prefix_reports_the_first_offender() {
        let (prefix, rest) = decode_ascii_prefix(&[0x48, 0x69, 0xC3, 0xA9]);
        assert_eq!(prefix, "Hi");
        assert_eq!(rest, Some((0xC3, 2)));

        let (all, rest) = decode_ascii_prefix(b"plain");
        assert_eq!(all, "plain");
        assert_eq!(rest, None);
    }

    #[test]
    fn ascii_decoding_is_partial() {
        assert_eq!(decode_ascii(b"Hi").unwrap(), "Hi");
        assert_eq!(
            decode_ascii(&[0x48, 0x69, 0xC3, 0xA9]),
            Err(DecodeError::NonAscii {
                byte: 0xC3,
                offset: 2
            })
        );
    }

    #[test]
    fn latin1_is_total() {
        let text = decode_latin1(&[0x41, 0xE9]);
        assert_eq!(text, "Aé");
        assert_eq!(text.as_bytes(), &[0x41, 0xC3, 0xA9][..]);

        // Every byte value decodes to the scalar of the same value.
        let all: alloc::vec::Vec<u8> = (0..=u8::MAX).collect();
        let decoded = decode_latin1(&all);
        for (byte, c) in all.iter().zip(decoded.chars()) {
            assert_eq!(u32::from(*byte), u32::from(c));
        }
    }
}
