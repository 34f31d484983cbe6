use alloc::{vec, vec::Vec};

use super::util::recording;
use crate::{
    DecodeError, MSG_INCOMPLETE_UTF8, MSG_INVALID_UTF8, PolicyFn, decode_utf8,
    decode_utf8_lenient, decode_utf8_with, ignoring,
};

#[test]
fn strict_reports_the_offending_byte() {
    assert_eq!(
        decode_utf8(&[0x41, 0xFF, 0x42]),
        Err(DecodeError::InvalidUtf8 { byte: 0xFF })
    );
    assert_eq!(
        decode_utf8(&[0xC0, 0x80]),
        Err(DecodeError::InvalidUtf8 { byte: 0xC0 })
    );
}

#[test]
fn strict_reports_truncated_input() {
    let cases: Vec<&[u8]> = vec![&[0xC3], &[0xE2, 0x98], &[0xF0, 0x9F, 0x92]];
    for bytes in cases {
        assert_eq!(
            decode_utf8(bytes),
            Err(DecodeError::IncompleteUtf8),
            "{bytes:02x?}"
        );
    }
}

#[test]
fn lenient_replaces_each_error_byte() {
    let cases: &[(&[u8], &str)] = &[
        // A bad lead byte costs one replacement.
        (&[0x41, 0xFF, 0x42], "A\u{FFFD}B"),
        // Overlong forms.
        (&[0xC0, 0x80], "\u{FFFD}\u{FFFD}"),
        (&[0xC1, 0xBF], "\u{FFFD}\u{FFFD}"),
        (&[0xE0, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}"),
        (&[0xF0, 0x80, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"),
        // Surrogates.
        (&[0xED, 0xA0, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}"),
        (&[0xED, 0xBF, 0xBF], "\u{FFFD}\u{FFFD}\u{FFFD}"),
        // Above U+10FFFF.
        (&[0xF4, 0x90, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"),
        (&[0xF5, 0x80, 0x80, 0x80], "\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}"),
        // A continuation broken by a valid lead: the lead is re-examined.
        (&[0xE2, 0x98, 0x41], "\u{FFFD}\u{FFFD}A"),
        (&[0xE2, 0x98, 0xE2, 0x98, 0x83], "\u{FFFD}\u{FFFD}☃"),
        // Truncated tails, one replacement per pending byte.
        (&[0xF0], "\u{FFFD}"),
        (&[0xE2, 0x98], "\u{FFFD}\u{FFFD}"),
    ];
    for (bytes, expected) in cases {
        assert_eq!(decode_utf8_lenient(bytes), *expected, "{bytes:02x?}");
    }
}

#[test]
fn exactly_one_policy_call_per_error_byte() {
    let mut calls = Vec::new();
    let text = decode_utf8_with(recording(&mut calls), &[0x41, 0xFF, 0x42]).unwrap();
    assert_eq!(text, "A\u{FFFD}B");
    assert_eq!(calls, vec![(MSG_INVALID_UTF8, Some(0xFF))]);
}

#[test]
fn incomplete_input_walks_the_carry_bytes() {
    let mut calls = Vec::new();
    let text = decode_utf8_with(recording(&mut calls), &[0x41, 0xE2, 0x98]).unwrap();
    assert_eq!(text, "A\u{FFFD}\u{FFFD}");
    assert_eq!(
        calls,
        vec![
            (MSG_INCOMPLETE_UTF8, Some(0xE2)),
            (MSG_INCOMPLETE_UTF8, Some(0x98)),
        ]
    );
}

#[test]
fn ignoring_policy_drops_error_bytes() {
    let text = decode_utf8_with(ignoring as PolicyFn, &[0x41, 0xFF, 0x42, 0xE2]).unwrap();
    assert_eq!(text, "AB");
}

#[test]
fn replacement_scalars_from_policies_are_validated() {
    // Surrogates and out-of-range values are remapped, never accepted.
    for scalar in [0xD800u32, 0xDFFF, 0x11_0000] {
        let policy = move |_msg: &'static str, _byte: Option<u8>| -> Result<Option<u32>, DecodeError> {
            Ok(Some(scalar))
        };
        let text = decode_utf8_with(policy, &[0xFF]).unwrap();
        assert_eq!(text, "\u{FFFD}", "{scalar:#x}");
    }

    // In-range scalars are used as returned.
    let text = decode_utf8_with(
        (|_msg, _byte| Ok(Some(u32::from('?')))) as PolicyFn,
        &[0xFF, 0xFE],
    )
    .unwrap();
    assert_eq!(text, "??");
}

#[test]
fn raising_policy_aborts_with_its_error() {
    let marker = DecodeError::NonAscii {
        byte: 0x99,
        offset: 7,
    };
    let policy = move |_msg: &'static str, _byte: Option<u8>| -> Result<Option<u32>, DecodeError> {
        Err(marker)
    };
    let failed = decode_utf8_with(policy, &[0x41, 0xFF, 0x42]);
    assert_eq!(failed, Err(marker));
}
