#![no_main]

use libfuzzer_sys::fuzz_target;
use textmodem::{
    PolicyFn, decode_utf8, decode_utf8_lenient, replacing, stream_decode_utf8_with,
};

/// Split the tail of the fuzz input into deterministic pseudo-random chunks
/// (derived from the leading seed bytes) and check that streaming decoding
/// agrees with one-shot decoding, and strict decoding with the standard
/// library.
fn check(data: &[u8]) {
    if data.len() < 4 {
        return;
    }
    let split_seed = u32::from_le_bytes(data[..4].try_into().unwrap()) as usize;
    let data = &data[4..];

    match (decode_utf8(data), core::str::from_utf8(data)) {
        (Ok(text), Ok(s)) => assert_eq!(text.as_str(), s),
        (Err(_), Err(_)) => {}
        (ours, std) => panic!("strict mismatch: {ours:?} vs {std:?}"),
    }

    let whole = decode_utf8_lenient(data);
    let mut produced = String::new();
    let mut decoding =
        stream_decode_utf8_with(replacing as PolicyFn, &[]).expect("replacing never raises");
    let mut start = 0;
    while start < data.len() {
        let remaining = data.len() - start;
        let size = split_seed % remaining + 1;
        decoding = decoding
            .resume(&data[start..start + size])
            .expect("replacing never raises");
        produced.push_str(decoding.produced().as_str());
        start += size;
    }
    produced.push_str(
        decoding
            .finish()
            .expect("replacing never raises")
            .as_str(),
    );
    assert_eq!(produced, whole.as_str());
}

fuzz_target!(|data: &[u8]| check(data));
