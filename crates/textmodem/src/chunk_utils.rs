use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Chunks may split UTF-8 code points anywhere; the streaming decoder is
/// expected to cope with every boundary.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::produce_chunks;

    #[test]
    fn produce_chunks_example() {
        let payload = b"hi \xE2\x98\x83!";
        let chunks = produce_chunks(payload, 3);
        assert_eq!(chunks, vec![&b"hi "[..], &b"\xE2\x98\x83"[..], &b"!"[..]]);
        assert_eq!(chunks.concat(), payload);

        assert!(produce_chunks(b"", 4).is_empty());
        assert_eq!(produce_chunks(b"ab", 8).len(), 2);
    }
}
