//! Decode standard input as UTF-8 and re-encode it as UTF-16LE on standard
//! output, replacing malformed bytes.
//!
//! Input is read in small chunks on purpose: the streaming decoder handles
//! code points split across read boundaries.

use std::io::{Read, Write};

use textmodem::{PolicyFn, encode_utf16le, replacing, stream_decode_utf8_with};

fn main() -> std::io::Result<()> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    let mut decoding =
        stream_decode_utf8_with(replacing as PolicyFn, &[]).expect("replacing never raises");
    let mut buf = [0u8; 256];
    loop {
        let n = stdin.read(&mut buf)?;
        if n == 0 {
            break;
        }
        decoding = decoding
            .resume(&buf[..n])
            .expect("replacing never raises");
        stdout.write_all(&encode_utf16le(decoding.produced()))?;
    }
    let tail = decoding.finish().expect("replacing never raises");
    stdout.write_all(&encode_utf16le(&tail))?;
    Ok(())
}
