use std::io::{self, Read, Write};

use crate::alphabet::{Alphabet, STANDARD};

/// Read chunk size, aligned to 3 bytes so padding can only appear in the
/// final quartet of the stream.
const READ_CHUNK: usize = 48 * 1024;

/// Number of symbols `encode` emits for `input_len` bytes: `4 * ceil(n/3)`.
/// Line breaks are not included.
pub fn encoded_len(input_len: usize) -> usize {
    input_len.div_ceil(3) * 4
}

/// Encodes everything `reader` yields and writes base64 text to `writer`.
///
/// Input is consumed in fixed 3-byte-aligned chunks, so memory use is
/// constant regardless of stream length. With `wrap > 0` a newline is
/// inserted after every `wrap` output symbols, and a final newline closes
/// the last line when it is non-empty; `wrap == 0` emits no newlines at all.
pub fn encode_stream(
    reader: &mut impl Read,
    wrap: usize,
    writer: &mut impl Write,
) -> io::Result<()> {
    let mut buf = vec![0u8; READ_CHUNK];
    let mut out = Vec::with_capacity(output_capacity(READ_CHUNK, wrap));
    let mut col = 0usize;

    loop {
        let n = read_full(reader, &mut buf)?;
        if n == 0 {
            break;
        }
        out.clear();
        encode_into(&buf[..n], wrap, &mut col, &mut out);
        writer.write_all(&out)?;
        if n < buf.len() {
            break;
        }
    }

    if wrap > 0 && col > 0 {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Encodes a complete in-memory buffer, returning the base64 text.
pub fn encode_to_vec(data: &[u8], wrap: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(output_capacity(data.len(), wrap));
    let mut col = 0usize;
    encode_into(data, wrap, &mut col, &mut out);
    if wrap > 0 && col > 0 {
        out.push(b'\n');
    }
    out
}

/// Symbols plus worst-case newlines for `input_len` bytes of input.
fn output_capacity(input_len: usize, wrap: usize) -> usize {
    let symbols = encoded_len(input_len);
    if wrap > 0 { symbols + symbols / wrap + 1 } else { symbols }
}

/// Encodes `data` into `out`, threading the wrap column across calls.
/// `data.len()` must be a multiple of 3 on every call but the last, since a
/// short triplet emits padding and closes the stream.
fn encode_into(data: &[u8], wrap: usize, col: &mut usize, out: &mut Vec<u8>) {
    for triplet in data.chunks(3) {
        let quartet = encode_triplet(&STANDARD, triplet);
        if wrap == 0 {
            out.extend_from_slice(&quartet);
        } else {
            for &symbol in &quartet {
                out.push(symbol);
                *col += 1;
                if *col == wrap {
                    out.push(b'\n');
                    *col = 0;
                }
            }
        }
    }
}

/// Packs 1-3 bytes into a 24-bit accumulator and emits the four 6-bit
/// slices, most significant first. Missing bytes contribute zero bits and
/// their slices become padding.
fn encode_triplet(alphabet: &Alphabet, triplet: &[u8]) -> [u8; 4] {
    debug_assert!((1..=3).contains(&triplet.len()));
    let b0 = triplet[0] as u32;
    let b1 = triplet.get(1).copied().unwrap_or(0) as u32;
    let b2 = triplet.get(2).copied().unwrap_or(0) as u32;
    let triple = (b0 << 16) | (b1 << 8) | b2;

    [
        alphabet.symbol((triple >> 18) as u8),
        alphabet.symbol((triple >> 12) as u8),
        if triplet.len() > 1 {
            alphabet.symbol((triple >> 6) as u8)
        } else {
            alphabet.padding()
        },
        if triplet.len() > 2 {
            alphabet.symbol(triple as u8)
        } else {
            alphabet.padding()
        },
    ]
}

/// Reads until `buf` is full or the stream ends, retrying on interruption.
/// A short return therefore means end of stream.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
