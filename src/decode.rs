use std::borrow::Cow;

use crate::alphabet::STANDARD;
use crate::error::DecodeError;

/// Decodes a complete base64 buffer back to raw bytes.
///
/// Whitespace anywhere in the input is ignored. After stripping, the input
/// must be a whole number of quartets ([`DecodeError::MalformedLength`]
/// otherwise; zero quartets decode to an empty output). Trailing padding in
/// the last one or two positions shortens the final triplet; any other byte
/// outside the alphabet — misplaced padding included — fails with
/// [`DecodeError::InvalidSymbol`] and no output.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let cleaned = strip_whitespace(input);
    let symbols: &[u8] = &cleaned;

    if symbols.len() % 4 != 0 {
        return Err(DecodeError::MalformedLength {
            length: symbols.len(),
        });
    }
    if symbols.is_empty() {
        return Ok(Vec::new());
    }

    let padding = trailing_padding(symbols);
    let decoded_len = symbols.len() / 4 * 3 - padding;
    let quartets = symbols.len() / 4;

    let mut out = Vec::with_capacity(decoded_len);
    for (index, quartet) in symbols.chunks_exact(4).enumerate() {
        // Padding positions only exist at the tail of the final quartet;
        // everywhere else all four symbols must carry data.
        let data_symbols = if index == quartets - 1 { 4 - padding } else { 4 };

        let mut triple = 0u32;
        for (offset, &symbol) in quartet[..data_symbols].iter().enumerate() {
            let code = STANDARD.code(symbol).ok_or(DecodeError::InvalidSymbol {
                symbol,
                position: index * 4 + offset,
            })?;
            triple |= (code as u32) << (18 - 6 * offset);
        }

        for shift in [16u32, 8, 0] {
            if out.len() < decoded_len {
                out.push((triple >> shift) as u8);
            }
        }
    }

    Ok(out)
}

/// Removes ASCII whitespace, borrowing the input when there is none.
/// Newlines from wrapped encodes are the overwhelmingly common case, so a
/// single memchr probe decides between the borrow and the filter pass.
fn strip_whitespace(input: &[u8]) -> Cow<'_, [u8]> {
    if memchr::memchr3(b'\n', b'\r', b' ', input).is_none()
        && !input.iter().any(|&b| is_whitespace(b))
    {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .iter()
            .copied()
            .filter(|&b| !is_whitespace(b))
            .collect(),
    )
}

/// Counts padding symbols in the last two positions: 0, 1, or 2.
fn trailing_padding(symbols: &[u8]) -> usize {
    symbols
        .iter()
        .rev()
        .take(2)
        .take_while(|&&b| b == STANDARD.padding())
        .count()
}

/// ASCII whitespace as the decoder ignores it: space, \t, \n, \v, \f, \r.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
