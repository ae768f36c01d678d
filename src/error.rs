use thiserror::Error;

/// Terminal decode failures. No partial output accompanies either variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length (after whitespace removal) is not a multiple of 4.
    #[error("encoded length {length} is not a multiple of 4")]
    MalformedLength { length: usize },

    /// A byte outside the alphabet — or a padding symbol in a data
    /// position — was found while decoding a quartet. `position` is the
    /// offset into the whitespace-stripped input.
    #[error("invalid symbol '{}' at offset {position}", .symbol.escape_ascii())]
    InvalidSymbol { symbol: u8, position: usize },
}
