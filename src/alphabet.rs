/// Inverse-table slot for bytes outside the alphabet. Never exposed:
/// lookups go through [`Alphabet::code`], which returns `Option`.
const INVALID: u8 = 0xff;

/// A 64-symbol encoding alphabet with its inverse lookup table and padding
/// symbol.
///
/// Both tables are built in `const` context, so the alphabet is an immutable
/// compile-time constant: no init call to sequence before the first codec
/// use, and sharing across threads is free.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; 64],
    inverse: [u8; 256],
    padding: u8,
}

/// The standard base64 alphabet (RFC 4648 Table 1) with `=` padding.
pub const STANDARD: Alphabet = Alphabet::with_symbols(
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    b'=',
);

impl Alphabet {
    /// Builds an alphabet and its inverse table from 64 distinct symbols.
    ///
    /// The padding symbol gets no inverse entry: it is structural, not data,
    /// and must never satisfy a data-position lookup.
    pub const fn with_symbols(symbols: [u8; 64], padding: u8) -> Self {
        let mut inverse = [INVALID; 256];
        let mut i = 0;
        while i < 64 {
            inverse[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Alphabet {
            symbols,
            inverse,
            padding,
        }
    }

    /// Returns the symbol for a 6-bit code. High bits are masked off.
    pub const fn symbol(&self, code: u8) -> u8 {
        self.symbols[(code & 0x3f) as usize]
    }

    /// Returns the 6-bit code for a symbol, or `None` for any byte outside
    /// the alphabet (including the padding symbol).
    pub fn code(&self, symbol: u8) -> Option<u8> {
        match self.inverse[symbol as usize] {
            INVALID => None,
            code => Some(code),
        }
    }

    /// The padding symbol that terminates a short final quartet.
    pub const fn padding(&self) -> u8 {
        self.padding
    }
}
