use std::fmt;

/// One atomic unit of the input alphabet.
///
/// Space is an ordinary symbol. It is only drawn differently when displayed
/// so whitespace stays visible in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Glyph used to draw a space. It sits outside the printable ASCII range,
    /// so it never looks like a hyphen or any other literal input.
    pub const SPACE_GLYPH: char = '\u{2423}';

    pub const fn new(ch: char) -> Self {
        Symbol(ch)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol(ch)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ' ' => write!(f, "{}", Self::SPACE_GLYPH),
            ch => write!(f, "{}", ch),
        }
    }
}
