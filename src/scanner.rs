//! Single byte classification.  The parser only ever looks at the next unconsumed byte in order
//! to decide which matching routine to run, so everything in here is a cheap predicate over a
//! `u8`.  None of these validate anything beyond the byte itself: a leading `t` commits to a
//! `true` match which then succeeds or fails on its own.

/// What a single byte says about the value starting at it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// Start of an object
    LeftBrace,
    /// Start of an array
    LeftBracket,
    /// Start of a string
    DoubleQuote,
    /// A minus sign or an ASCII digit
    Numeric(u8),
    /// Possible start of `null`
    Null,
    /// Possible start of `true`
    True,
    /// Possible start of `false`
    False,
    /// A catch-all for non-recognised bytes
    NotRecognised(u8),
}

impl Lexeme {
    /// Classify the byte which starts a value
    #[inline]
    pub fn classify(byte: u8) -> Self {
        match byte {
            b'{' => Lexeme::LeftBrace,
            b'[' => Lexeme::LeftBracket,
            b'"' => Lexeme::DoubleQuote,
            b if is_numeric(b) => Lexeme::Numeric(b),
            b'n' => Lexeme::Null,
            b't' => Lexeme::True,
            b'f' => Lexeme::False,
            b => Lexeme::NotRecognised(b),
        }
    }
}

/// Space, tab, carriage return and line feed.  Nothing else counts
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes skipped between the elements of arrays and objects
#[inline]
pub fn is_separator(byte: u8) -> bool {
    byte == b',' || is_whitespace(byte)
}

/// A minus sign or an ASCII digit, the admissible bytes of an integer lexeme
#[inline]
pub fn is_numeric(byte: u8) -> bool {
    byte == b'-' || byte.is_ascii_digit()
}

/// The admissible bytes of a float lexeme
#[inline]
pub fn is_float_part(byte: u8) -> bool {
    byte == b'.' || is_numeric(byte)
}
