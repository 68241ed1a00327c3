//! General error types for the parser

use std::fmt::{Display, Formatter};

use crate::coords::Coords;

/// Global result type used throughout the parser
pub type ParserResult<T> = Result<T, ParserError>;

/// A global enumeration of error details
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorDetails {
    /// The next significant byte doesn't start any kind of value. Carries the offending byte and
    /// a window of the surrounding input
    UnrecognizedCharacter { found: u8, context: String },
    /// A `null`, `true` or `false` literal didn't match its spelling
    MalformedLiteral(&'static str),
    /// Neither a float nor an integer could be formed, or the numeral overflowed
    MalformedNumber(String),
    UnterminatedString,
    UnterminatedArray,
    UnterminatedObject,
    /// The byte found where an object key should start
    MalformedObjectKey(u8),
    /// The byte found after an object key, `None` at the end of the input
    MissingColon(Option<u8>),
    /// A value was expected but the input was exhausted
    EndOfInput,
    /// Nesting went past the configured maximum depth
    DepthLimitExceeded(usize),
    /// Non-whitespace input follows the first value, and the parser is configured to reject it
    TrailingCharacters,
}

/// Fieldless discriminant of [ParserErrorDetails], handy for matching on the failure kind only
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParserErrorKind {
    UnrecognizedCharacter,
    MalformedLiteral,
    MalformedNumber,
    UnterminatedString,
    UnterminatedArray,
    UnterminatedObject,
    MalformedObjectKey,
    MissingColon,
    EndOfInput,
    DepthLimitExceeded,
    TrailingCharacters,
}

impl ParserErrorDetails {
    pub fn kind(&self) -> ParserErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. } => ParserErrorKind::UnrecognizedCharacter,
            Self::MalformedLiteral(_) => ParserErrorKind::MalformedLiteral,
            Self::MalformedNumber(_) => ParserErrorKind::MalformedNumber,
            Self::UnterminatedString => ParserErrorKind::UnterminatedString,
            Self::UnterminatedArray => ParserErrorKind::UnterminatedArray,
            Self::UnterminatedObject => ParserErrorKind::UnterminatedObject,
            Self::MalformedObjectKey(_) => ParserErrorKind::MalformedObjectKey,
            Self::MissingColon(_) => ParserErrorKind::MissingColon,
            Self::EndOfInput => ParserErrorKind::EndOfInput,
            Self::DepthLimitExceeded(_) => ParserErrorKind::DepthLimitExceeded,
            Self::TrailingCharacters => ParserErrorKind::TrailingCharacters,
        }
    }
}

/// Renders a single byte for inclusion within an error message
fn printable(byte: u8) -> String {
    std::ascii::escape_default(byte).to_string()
}

impl Display for ParserErrorDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found, context } => write!(
                f,
                "invalid character: `{}` in `{}`",
                printable(*found),
                context
            ),
            Self::MalformedLiteral(name) => write!(f, "invalid {}", name),
            Self::MalformedNumber(reason) => write!(f, "invalid number: {}", reason),
            Self::UnterminatedString => write!(f, "invalid string: expected end \""),
            Self::UnterminatedArray => write!(f, "invalid array: expected end ]"),
            Self::UnterminatedObject => write!(f, "invalid object: expected end }}"),
            Self::MalformedObjectKey(found) => write!(
                f,
                "invalid object key `{}`: expected start \"",
                printable(*found)
            ),
            Self::MissingColon(Some(found)) => {
                write!(f, "invalid character `{}`: expected `:`", printable(*found))
            }
            Self::MissingColon(None) => write!(f, "end of input: expected `:`"),
            Self::EndOfInput => write!(f, "unexpected end of input: expected a value"),
            Self::DepthLimitExceeded(max) => {
                write!(f, "maximum nesting depth of {} exceeded", max)
            }
            Self::TrailingCharacters => write!(f, "unexpected characters after value"),
        }
    }
}

/// The general error structure
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// The global error code for the error
    pub details: ParserErrorDetails,
    /// Optional parser coordinates
    pub coords: Option<Coords>,
}

impl ParserError {
    /// The fieldless kind of the underlying [ParserErrorDetails]
    pub fn kind(&self) -> ParserErrorKind {
        self.details.kind()
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(f, "{} at {}", self.details, coords),
            None => write!(f, "{}", self.details),
        }
    }
}

impl std::error::Error for ParserError {}

/// Build an `Err` wrapping a [ParserError] located at a set of [Coords]
#[macro_export]
macro_rules! parser_error {
    ($details: expr, $coords: expr) => {
        Err($crate::errors::ParserError {
            details: $details,
            coords: Some($coords),
        })
    };
}
