use crate::coords::Coords;
use crate::scanner::is_whitespace;

/// Number of bytes either side of the cursor included in diagnostic context
const CONTEXT_RADIUS: usize = 24;

/// Structure to manage input state for the lexer and parser.  Wraps the complete input and keeps
/// track of the [Coords] of the next unconsumed byte
#[derive(Debug, Clone)]
pub struct LexerInput<'a> {
    /// The complete input
    bytes: &'a [u8],

    /// Coordinates of the next unconsumed byte
    coords: Coords,
}

impl<'a> LexerInput<'a> {
    /// Create a new input positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        LexerInput {
            bytes,
            coords: Coords::default(),
        }
    }

    /// The [Coords] of the next unconsumed byte
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// The absolute offset of the next unconsumed byte
    pub fn position(&self) -> usize {
        self.coords.absolute
    }

    /// Move the cursor back to a previously recorded position
    pub fn reset(&mut self, coords: Coords) {
        self.coords = coords
    }

    /// The next unconsumed byte, if any
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.coords.absolute).copied()
    }

    /// Everything from the cursor to the end of the input
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.coords.absolute.min(self.bytes.len())..]
    }

    /// Returns true if all the input has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.coords.absolute >= self.bytes.len()
    }

    /// Slice of the input between an absolute offset and the cursor
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.bytes[start..self.coords.absolute]
    }

    /// Consume up to `count` bytes
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            match self.peek() {
                Some(b) => self.coords.step(b),
                None => break,
            }
        }
    }

    /// Consume bytes for as long as they satisfy `predicate`
    pub fn advance_while<P: Fn(u8) -> bool>(&mut self, predicate: P) {
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.coords.step(b);
        }
    }

    /// Consume any run of whitespace at the cursor
    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace)
    }

    /// A lossy rendering of the input surrounding the cursor, used within error messages
    pub fn context(&self) -> String {
        let centre = self.coords.absolute.min(self.bytes.len());
        let start = centre.saturating_sub(CONTEXT_RADIUS);
        let end = (centre + CONTEXT_RADIUS).min(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[start..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer_input::LexerInput;

    #[test]
    fn should_skip_whitespace_and_track_lines() {
        let mut input = LexerInput::new(b" \t\r\n  x");
        input.skip_whitespace();
        assert_eq!(input.peek(), Some(b'x'));
        assert_eq!(input.coords().line, 1);
        assert_eq!(input.coords().column, 2);
    }

    #[test]
    fn should_not_advance_past_the_end() {
        let mut input = LexerInput::new(b"ab");
        input.advance(10);
        assert!(input.is_exhausted());
        assert_eq!(input.position(), 2);
        assert_eq!(input.peek(), None);
        assert!(input.remaining().is_empty());
    }

    #[test]
    fn should_restore_a_saved_position() {
        let mut input = LexerInput::new(b"12.5]");
        let saved = input.coords();
        input.advance_while(|b| b != b']');
        assert_eq!(input.slice_from(saved.absolute), b"12.5");
        input.reset(saved);
        assert_eq!(input.remaining(), b"12.5]");
    }

    #[test]
    fn should_bound_the_diagnostic_context() {
        let long = [b'a'; 200];
        let mut input = LexerInput::new(&long);
        input.advance(100);
        assert_eq!(input.context().len(), 48);
    }
}
