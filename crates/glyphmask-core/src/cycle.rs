//! The [`CharacterCycle`] — round-robin cursor over the mask text.

use crate::error::MaskError;

/// Round-robin cursor over the mask text, supplying one character per
/// glyph cell in draw order. Created fresh per mask operation and
/// discarded after.
#[derive(Clone, Debug)]
pub struct CharacterCycle {
    chars: Vec<char>,
    index: usize,
}

impl CharacterCycle {
    /// Create a cycle over `text`.
    ///
    /// Fails with [`MaskError::InvalidText`] if `text` is empty.
    pub fn new(text: &str) -> Result<Self, MaskError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(MaskError::InvalidText);
        }
        Ok(Self { chars, index: 0 })
    }

    /// Number of characters in one period of the cycle.
    #[inline]
    pub fn period(&self) -> usize {
        self.chars.len()
    }

    /// The current character, without advancing.
    #[inline]
    pub fn peek(&self) -> char {
        self.chars[self.index]
    }

    /// Return the current character and advance, wrapping to the start
    /// after the last character. O(1), no allocation.
    #[inline]
    pub fn next_char(&mut self) -> char {
        let ch = self.chars[self.index];
        self.index += 1;
        if self.index == self.chars.len() {
            self.index = 0;
        }
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            CharacterCycle::new(""),
            Err(MaskError::InvalidText)
        ));
    }

    #[test]
    fn wraps_after_last_character() {
        let mut cycle = CharacterCycle::new("just for fun").unwrap();
        assert_eq!(cycle.period(), 12);
        let first_fifteen: String = (0..15).map(|_| cycle.next_char()).collect();
        assert_eq!(first_fifteen, "just for funjus");
    }

    #[test]
    fn periodicity() {
        // next() at call i and call i+n yields the same character.
        let text = "mark";
        let n = text.chars().count();
        let mut cycle = CharacterCycle::new(text).unwrap();
        let seq: Vec<char> = (0..3 * n).map(|_| cycle.next_char()).collect();
        for i in 0..2 * n {
            assert_eq!(seq[i], seq[i + n]);
        }
    }

    #[test]
    fn peek_does_not_advance() {
        let mut cycle = CharacterCycle::new("ab").unwrap();
        assert_eq!(cycle.peek(), 'a');
        assert_eq!(cycle.peek(), 'a');
        assert_eq!(cycle.next_char(), 'a');
        assert_eq!(cycle.peek(), 'b');
    }

    #[test]
    fn multibyte_text_cycles_by_character() {
        let mut cycle = CharacterCycle::new("héê").unwrap();
        assert_eq!(cycle.period(), 3);
        assert_eq!(cycle.next_char(), 'h');
        assert_eq!(cycle.next_char(), 'é');
        assert_eq!(cycle.next_char(), 'ê');
        assert_eq!(cycle.next_char(), 'h');
    }
}
