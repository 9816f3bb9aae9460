//! Shot entry field.
//!
//! Mirrors a validated single-line text box: a keystroke is kept only if the
//! resulting text is still something [`Shot::parse`] accepts, so the engine
//! never sees text outside the encoding from this path.

use crate::types::Shot;

/// Single-line shot entry with keystroke validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotField {
    text: String,
}

impl ShotField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `text` is acceptable field content.
    pub fn accepts(text: &str) -> bool {
        Shot::parse(text).is_ok()
    }

    /// Append `ch` if the result stays acceptable; returns whether it was kept.
    pub fn insert(&mut self, ch: char) -> bool {
        self.text.push(ch);
        if Self::accepts(&self.text) {
            true
        } else {
            self.text.pop();
            false
        }
    }

    /// Remove the last character.
    pub fn erase(&mut self) {
        self.text.pop();
    }

    /// Take the field content, leaving it empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_shot_characters() {
        for ch in ['0', '5', '9', '/', 'x', 'X'] {
            let mut field = ShotField::new();
            assert!(field.insert(ch), "{ch:?} should be accepted");
            assert_eq!(field.text(), ch.to_string());
        }
    }

    #[test]
    fn test_rejects_other_characters() {
        let mut field = ShotField::new();
        for ch in ['a', ' ', '-', '+', 'y'] {
            assert!(!field.insert(ch));
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_second_character_must_keep_value_in_range() {
        let mut field = ShotField::new();
        assert!(field.insert('0'));
        assert!(field.insert('7'));
        assert_eq!(field.text(), "07");

        let mut field = ShotField::new();
        assert!(field.insert('1'));
        assert!(!field.insert('2'));
        assert!(!field.insert('x'));
        assert_eq!(field.text(), "1");
    }

    #[test]
    fn test_take_clears() {
        let mut field = ShotField::new();
        field.insert('x');
        assert_eq!(field.take(), "x");
        assert!(field.is_empty());
        assert_eq!(field.take(), "");
    }

    #[test]
    fn test_erase() {
        let mut field = ShotField::new();
        field.insert('/');
        field.erase();
        assert!(field.is_empty());
        field.erase();
        assert!(field.is_empty());
    }
}
