//! Core types module - shot encoding and scoreboard constants
//!
//! This module defines the fundamental types shared by the scoring engine, the
//! input layer and the terminal renderer. Everything here is plain data with
//! no knowledge of frames or totals.
//!
//! # Scoreboard Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in a game (indexed 0-9) |
//! | `LAST_FRAME` | 9 | Index of the tenth frame |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `MAX_FRAME_MARKS` | 2 | Marks recorded in frames 0-8 (sentinel included) |
//! | `MAX_LAST_FRAME_MARKS` | 3 | Marks recorded in the tenth frame |
//! | `MAX_ROLLS` | 21 | Real shots in the longest possible game |
//! | `PERFECT_SCORE` | 300 | Twelve strikes |
//!
//! # Text Encoding
//!
//! | Text | Shot |
//! |------|------|
//! | `"0"`-`"9"` | pin count |
//! | `"/"` | spare |
//! | `"x"`, `"X"` | strike |
//! | `""` | no input |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{Mark, Shot, PIN_COUNT};
//!
//! assert_eq!(Shot::parse("x").unwrap(), Some(Shot::Strike));
//! assert_eq!(Shot::parse("/").unwrap(), Some(Shot::Spare));
//! assert_eq!(Shot::parse("").unwrap(), None);
//! assert!(Shot::parse("11").is_err());
//!
//! let seven = Shot::pins(7).unwrap();
//! assert_eq!(seven.to_string(), "7");
//! assert_eq!(Mark::NoRoll.as_char(), '_');
//! assert_eq!(PIN_COUNT, 10);
//! ```

use serde::{Serialize, Serializer};

/// Frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame, the only one that can take three shots.
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Marks held by a closed frame 0-8 (a strike is padded with [`Mark::NoRoll`]).
pub const MAX_FRAME_MARKS: usize = 2;

/// Marks held by a closed tenth frame that opened with a strike or spare.
pub const MAX_LAST_FRAME_MARKS: usize = 3;

/// Real shots in the longest possible game (nine open frames plus three in the tenth).
pub const MAX_ROLLS: usize = (FRAME_COUNT - 1) * MAX_FRAME_MARKS + MAX_LAST_FRAME_MARKS;

/// Score of twelve consecutive strikes.
pub const PERFECT_SCORE: u16 = 300;

/// A collaborator handed the engine something outside the shot domain.
///
/// This is a contract violation upstream of input sanitization, never an
/// ordinary user mistake.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidShotEncoding {
    /// A numeric shot of ten or more pins (ten pins is a strike or spare).
    #[display("pin count {} is outside 0-9", _0)]
    PinCountOutOfRange(u8),

    /// Text that is not a digit string, `/`, `x` or `X`.
    #[display("unrecognized shot encoding {:?}", _0)]
    Unrecognized(String),
}

impl std::error::Error for InvalidShotEncoding {}

/// Pins knocked down by a non-clearing shot (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinCount(u8);

impl PinCount {
    /// Validate a raw pin count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::PinCount;
    ///
    /// assert_eq!(PinCount::new(9).unwrap().get(), 9);
    /// assert!(PinCount::new(10).is_err());
    /// ```
    pub fn new(pins: u8) -> Result<Self, InvalidShotEncoding> {
        if pins < PIN_COUNT {
            Ok(Self(pins))
        } else {
            Err(InvalidShotEncoding::PinCountOutOfRange(pins))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// The result of a single roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shot {
    /// Some pins knocked down, at least one left standing.
    Pins(PinCount),
    /// The second ball of a rack cleared the remaining pins.
    Spare,
    /// The first ball of a rack cleared all ten pins.
    Strike,
}

impl Shot {
    /// Numeric shot from a raw pin count.
    pub fn pins(pins: u8) -> Result<Self, InvalidShotEncoding> {
        PinCount::new(pins).map(Shot::Pins)
    }

    /// Parse the text encoding used by input collaborators.
    ///
    /// Returns `Ok(None)` for empty text (no input). Digit strings are accepted
    /// as long as their value is 0-9, so `"05"` is a five.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::{InvalidShotEncoding, Shot};
    ///
    /// assert_eq!(Shot::parse("X"), Ok(Some(Shot::Strike)));
    /// assert_eq!(Shot::parse("05"), Ok(Some(Shot::pins(5).unwrap())));
    /// assert_eq!(Shot::parse("12"), Err(InvalidShotEncoding::PinCountOutOfRange(12)));
    /// assert!(Shot::parse("7 ").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Option<Self>, InvalidShotEncoding> {
        match s {
            "" => Ok(None),
            "/" => Ok(Some(Shot::Spare)),
            "x" | "X" => Ok(Some(Shot::Strike)),
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
                let value = digits
                    .parse::<u8>()
                    .map_err(|_| InvalidShotEncoding::Unrecognized(s.to_string()))?;
                Shot::pins(value).map(Some)
            }
            _ => Err(InvalidShotEncoding::Unrecognized(s.to_string())),
        }
    }

    /// Display character (`0`-`9`, `/`, `X`).
    pub fn as_char(&self) -> char {
        match self {
            Shot::Pins(n) => char::from(b'0' + n.get()),
            Shot::Spare => '/',
            Shot::Strike => 'X',
        }
    }

    /// Strike or spare.
    pub fn is_mark(&self) -> bool {
        matches!(self, Shot::Spare | Shot::Strike)
    }
}

impl std::fmt::Display for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Shot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

/// One recorded entry in a frame.
///
/// `NoRoll` is the placeholder the engine appends after a strike in frames
/// 0-8 so the frame closes at two entries. It never carries pins and is
/// skipped when bonus shots are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Shot(Shot),
    NoRoll,
}

impl Mark {
    /// The real shot, if any.
    pub fn shot(&self) -> Option<Shot> {
        match self {
            Mark::Shot(shot) => Some(*shot),
            Mark::NoRoll => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::Shot(shot) => shot.as_char(),
            Mark::NoRoll => '_',
        }
    }
}

impl From<Shot> for Mark {
    fn from(shot: Shot) -> Self {
        Mark::Shot(shot)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Mark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_budget() {
        assert_eq!(MAX_ROLLS, 21);
        assert_eq!(LAST_FRAME, 9);
    }

    #[test]
    fn test_parse_digits() {
        for n in 0..=9u8 {
            let text = n.to_string();
            assert_eq!(Shot::parse(&text), Ok(Some(Shot::pins(n).unwrap())));
        }
        assert_eq!(Shot::parse("007"), Ok(Some(Shot::pins(7).unwrap())));
    }

    #[test]
    fn test_parse_rejects_out_of_domain() {
        assert_eq!(
            Shot::parse("10"),
            Err(InvalidShotEncoding::PinCountOutOfRange(10))
        );
        assert_eq!(
            Shot::parse("999"),
            Err(InvalidShotEncoding::Unrecognized("999".to_string()))
        );
        assert_eq!(
            Shot::parse("s"),
            Err(InvalidShotEncoding::Unrecognized("s".to_string()))
        );
        assert!(Shot::parse("x/").is_err());
        assert!(Shot::parse(" ").is_err());
    }

    #[test]
    fn test_pin_count_bounds() {
        assert!(PinCount::new(0).is_ok());
        assert!(PinCount::new(9).is_ok());
        assert_eq!(
            PinCount::new(10),
            Err(InvalidShotEncoding::PinCountOutOfRange(10))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Shot::Strike.to_string(), "X");
        assert_eq!(Shot::Spare.to_string(), "/");
        assert_eq!(Mark::from(Shot::pins(3).unwrap()).to_string(), "3");
        assert_eq!(Mark::NoRoll.to_string(), "_");
        assert_eq!(
            InvalidShotEncoding::PinCountOutOfRange(12).to_string(),
            "pin count 12 is outside 0-9"
        );
    }

    #[test]
    fn test_marks_serialize_as_text() {
        let marks = [Mark::Shot(Shot::Strike), Mark::NoRoll];
        assert_eq!(serde_json::to_string(&marks).unwrap(), r#"["X","_"]"#);
    }

    #[test]
    fn test_is_mark() {
        assert!(Shot::Strike.is_mark());
        assert!(Shot::Spare.is_mark());
        assert!(!Shot::pins(9).unwrap().is_mark());
        assert_eq!(Mark::NoRoll.shot(), None);
    }
}
