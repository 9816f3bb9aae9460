//! Shot rejection and input errors.

use crate::types::InvalidShotEncoding;

/// Why the engine ignored a shot.
///
/// Rejection is the ordinary answer to many inputs (a digit after a strike,
/// anything after the tenth frame) and leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectedShot {
    /// The tenth frame is complete.
    #[display("the game is over")]
    GameOver,

    /// Empty input.
    #[display("no shot entered")]
    NoInput,

    /// A spare needs an earlier shot in the same frame.
    #[display("a spare needs a first shot in the frame")]
    SpareWithoutFirstShot,

    /// In frames 1-9 a strike can only be the first shot.
    #[display("a strike can only be the first shot")]
    StrikeAfterFirstShot,

    /// The shot plus the frame's first numeric shot reach ten pins; that is a spare.
    #[display("{} + {} pins is more than the rack holds, enter '/' for a spare", first, second)]
    TooManyPins { first: u8, second: u8 },
}

impl std::error::Error for RejectedShot {}

/// Failure of the text entry point.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ShotError {
    /// The shot was legal text but not a legal shot right now.
    #[display("shot rejected: {}", _0)]
    Rejected(RejectedShot),

    /// The text was outside the shot encoding.
    #[display("invalid shot: {}", _0)]
    InvalidEncoding(InvalidShotEncoding),
}

impl std::error::Error for ShotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShotError::Rejected(err) => Some(err),
            ShotError::InvalidEncoding(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RejectedShot::GameOver.to_string(), "the game is over");
        assert_eq!(
            RejectedShot::TooManyPins {
                first: 6,
                second: 4
            }
            .to_string(),
            "6 + 4 pins is more than the rack holds, enter '/' for a spare"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: ShotError = RejectedShot::NoInput.into();
        assert_eq!(err, ShotError::Rejected(RejectedShot::NoInput));
        assert_eq!(err.to_string(), "shot rejected: no shot entered");

        let err: ShotError = InvalidShotEncoding::PinCountOutOfRange(11).into();
        assert_eq!(err.to_string(), "invalid shot: pin count 11 is outside 0-9");
    }
}
