//! Board positions for tic-tac-toe moves.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (1-9).
///
/// The board is numbered left-to-right, top-to-bottom:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
///
/// On the wire a position is its number, so `Position::Center` serializes
/// as `5`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Top-left (position 1)
    TopLeft,
    /// Top-center (position 2)
    TopCenter,
    /// Top-right (position 3)
    TopRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Bottom-left (position 7)
    BottomLeft,
    /// Bottom-center (position 8)
    BottomCenter,
    /// Bottom-right (position 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the board number of this position (1-9).
    pub fn number(self) -> u8 {
        match self {
            Position::TopLeft => 1,
            Position::TopCenter => 2,
            Position::TopRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::BottomLeft => 7,
            Position::BottomCenter => 8,
            Position::BottomRight => 9,
        }
    }

    /// Creates a position from its board number, `None` outside 1-9.
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Position::TopLeft),
            2 => Some(Position::TopCenter),
            3 => Some(Position::TopRight),
            4 => Some(Position::MiddleLeft),
            5 => Some(Position::Center),
            6 => Some(Position::MiddleRight),
            7 => Some(Position::BottomLeft),
            8 => Some(Position::BottomCenter),
            9 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Parse from a board number (1-9) or a label.
    ///
    /// Labels match case-insensitively, so `"center"` and `"5"` both
    /// yield [`Position::Center`].
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<i64>() {
            return Self::from_number(num);
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.number()
    }
}

macro_rules! position_from_integer {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Position {
                type Error = MoveError;

                fn try_from(number: $int) -> Result<Self, Self::Error> {
                    i64::try_from(number)
                        .ok()
                        .and_then(Position::from_number)
                        .ok_or(MoveError::InvalidPosition)
                }
            }
        )*
    };
}

position_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::BottomRight.number(), 9);
    }

    #[test]
    fn test_all_is_ascending() {
        let numbers: Vec<u8> = Position::ALL.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_out_of_range_numbers_rejected() {
        assert_eq!(Position::try_from(0), Err(MoveError::InvalidPosition));
        assert_eq!(Position::try_from(10), Err(MoveError::InvalidPosition));
        assert_eq!(Position::try_from(-3i64), Err(MoveError::InvalidPosition));
        assert_eq!(Position::try_from(u64::MAX), Err(MoveError::InvalidPosition));
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number(" 7 "), Some(Position::BottomLeft));
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top-Right"), Some(Position::TopRight));
        assert_eq!(Position::from_label_or_number("middle"), None);
        assert_eq!(Position::from_label_or_number("0"), None);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Position::MiddleRight).unwrap();
        assert_eq!(json, "6");
        let back: Position = serde_json::from_str("2").unwrap();
        assert_eq!(back, Position::TopCenter);
        assert!(serde_json::from_str::<Position>("12").is_err());
    }
}
