//! Players and the pieces they own: rings and markers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// The player who moves after this one
    pub fn next(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::White => "White",
            Player::Black => "Black",
        })
    }
}

/// Cell content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Ring(Player),
    /// Marker showing the face of the given player
    Marker(Player),
}

impl Occupant {
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    pub fn is_ring(self) -> bool {
        matches!(self, Occupant::Ring(_))
    }

    pub fn is_marker(self) -> bool {
        matches!(self, Occupant::Marker(_))
    }

    /// Turn a marker over; rings and empty cells are unaffected
    pub fn flipped(self) -> Self {
        match self {
            Occupant::Marker(player) => Occupant::Marker(player.next()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_alternates() {
        assert_eq!(Player::White.next(), Player::Black);
        assert_eq!(Player::Black.next(), Player::White);
        assert_eq!(Player::White.next().next(), Player::White);
    }

    #[test]
    fn test_flip_is_involution() {
        let marker = Occupant::Marker(Player::Black);
        assert_eq!(marker.flipped(), Occupant::Marker(Player::White));
        assert_eq!(marker.flipped().flipped(), marker);
        assert_eq!(Occupant::Ring(Player::White).flipped(), Occupant::Ring(Player::White));
        assert_eq!(Occupant::Empty.flipped(), Occupant::Empty);
    }
}
