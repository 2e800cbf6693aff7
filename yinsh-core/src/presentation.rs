//! Click-to-action mapping and glyphs for front ends
//!
//! Front ends never build `Action`s themselves: they ask which action a
//! click on a cell would issue in the current phase, and draw each cell
//! from its `Glyph`. Hover or drag state stays on the front end side.

use serde::Serialize;

use crate::board::Hex;
use crate::game::{Action, GameState, Phase};
use crate::moves::{available_moves, moveable_ring};
use crate::pieces::{Occupant, Player};

/// What to draw on a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Glyph {
    /// Bare grid point
    Point,
    /// Hollow circle in the owner's colour
    Ring(Player),
    /// Filled disc in the face colour
    Marker(Player),
}

impl Glyph {
    /// Fill colour name, `None` for a bare point
    pub fn color(self) -> Option<&'static str> {
        match self {
            Glyph::Point => None,
            Glyph::Ring(player) | Glyph::Marker(player) => Some(player.color()),
        }
    }
}

impl From<Occupant> for Glyph {
    fn from(occupant: Occupant) -> Self {
        match occupant {
            Occupant::Empty => Glyph::Point,
            Occupant::Ring(player) => Glyph::Ring(player),
            Occupant::Marker(player) => Glyph::Marker(player),
        }
    }
}

/// The action a click on `hex` issues, if the cell is offered at all
pub fn click_action(state: &GameState, hex: Hex) -> Option<Action> {
    let board = state.board();
    let occupant = board.get(hex)?;

    match state.phase() {
        Phase::PlacingRing { .. } => occupant.is_empty().then_some(Action::PlaceRing { at: hex }),
        Phase::PlacingMarker { player } => {
            moveable_ring(board, (hex, occupant), *player).then_some(Action::PlaceMarker { at: hex })
        }
        Phase::MovingRing { origin, .. } => available_moves(*origin, board)
            .contains(&hex)
            .then_some(Action::MoveRing { from: *origin, to: hex }),
        Phase::RemovingRun { runs, player } => runs
            .iter()
            .find(|run| run.contains(&hex))
            .map(|run| Action::RemoveRun { cells: run.clone(), player: *player }),
        Phase::RemovingRing { .. } => None,
    }
}

/// Every clickable cell with the action it issues, in board order
pub fn clickable_positions(state: &GameState) -> Vec<(Hex, Action)> {
    state
        .board()
        .positions()
        .filter_map(|(hex, _)| click_action(state, hex).map(|action| (hex, action)))
        .collect()
}
