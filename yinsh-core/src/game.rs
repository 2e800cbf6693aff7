//! Game state and phase transitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Hex};
use crate::moves::{moveable_ring, valid_move};
use crate::pieces::{Occupant, Player};
use crate::ruleset::RuleSet;
use crate::runs::runs_of_five;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Whose turn it is and what they must do
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Setup: `remaining` further rings go down after this one
    PlacingRing { remaining: u16, player: Player },
    /// Drop a marker into one of the player's moveable rings
    PlacingMarker { player: Player },
    /// Slide the ring that was sitting on `origin`
    MovingRing { origin: Hex, player: Player },
    /// Take a ring off the board; no action leads here yet
    RemovingRing { player: Player },
    /// Clear one of the completed runs
    RemovingRun { runs: Vec<BTreeSet<Hex>>, player: Player },
}

impl Phase {
    pub fn player(&self) -> Player {
        match *self {
            Phase::PlacingRing { player, .. }
            | Phase::PlacingMarker { player }
            | Phase::MovingRing { player, .. }
            | Phase::RemovingRing { player }
            | Phase::RemovingRun { player, .. } => player,
        }
    }
}

/// A player intent
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    PlaceRing { at: Hex },
    PlaceMarker { at: Hex },
    MoveRing { from: Hex, to: Hex },
    RemoveRun { cells: BTreeSet<Hex>, player: Player },
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board and phase, always replaced together
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    phase: Phase,
}

impl GameState {
    /// Empty board, first ring placement by White
    pub fn new(ruleset: &RuleSet) -> Self {
        Self {
            board: Board::empty(ruleset.radius),
            phase: Phase::PlacingRing {
                remaining: ruleset.initial_remaining(),
                player: Player::White,
            },
        }
    }

    /// Resume from an arbitrary position
    pub fn from_parts(board: Board, phase: Phase) -> Self {
        Self { board, phase }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current_player(&self) -> Player {
        self.phase.player()
    }

    // ========================================================================
    // APPLY ACTION
    // ========================================================================

    /// Apply action, return new state; out-of-phase or illegal actions
    /// return an unchanged copy
    pub fn apply(&self, action: &Action) -> Self {
        let next = match action {
            Action::PlaceRing { at } => self.place_ring(*at),
            Action::PlaceMarker { at } => self.place_marker(*at),
            Action::MoveRing { from, to } => self.move_ring(*from, *to),
            Action::RemoveRun { cells, player } => self.remove_run(cells, *player),
        };

        match next {
            Some(state) => {
                tracing::debug!(?action, phase = ?state.phase, "action applied");
                state
            }
            None => {
                tracing::trace!(?action, phase = ?self.phase, "action ignored");
                self.clone()
            }
        }
    }

    fn place_ring(&self, at: Hex) -> Option<Self> {
        let Phase::PlacingRing { remaining, player } = self.phase else {
            return None;
        };
        if self.board.get(at) != Some(Occupant::Empty) {
            return None;
        }

        let phase = match remaining {
            0 => Phase::PlacingMarker { player: player.next() },
            n => Phase::PlacingRing { remaining: n - 1, player: player.next() },
        };

        Some(Self {
            board: self.board.set(at, Occupant::Ring(player)),
            phase,
        })
    }

    fn place_marker(&self, at: Hex) -> Option<Self> {
        let Phase::PlacingMarker { player } = self.phase else {
            return None;
        };
        let occupant = self.board.get(at)?;
        if !moveable_ring(&self.board, (at, occupant), player) {
            return None;
        }

        Some(Self {
            board: self.board.set(at, Occupant::Marker(player)),
            phase: Phase::MovingRing { origin: at, player },
        })
    }

    fn move_ring(&self, from: Hex, to: Hex) -> Option<Self> {
        let Phase::MovingRing { origin, player } = self.phase else {
            return None;
        };
        if from != origin || !valid_move(&self.board, from, to) {
            return None;
        }

        let mut board = self.board.clone();
        for hex in self.board.line(from, to) {
            if let Some(occupant) = board.get(hex) {
                board.put(hex, occupant.flipped());
            }
        }
        board.put(to, Occupant::Ring(player));

        let runs = runs_of_five(&board);
        let phase = if runs.is_empty() {
            Phase::PlacingMarker { player: player.next() }
        } else {
            Phase::RemovingRun { runs, player }
        };

        Some(Self { board, phase })
    }

    fn remove_run(&self, cells: &BTreeSet<Hex>, by: Player) -> Option<Self> {
        let Phase::RemovingRun { runs, player } = &self.phase else {
            return None;
        };
        if by != *player || !runs.contains(cells) {
            return None;
        }

        let mut board = self.board.clone();
        for &hex in cells {
            board.put(hex, Occupant::Empty);
        }

        Some(Self {
            board,
            phase: Phase::PlacingMarker { player: player.next() },
        })
    }

    // ========================================================================
    // LEGAL ACTIONS
    // ========================================================================

    /// Every action the current phase offers, in board order
    pub fn legal_actions(&self) -> Vec<Action> {
        crate::presentation::clickable_positions(self)
            .into_iter()
            .map(|(_, action)| action)
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
