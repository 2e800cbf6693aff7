//! YINSH Core - Rule engine
//!
//! This crate provides the game logic for YINSH:
//! - Board geometry (hex grid with axial coordinates)
//! - Rings, markers and players
//! - Ring slide generation with marker jumps
//! - Run-of-five detection
//! - Game phases and action handling
//! - Click-to-action mapping for front ends

pub mod board;
pub mod pieces;
pub mod moves;
pub mod runs;
pub mod game;
pub mod presentation;
pub mod ruleset;

// Re-exports for convenient access
pub use board::{Board, Hex, AXES, BOARD_RADIUS, DIRECTIONS};
pub use pieces::{Occupant, Player};
pub use moves::{available_moves, moveable_ring, valid_move};
pub use runs::{runs_of_five, RUN_LENGTH};
pub use game::{Action, GameState, Phase};
pub use presentation::{click_action, clickable_positions, Glyph};
pub use ruleset::{RuleSet, RuleSetError};
