//! Ring slide generation
//!
//! A ring slides along any of the six rays from its cell. It may stop on
//! any empty cell before the first obstruction, or jump a contiguous run
//! of markers and land on the first empty cell right after it. Rings and
//! the board edge block both.

use std::collections::BTreeSet;

use crate::board::{Board, Hex};
use crate::pieces::{Occupant, Player};

/// Scan position along one ray
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    /// Still on the leading run of empty cells
    Open,
    /// Crossing markers; the next empty cell is the landing spot
    Jumping,
    /// Nothing further on this ray
    Done,
}

/// Destinations reachable along a single ray (ordered outward from the ring)
fn ray_destinations(board: &Board, ray: &[Hex], out: &mut BTreeSet<Hex>) {
    let mut scan = Scan::Open;

    for &hex in ray {
        let occupant = match board.get(hex) {
            Some(o) => o,
            None => break,
        };

        scan = match (scan, occupant) {
            (Scan::Open, Occupant::Empty) => {
                out.insert(hex);
                Scan::Open
            }
            (Scan::Open, Occupant::Marker(_)) => Scan::Jumping,
            (Scan::Jumping, Occupant::Marker(_)) => Scan::Jumping,
            (Scan::Jumping, Occupant::Empty) => {
                out.insert(hex);
                Scan::Done
            }
            (_, Occupant::Ring(_)) | (Scan::Done, _) => Scan::Done,
        };

        if scan == Scan::Done {
            break;
        }
    }
}

/// All legal slide destinations for the ring at `origin`
pub fn available_moves(origin: Hex, board: &Board) -> BTreeSet<Hex> {
    let mut destinations = BTreeSet::new();
    if !board.contains(origin) {
        return destinations;
    }
    for ray in board.rays_from(origin) {
        ray_destinations(board, &ray, &mut destinations);
    }
    destinations
}

/// Whether a ring at `origin` may slide to `destination`
pub fn valid_move(board: &Board, origin: Hex, destination: Hex) -> bool {
    available_moves(origin, board).contains(&destination)
}

/// Whether the cell holds a ring of `player` that has somewhere to go
pub fn moveable_ring(board: &Board, (hex, occupant): (Hex, Occupant), player: Player) -> bool {
    occupant == Occupant::Ring(player) && !available_moves(hex, board).is_empty()
}
