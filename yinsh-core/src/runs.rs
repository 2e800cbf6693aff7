//! Run-of-five detection
//!
//! A run is a maximal straight line of marker cells along one of the three
//! axes. Marker faces are not compared: any five contiguous markers count.

use std::collections::BTreeSet;

use crate::board::{Board, Hex};
use crate::pieces::Occupant;

/// Exact length of a scoring run
pub const RUN_LENGTH: usize = 5;

/// Every maximal marker line of exactly `RUN_LENGTH` cells
///
/// Lines are reported in board order of their first discovering cell, with
/// repeats collapsed. A cell shared by two runs appears in both sets.
pub fn runs_of_five(board: &Board) -> Vec<BTreeSet<Hex>> {
    let mut runs: Vec<BTreeSet<Hex>> = Vec::new();

    for (hex, occupant) in board.positions() {
        if !occupant.is_marker() {
            continue;
        }

        for line in board.contiguous_lines(hex, Occupant::is_marker) {
            if line.len() != RUN_LENGTH {
                continue;
            }
            let run: BTreeSet<Hex> = line.into_iter().collect();
            if !runs.contains(&run) {
                runs.push(run);
            }
        }
    }

    runs
}
