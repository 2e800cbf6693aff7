//! Text rendering of the board
//!
//! Each row `r` is shifted by half a cell per step, so column `2q + r`
//! lines cells up the way the hex lattice sits on screen.

use yinsh_core::{Board, Glyph, Player};

fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Point => '.',
        Glyph::Ring(Player::White) => 'W',
        Glyph::Ring(Player::Black) => 'B',
        Glyph::Marker(Player::White) => 'w',
        Glyph::Marker(Player::Black) => 'b',
    }
}

/// One line per row, labelled with its `r` coordinate
pub fn render_board(board: &Board) -> String {
    let cells: Vec<_> = board.positions().collect();
    let (Some(min_col), Some(min_r), Some(max_r)) = (
        cells.iter().map(|(h, _)| 2 * h.q as i32 + h.r as i32).min(),
        cells.iter().map(|(h, _)| h.r).min(),
        cells.iter().map(|(h, _)| h.r).max(),
    ) else {
        return String::new();
    };

    let mut out = String::new();
    for r in min_r..=max_r {
        let mut row: Vec<char> = Vec::new();
        for (hex, occupant) in cells.iter().filter(|(h, _)| h.r == r) {
            let col = (2 * hex.q as i32 + hex.r as i32 - min_col) as usize;
            if row.len() <= col {
                row.resize(col + 1, ' ');
            }
            row[col] = glyph_char(Glyph::from(*occupant));
        }
        let line: String = row.into_iter().collect();
        out.push_str(&format!("{:>3} {}\n", r, line.trim_end()));
    }
    out
}
