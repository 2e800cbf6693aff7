//! Board command - print board geometry as JSON
//!
//! Lists every playable cell with its screen position and glyph, plus the
//! direction vectors, for front ends that draw their own board.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use yinsh_core::{Board, Glyph, DIRECTIONS};

use crate::config::RuleSetArgs;

#[derive(Args)]
pub struct BoardArgs {
    #[command(flatten)]
    pub ruleset: RuleSetArgs,

    /// Distance between neighbouring cells in output units
    #[arg(long, default_value = "1.0")]
    pub scale: f64,
}

#[derive(Serialize)]
struct CellInfo {
    q: i8,
    r: i8,
    label: (String, String),
    x: f64,
    y: f64,
    glyph: Glyph,
    color: Option<&'static str>,
}

#[derive(Serialize)]
struct BoardInfo {
    radius: f32,
    cells: Vec<CellInfo>,
    directions: Vec<[i8; 2]>,
    direction_names: Vec<&'static str>,
}

pub fn run(args: BoardArgs) -> Result<()> {
    let ruleset = args.ruleset.resolve()?;
    let info = board_info(&Board::empty(ruleset.radius), args.scale);

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn board_info(board: &Board, scale: f64) -> BoardInfo {
    let cells = board
        .positions()
        .map(|(hex, occupant)| {
            let (x, y) = hex.to_cartesian(scale);
            let glyph = Glyph::from(occupant);
            CellInfo {
                q: hex.q,
                r: hex.r,
                label: hex.format(),
                x,
                y,
                glyph,
                color: glyph.color(),
            }
        })
        .collect();

    BoardInfo {
        radius: board.radius(),
        cells,
        directions: DIRECTIONS.iter().map(|&(dq, dr)| [dq, dr]).collect(),
        direction_names: vec!["E", "NE", "NW", "W", "SW", "SE"],
    }
}
