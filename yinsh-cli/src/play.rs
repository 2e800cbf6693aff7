//! Play command - hot-seat game in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session()
//! - Level 3: handle_line(), describe_phase()
//! - Level 4: input parsing

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;

use serde::Serialize;

use yinsh_core::{click_action, clickable_positions, Action, GameState, Hex, Phase};

use crate::config::RuleSetArgs;
use crate::render::render_board;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub ruleset: RuleSetArgs,
}

/// Machine-readable position, printed by the `state` input
#[derive(Serialize)]
struct StateDump<'a> {
    phase: &'a Phase,
    actions: Vec<Action>,
}

/// Outcome of one input line
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve the ruleset
/// 2. Play until the players quit or nobody can act
pub fn run(args: PlayArgs) -> Result<()> {
    let ruleset = args.ruleset.resolve()?;

    tracing::info!(
        "Starting game '{}': radius={}, rings per player={}",
        ruleset.name,
        ruleset.radius,
        ruleset.rings_per_player
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let state = play_session(GameState::new(&ruleset), stdin.lock(), stdout.lock())?;

    tracing::info!(phase = ?state.phase(), "Game ended");
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read clicks until input ends, the players quit, or no action is offered
fn play_session<R: BufRead, W: Write>(
    mut state: GameState,
    input: R,
    mut output: W,
) -> Result<GameState> {
    let mut lines = input.lines();

    loop {
        write!(output, "\n{}", render_board(state.board()))?;

        if clickable_positions(&state).is_empty() {
            writeln!(output, "{} has nothing to play. Game over.", state.current_player())?;
            return Ok(state);
        }

        writeln!(output, "{}", describe_phase(state.phase()))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(state);
        };
        let line = line?;

        if handle_line(&mut state, line.trim(), &mut output)? == Step::Quit {
            return Ok(state);
        }
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one line of input to the game
fn handle_line<W: Write>(state: &mut GameState, line: &str, output: &mut W) -> Result<Step> {
    match line {
        "" => {}
        "quit" | "q" => return Ok(Step::Quit),
        "moves" | "m" => {
            let cells: Vec<String> = clickable_positions(state)
                .into_iter()
                .map(|(hex, _)| format!("{},{}", hex.q, hex.r))
                .collect();
            writeln!(output, "Clickable: {}", cells.join(" "))?;
        }
        "state" | "s" => {
            let dump = StateDump { phase: state.phase(), actions: state.legal_actions() };
            writeln!(output, "{}", serde_json::to_string(&dump)?)?;
        }
        _ => match parse_hex(line) {
            Some(hex) => match click_action(state, hex) {
                Some(action) => *state = state.apply(&action),
                None => writeln!(output, "Nothing to do at {},{}", hex.q, hex.r)?,
            },
            None => writeln!(output, "Enter a cell as 'q r', 'moves', 'state' or 'quit'")?,
        },
    }
    Ok(Step::Continue)
}

fn describe_phase(phase: &Phase) -> String {
    match phase {
        Phase::PlacingRing { remaining, player } => {
            format!("{}: place a ring ({} more after this)", player, remaining)
        }
        Phase::PlacingMarker { player } => format!("{}: drop a marker into one of your rings", player),
        Phase::MovingRing { origin, player } => {
            format!("{}: slide the ring from {},{}", player, origin.q, origin.r)
        }
        Phase::RemovingRing { player } => format!("{}: remove one of your rings", player),
        Phase::RemovingRun { runs, player } => {
            format!("{}: pick a cell of a run to clear ({} runs)", player, runs.len())
        }
    }
}

// ============================================================================
// LEVEL 4 - INPUT PARSING
// ============================================================================

/// Accepts "q r", "q,r" or "q, r"
fn parse_hex(input: &str) -> Option<Hex> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let q = parts.next()?.parse().ok()?;
    let r = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Hex::new(q, r))
}

// ============================================================================
// TESTS
// ============================================================================
