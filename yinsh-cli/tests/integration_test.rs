//! Integration tests for the YINSH rule engine
//!
//! Tests whole games: scripted scenarios plus seeded random playouts that
//! only ever issue actions the engine offers.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use yinsh_core::{
    available_moves, click_action, runs_of_five, Action, Board, GameState, Hex, Occupant, Phase,
    Player, RuleSet, BOARD_RADIUS,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn small_ruleset() -> RuleSet {
    RuleSet {
        name: "test".to_string(),
        rings_per_player: 2,
        ..RuleSet::default()
    }
}

/// Play up to `max_actions` random offered actions, checking each step
fn random_playout(seed: u64, max_actions: usize) -> Vec<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut history = vec![GameState::new(&RuleSet::default())];

    for _ in 0..max_actions {
        let state = history.last().unwrap();
        let actions = state.legal_actions();
        let Some(action) = actions.choose(&mut rng) else {
            break;
        };
        let next = state.apply(action);
        assert_ne!(&next, state, "offered action {:?} was rejected", action);
        history.push(next);
    }

    history
}

fn ring_count(board: &Board) -> usize {
    board.positions().filter(|(_, o)| o.is_ring()).count()
}

/// Rings on the board plus the one lifted for a slide
fn rings_in_play(state: &GameState) -> usize {
    let lifted = matches!(state.phase(), Phase::MovingRing { .. }) as usize;
    ring_count(state.board()) + lifted
}

fn marker_count(board: &Board) -> usize {
    board.positions().filter(|(_, o)| o.is_marker()).count()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_setup_alternates_players() {
    let mut state = GameState::new(&small_ruleset());
    let cells = [Hex::new(0, 0), Hex::new(2, 0), Hex::new(0, 2), Hex::new(-2, 0)];
    let mut expected = Player::White;

    for (i, &hex) in cells.iter().enumerate() {
        assert_eq!(state.current_player(), expected);
        state = state.apply(&Action::PlaceRing { at: hex });
        assert_eq!(state.board().get(hex), Some(Occupant::Ring(expected)));
        expected = expected.next();

        if i + 1 < cells.len() {
            assert!(matches!(state.phase(), Phase::PlacingRing { .. }));
        }
    }

    assert_eq!(state.phase(), &Phase::PlacingMarker { player: Player::White });
    assert_eq!(ring_count(state.board()), 4);
}

#[test]
fn test_click_drives_full_turn() {
    let ruleset = RuleSet { rings_per_player: 1, ..small_ruleset() };
    let clicks = [Hex::new(0, 0), Hex::new(-3, 0), Hex::new(0, 0), Hex::new(0, 3)];

    let state = clicks.iter().fold(GameState::new(&ruleset), |state, &hex| {
        let action = click_action(&state, hex).expect("click should be offered");
        state.apply(&action)
    });

    assert_eq!(state.board().get(Hex::new(0, 0)), Some(Occupant::Marker(Player::White)));
    assert_eq!(state.board().get(Hex::new(0, 3)), Some(Occupant::Ring(Player::White)));
    assert_eq!(state.phase(), &Phase::PlacingMarker { player: Player::Black });
}

#[test]
fn test_slide_completes_and_clears_run() {
    // Four White markers on r = 0, a White ring one step past the row
    let mut board = Board::empty(BOARD_RADIUS);
    for q in -2..2 {
        board = board.set(Hex::new(q, 0), Occupant::Marker(Player::White));
    }
    board = board
        .set(Hex::new(2, 0), Occupant::Ring(Player::White))
        .set(Hex::new(-3, 3), Occupant::Ring(Player::Black));
    let state = GameState::from_parts(board, Phase::PlacingMarker { player: Player::White });

    let state = state
        .apply(&Action::PlaceMarker { at: Hex::new(2, 0) })
        .apply(&Action::MoveRing { from: Hex::new(2, 0), to: Hex::new(2, 2) });

    let expected: BTreeSet<Hex> = (-2..3).map(|q| Hex::new(q, 0)).collect();
    assert_eq!(
        state.phase(),
        &Phase::RemovingRun { runs: vec![expected.clone()], player: Player::White }
    );

    let action = click_action(&state, Hex::new(0, 0)).unwrap();
    let state = state.apply(&action);
    assert_eq!(state.phase(), &Phase::PlacingMarker { player: Player::Black });
    assert_eq!(marker_count(state.board()), 0);
    assert_eq!(ring_count(state.board()), 2);
}

#[test]
fn test_jump_flips_and_lands() {
    let board = Board::empty(BOARD_RADIUS)
        .set(Hex::new(0, 0), Occupant::Ring(Player::Black))
        .set(Hex::new(0, 1), Occupant::Marker(Player::White))
        .set(Hex::new(0, 2), Occupant::Marker(Player::White))
        .set(Hex::new(3, -3), Occupant::Ring(Player::White));
    let state = GameState::from_parts(board, Phase::PlacingMarker { player: Player::Black });

    let state = state.apply(&Action::PlaceMarker { at: Hex::new(0, 0) });
    let moves = available_moves(Hex::new(0, 0), state.board());
    // Past the two markers the landing cell is (0, 3); (0, 4) is out of reach
    assert!(moves.contains(&Hex::new(0, 3)));
    assert!(!moves.contains(&Hex::new(0, 4)));

    let state = state.apply(&Action::MoveRing { from: Hex::new(0, 0), to: Hex::new(0, 3) });
    assert_eq!(state.board().get(Hex::new(0, 1)), Some(Occupant::Marker(Player::Black)));
    assert_eq!(state.board().get(Hex::new(0, 2)), Some(Occupant::Marker(Player::Black)));
    assert_eq!(state.board().get(Hex::new(0, 3)), Some(Occupant::Ring(Player::Black)));
}

// ============================================================================
// RANDOM PLAYOUTS
// ============================================================================

#[test]
fn test_random_playouts_keep_invariants() {
    let ruleset = RuleSet::default();
    let total_rings = ruleset.rings_per_player as usize * 2;

    for seed in 0..20 {
        let history = random_playout(seed, 200);

        for pair in history.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);

            // Rings are only ever placed; a sliding ring is off the board
            // under its marker until it lands
            let rings = rings_in_play(after);
            assert!(rings >= rings_in_play(before), "seed {}", seed);
            assert!(rings <= total_rings, "seed {}", seed);

            // The turn passes exactly on ring placement, a plain slide or a clear
            let handed_over = match (before.phase(), after.phase()) {
                (Phase::PlacingRing { .. }, _) => true,
                (Phase::PlacingMarker { .. }, Phase::MovingRing { .. }) => false,
                (Phase::MovingRing { .. }, Phase::PlacingMarker { .. }) => true,
                (Phase::MovingRing { .. }, Phase::RemovingRun { .. }) => false,
                (Phase::RemovingRun { .. }, Phase::PlacingMarker { .. }) => true,
                (b, a) => panic!("unexpected transition {:?} -> {:?}", b, a),
            };
            let expected = if handed_over {
                before.current_player().next()
            } else {
                before.current_player()
            };
            assert_eq!(after.current_player(), expected, "seed {}", seed);

            // Runs pending removal are exactly the ones on the board
            if let Phase::RemovingRun { runs, .. } = after.phase() {
                assert_eq!(runs, &runs_of_five(after.board()));
            }
        }
    }
}

#[test]
fn test_random_playouts_are_deterministic() {
    let a = random_playout(7, 60);
    let b = random_playout(7, 60);
    assert_eq!(a.last(), b.last());
}

#[test]
fn test_offered_actions_never_noop_and_others_do() {
    let history = random_playout(3, 40);

    for state in &history {
        let offered: Vec<Action> = state.legal_actions();
        for action in &offered {
            assert_ne!(&state.apply(action), state);
        }

        // An action kind from another phase is always ignored
        let stray = match state.phase() {
            Phase::PlacingRing { .. } => Action::PlaceMarker { at: Hex::new(0, 0) },
            _ => Action::PlaceRing { at: Hex::new(0, 0) },
        };
        assert_eq!(&state.apply(&stray), state);
    }
}
