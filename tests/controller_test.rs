//! Integration tests for the game controller state machine.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactui::{
    Cell, ControllerError, GameController, Mark, Mode, MoveOutcome, Outcome, Phase, Position,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).unwrap())
        .collect()
}

#[test]
fn test_marks_alternate_starting_with_x() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);
    assert_eq!(controller.turn(), Mark::X);

    controller.submit_move(Position::Center);
    assert_eq!(controller.turn(), Mark::O);

    controller.submit_move(Position::TopLeft);
    assert_eq!(controller.turn(), Mark::X);

    assert_eq!(controller.board().get(Position::Center), Cell::Occupied(Mark::X));
    assert_eq!(controller.board().get(Position::TopLeft), Cell::Occupied(Mark::O));
    // only the two cells played are occupied
    let occupied = controller
        .board()
        .cells()
        .iter()
        .filter(|c| **c != Cell::Empty)
        .count();
    assert_eq!(occupied, 2);
}

#[test]
fn test_move_into_occupied_cell_is_noop() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);
    controller.submit_move(Position::Center);

    let before = controller.clone();
    let outcome = controller.submit_move(Position::Center);

    assert_eq!(outcome, MoveOutcome::Ignored);
    assert_eq!(controller.board(), before.board());
    assert_eq!(controller.turn(), before.turn());
    assert_eq!(controller.phase(), before.phase());
}

#[test]
fn test_move_without_round_is_noop() {
    let mut controller = GameController::new();
    assert_eq!(controller.submit_move(Position::Center), MoveOutcome::Ignored);
    assert!(controller.board().is_empty(Position::Center));
}

#[test]
fn test_x_wins_top_row_scenario() {
    // X@0, O@3, X@1, O@4, X@2 -> top row all X
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);

    let moves = positions(&[0, 3, 1, 4]);
    for pos in &moves {
        assert!(matches!(
            controller.submit_move(*pos),
            MoveOutcome::Placed { .. }
        ));
    }

    let outcome = controller.submit_move(Position::from_index(2).unwrap());
    assert!(matches!(
        outcome,
        MoveOutcome::Ended {
            mark: Mark::X,
            outcome: Outcome::Winner(Mark::X),
            ..
        }
    ));
    assert_eq!(controller.phase(), Phase::Terminal(Outcome::Winner(Mark::X)));
    assert_eq!(controller.scores().x_wins(), 1);
    assert_eq!(controller.scores().o_wins(), 0);
}

#[test]
fn test_terminal_round_accepts_no_moves() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);
    for pos in positions(&[0, 3, 1, 4, 2]) {
        controller.submit_move(pos);
    }
    assert!(matches!(controller.phase(), Phase::Terminal(_)));

    let before = controller.clone();
    assert_eq!(
        controller.submit_move(Position::BottomRight),
        MoveOutcome::Ignored
    );
    assert_eq!(controller.board(), before.board());
    assert_eq!(controller.scores(), before.scores());
}

#[test]
fn test_draw_scenario() {
    // X@0, O@1, X@2, O@3, X@4, O@5, X@7, O@6, X@8 -> full, no line
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);

    let moves = positions(&[0, 1, 2, 3, 4, 5, 7, 6]);
    for pos in &moves {
        assert!(matches!(
            controller.submit_move(*pos),
            MoveOutcome::Placed { .. }
        ));
    }

    let outcome = controller.submit_move(Position::from_index(8).unwrap());
    assert!(matches!(
        outcome,
        MoveOutcome::Ended {
            outcome: Outcome::Draw,
            ..
        }
    ));
    assert_eq!(controller.phase(), Phase::Terminal(Outcome::Draw));
    assert_eq!(controller.scores().x_wins(), 0);
    assert_eq!(controller.scores().o_wins(), 0);
}

#[test]
fn test_scores_persist_across_rounds() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);
    for pos in positions(&[0, 3, 1, 4, 2]) {
        controller.submit_move(pos);
    }
    assert_eq!(controller.scores().x_wins(), 1);

    controller.start_round(Mode::TwoPlayer);
    assert_eq!(controller.scores().x_wins(), 1, "start must not touch scores");
    assert!(controller.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(controller.turn(), Mark::X);

    controller.reset_scores();
    assert_eq!(controller.scores().x_wins(), 0);
    assert_eq!(controller.scores().o_wins(), 0);
}

#[test]
fn test_restart_resets_scores_and_reopens_mode_select() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);
    for pos in positions(&[0, 3, 1, 4, 2]) {
        controller.submit_move(pos);
    }
    assert_eq!(controller.scores().x_wins(), 1);

    controller.restart();
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.scores().x_wins(), 0);
    assert!(controller.snapshot().show_mode_select);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut controller = GameController::new();
    controller.start_round(Mode::TwoPlayer);

    let err = controller.submit_index(9).unwrap_err();
    assert_eq!(err, ControllerError::InvalidCell(9));
    assert!(controller.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(controller.turn(), Mark::X);
}

#[test]
fn test_computer_move_places_one_o_and_returns_turn_to_x() {
    let mut controller = GameController::new();
    let round = controller.start_round(Mode::VsComputer);
    assert!(!controller.computer_to_move(), "no computer move at round start");

    controller.submit_move(Position::Center);
    assert!(controller.computer_to_move());

    let mut rng = StdRng::seed_from_u64(42);
    let outcome = controller.computer_move(round, &mut rng);

    let (mark, position) = match outcome {
        MoveOutcome::Placed { mark, position } => (mark, position),
        other => panic!("expected placed move, got {:?}", other),
    };
    assert_eq!(mark, Mark::O);
    assert_ne!(position, Position::Center, "computer must pick an empty cell");
    assert_eq!(controller.board().get(position), Cell::Occupied(Mark::O));
    assert_eq!(controller.turn(), Mark::X);

    let o_marks = controller
        .board()
        .cells()
        .iter()
        .filter(|c| **c == Cell::Occupied(Mark::O))
        .count();
    assert_eq!(o_marks, 1);
}

#[test]
fn test_computer_move_is_deterministic_under_a_seed() {
    let choose = |seed: u64| {
        let mut controller = GameController::new();
        let round = controller.start_round(Mode::VsComputer);
        controller.submit_move(Position::Center);
        let mut rng = StdRng::seed_from_u64(seed);
        match controller.computer_move(round, &mut rng) {
            MoveOutcome::Placed { position, .. } => position,
            other => panic!("expected placed move, got {:?}", other),
        }
    };

    assert_eq!(choose(7), choose(7));
    assert_eq!(choose(1234), choose(1234));
}

#[test]
fn test_zero_rng_picks_first_empty_cell() {
    // A zero-yielding RNG makes gen_range return the lower bound, so
    // the computer takes the lowest-index empty cell.
    let mut controller = GameController::new();
    let round = controller.start_round(Mode::VsComputer);
    controller.submit_move(Position::TopLeft);

    let mut rng = StepRng::new(0, 0);
    let outcome = controller.computer_move(round, &mut rng);
    assert!(matches!(
        outcome,
        MoveOutcome::Placed {
            mark: Mark::O,
            position: Position::TopCenter,
        }
    ));
}

#[test]
fn test_computer_only_selects_empty_cells() {
    for seed in 0..50 {
        let mut controller = GameController::new();
        let round = controller.start_round(Mode::VsComputer);
        controller.submit_move(Position::Center);

        let empties_before: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|p| controller.board().is_empty(*p))
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        match controller.computer_move(round, &mut rng) {
            MoveOutcome::Placed { position, .. } => {
                assert!(empties_before.contains(&position), "seed {}", seed);
            }
            other => panic!("expected placed move, got {:?}", other),
        }
    }
}

#[test]
fn test_stale_round_computer_move_is_suppressed() {
    let mut controller = GameController::new();
    let first_round = controller.start_round(Mode::VsComputer);
    controller.submit_move(Position::Center);
    assert!(controller.computer_to_move());

    // Restart races the scheduled move
    controller.restart();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        controller.computer_move(first_round, &mut rng),
        MoveOutcome::Ignored
    );
    assert!(controller.board().cells().iter().all(|c| *c == Cell::Empty));

    // Same for a fresh round started before the old delay fires
    let second_round = controller.start_round(Mode::VsComputer);
    assert_ne!(first_round, second_round);
    assert_eq!(
        controller.computer_move(first_round, &mut rng),
        MoveOutcome::Ignored
    );
    assert!(controller.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_terminal_round_suppresses_computer_move() {
    let mut controller = GameController::new();
    let round = controller.start_round(Mode::VsComputer);
    // Drive the round to an X win by submitting both sides' moves
    for pos in positions(&[0, 3, 1, 4, 2]) {
        controller.submit_move(pos);
    }
    assert!(matches!(controller.phase(), Phase::Terminal(_)));

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(controller.computer_move(round, &mut rng), MoveOutcome::Ignored);
}

#[test]
fn test_computer_win_increments_o_counter() {
    // A zero RNG takes the lowest empty cell each turn, so O collects
    // the top row while X plays elsewhere and never blocks.
    let mut controller = GameController::new();
    let round = controller.start_round(Mode::VsComputer);
    let mut rng = StepRng::new(0, 0);

    controller.submit_move(Position::Center); // X@4
    controller.computer_move(round, &mut rng); // O@0
    controller.submit_move(Position::BottomRight); // X@8
    controller.computer_move(round, &mut rng); // O@1
    controller.submit_move(Position::MiddleRight); // X@5
    let outcome = controller.computer_move(round, &mut rng); // O@2 completes the top row

    assert!(matches!(
        outcome,
        MoveOutcome::Ended {
            mark: Mark::O,
            outcome: Outcome::Winner(Mark::O),
            ..
        }
    ));
    assert_eq!(controller.phase(), Phase::Terminal(Outcome::Winner(Mark::O)));
    assert_eq!(controller.scores().x_wins(), 0);
    assert_eq!(controller.scores().o_wins(), 1);
}
