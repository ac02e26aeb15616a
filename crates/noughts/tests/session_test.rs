//! Tests for the typestate game session.

use noughts::{
    GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player, Position, Square,
};

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new().start(Player::Human);
    assert_eq!(game.to_move(), Player::Human);

    let result = game.play_human(Position::Center).expect("Valid move");
    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };
    assert_eq!(game.to_move(), Player::Computer);

    let game = match game.play_computer().expect("Computer move") {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after two moves"),
    };
    assert_eq!(game.to_move(), Player::Human);
    assert_eq!(game.history().len(), 2);
    assert_eq!(
        game.board().get(Position::TopLeft),
        Square::Occupied(Player::Computer)
    );
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new().start(Player::Human);
    let GameResult::InProgress(game) = game.play_human(Position::Center).unwrap() else {
        panic!("Unexpected finish");
    };

    let result = game.make_move(Move::new(Player::Computer, Position::Center));
    assert!(matches!(result, Err(MoveError::SquareOccupied(Position::Center))));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::Human);
    let result = game.make_move(Move::new(Player::Computer, Position::Center));
    assert!(matches!(result, Err(MoveError::WrongPlayer(Player::Computer))));
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    assert_eq!(
        Position::from_coords(1, 3),
        Err(MoveError::OutOfBounds { row: 1, col: 3 })
    );
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Player::Human, Position::Center),
        Move::new(Player::Computer, Position::TopLeft),
        Move::new(Player::Human, Position::BottomRight),
        Move::new(Player::Computer, Position::TopRight),
        Move::new(Player::Human, Position::BottomLeft),
    ];

    match GameInProgress::replay(Player::Human, &moves).expect("Valid replay") {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Player::Computer);
            assert_eq!(game.valid_moves().len(), 4);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_human_win_detection() {
    let moves = vec![
        Move::new(Player::Human, Position::TopLeft),
        Move::new(Player::Computer, Position::Center),
        Move::new(Player::Human, Position::TopCenter),
        Move::new(Player::Computer, Position::BottomLeft),
        Move::new(Player::Human, Position::TopRight),
    ];

    match GameInProgress::replay(Player::Human, &moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::Human));
            assert_eq!(game.outcome().message(), "Player wins!");
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    let moves = vec![
        Move::new(Player::Human, Position::TopLeft),
        Move::new(Player::Computer, Position::Center),
        Move::new(Player::Human, Position::TopRight),
        Move::new(Player::Computer, Position::TopCenter),
        Move::new(Player::Human, Position::BottomCenter),
        Move::new(Player::Computer, Position::MiddleLeft),
        Move::new(Player::Human, Position::MiddleRight),
        Move::new(Player::Computer, Position::BottomRight),
        Move::new(Player::Human, Position::BottomLeft),
    ];

    match GameInProgress::replay(Player::Human, &moves).expect("Valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw);
            assert_eq!(game.outcome().message(), "It's a draw!");
            assert_eq!(game.history().len(), 9);
        }
        GameResult::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_computer_completes_open_row() {
    let moves = vec![
        Move::new(Player::Computer, Position::TopLeft),
        Move::new(Player::Human, Position::MiddleLeft),
        Move::new(Player::Computer, Position::TopCenter),
        Move::new(Player::Human, Position::Center),
    ];

    let GameResult::InProgress(game) = GameInProgress::replay(Player::Computer, &moves).unwrap()
    else {
        panic!("Game should be in progress");
    };
    assert_eq!(game.turn_message(), "computer's turn (O)");

    match game.play_computer().unwrap() {
        GameResult::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Player::Computer));
            assert_eq!(game.outcome().message(), "Computer wins!");
            assert_eq!(
                game.board().get(Position::TopRight),
                Square::Occupied(Player::Computer)
            );
        }
        GameResult::InProgress(_) => panic!("Computer should have won"),
    }
}

#[test]
fn test_full_game_against_computer_never_lost() {
    // The human always takes the first empty square.
    let mut game = GameSetup::new().start(Player::Human);
    let finished = loop {
        let result = match game.to_move() {
            Player::Human => {
                let position = game.valid_moves()[0];
                game.play_human(position).unwrap()
            }
            Player::Computer => game.play_computer().unwrap(),
        };
        match result {
            GameResult::InProgress(g) => game = g,
            GameResult::Finished(g) => break g,
        }
    };

    assert_ne!(finished.outcome(), &Outcome::Winner(Player::Human));
}

#[test]
fn test_restart() {
    let moves = vec![
        Move::new(Player::Human, Position::TopLeft),
        Move::new(Player::Computer, Position::Center),
        Move::new(Player::Human, Position::TopCenter),
        Move::new(Player::Computer, Position::BottomLeft),
        Move::new(Player::Human, Position::TopRight),
    ];

    let GameResult::Finished(game) = GameInProgress::replay(Player::Human, &moves).unwrap() else {
        panic!("Game should be finished");
    };

    let new_game = game.restart().start(Player::Computer);
    assert_eq!(new_game.to_move(), Player::Computer);
    assert!(new_game.history().is_empty());
    assert_eq!(new_game.board().occupied(), 0);
}
