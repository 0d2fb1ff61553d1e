//! End-to-end tests for the line-oriented session.

use rewind::{RewindConfig, Session};
use rewind_tictactoe::{GameStatus, Player, SortOrder};
use std::io::Cursor;

fn run_script(config: &RewindConfig, script: &str) -> (Session, String) {
    let mut session = Session::new(config).expect("valid config");
    let mut output = Vec::new();
    session
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("session runs");
    (session, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_play_to_win() {
    let (session, output) = run_script(
        &RewindConfig::default(),
        "move 0\nmove 3\nmove 1\nmove 4\nmove 2\n",
    );

    assert_eq!(session.game().status(), GameStatus::Won { player: Player::X });
    assert!(output.contains("Winning line: 0, 1, 2"));
    assert!(output.trim_end().ends_with("Winner: X"));
}

#[test]
fn test_rewind_and_branch_through_commands() {
    let (session, output) = run_script(
        &RewindConfig::default(),
        "m 0\nm 4\nm 8\nm 2\nj 2\nm 6\nhistory\n",
    );

    let game = session.game();
    assert_eq!(game.len(), 4);
    assert_eq!(game.current().last_move().unwrap().index(), 6);
    assert!(output.contains("> Go to move #3 @ (0, 2)"));
    assert!(!output.contains("Go to move #4"));
}

#[test]
fn test_bad_input_does_not_end_session() {
    let (session, output) = run_script(
        &RewindConfig::default(),
        "fly\njump 9\nmove\nmove 4\nstatus\n",
    );

    assert!(output.contains("Error: Unknown command \"fly\""));
    assert!(output.contains("Error: Invalid step 9: history has 1 entries"));
    assert!(output.contains("Error: 'move' needs a number"));
    assert!(output.trim_end().ends_with("Next player: O"));
    assert_eq!(session.game().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (session, output) = run_script(&RewindConfig::default(), "move 4\nquit\nmove 0\n");

    assert_eq!(session.game().len(), 2);
    assert!(output.trim_end().ends_with("Bye."));
}

#[test]
fn test_sort_toggles_history_order() {
    let (session, output) = run_script(&RewindConfig::default(), "m 4\nsort\n");

    assert_eq!(session.order(), SortOrder::Descending);
    let listing: Vec<&str> = output
        .lines()
        .skip_while(|line| !line.starts_with('['))
        .collect();
    assert_eq!(
        listing,
        vec![
            "[Switch to Asc ordering]",
            "> Go to move #1 @ (1, 1)",
            "  Go to game start",
        ]
    );
}

#[test]
fn test_configured_size_and_order() {
    let config = RewindConfig::new(4, SortOrder::Descending);
    let (session, output) = run_script(&config, "board\n");

    assert_eq!(session.game().size(), 4);
    assert_eq!(session.order(), SortOrder::Descending);
    assert!(output.starts_with(". . . .\n"));
}

#[test]
fn test_invalid_size_rejected() {
    let config = RewindConfig::default().with_board_size(0);
    assert!(Session::new(&config).is_err());
}

#[test]
fn test_huge_size_flag_is_an_error() {
    let config = RewindConfig::default().with_size_flag(Some(1 << 21));
    assert!(Session::new(&config).is_err());
}
