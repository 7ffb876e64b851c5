use othello_play::connectors::TerminalDisplay;
use othello_rules::{Board, Color, Engine, EngineError, GameState, Outcome, Rules};
use std::io::Cursor;

type Terminal = TerminalDisplay<Cursor<Vec<u8>>, Vec<u8>>;

fn terminal(input: &str) -> Terminal {
    TerminalDisplay::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn plays_typed_moves_until_input_ends() {
    let mut engine = Engine::new(terminal("a1\nnonsense\nd3\n2 2\n"));

    assert_eq!(
        engine.run(),
        Err(EngineError::InputClosed {
            active: Color::Black
        })
    );
    assert_eq!(engine.display().markers(), &engine.state().board);

    let output = String::from_utf8(engine.into_display().into_output()).unwrap();
    assert_eq!(output.matches("Cannot parse move.").count(), 1);
    assert!(output.contains("**black** has 2 pieces up --- white has 2 pieces up"));
    assert!(output.contains("black has 4 pieces up --- **white** has 1 pieces up"));
    // White's "2 2" is C3, which retakes D4 along the diagonal to E5.
    assert!(output.contains("**black** has 3 pieces up --- white has 3 pieces up"));
}

#[test]
fn reports_the_winner() {
    #[rustfmt::skip]
    let board: Board = [
        "WWWWWWWW", "WWWWWWWW", "WWWWWWWW", "WWWWWWWW",
        "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBB.",
    ]
    .concat()
    .parse()
    .unwrap();
    let state = GameState::from_board(board, Color::White);
    let mut engine = Engine::from_state(state, terminal("H8\n"), Rules::default());

    assert_eq!(engine.run(), Ok(Outcome::WhiteWins));
    let output = String::from_utf8(engine.into_display().into_output()).unwrap();
    assert!(output.ends_with("Game over. The winner is white.\n"));
    assert!(output.contains("\n8 B B B B B B B W"));
}
