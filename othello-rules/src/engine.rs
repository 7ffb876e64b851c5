//! The turn loop that drives a game against a [`BoardDisplay`].

use crate::{sync_display, BoardDisplay, Color, GameState, Location, Outcome, Rules};
use derive_more::{Display, Error};
use tracing::{debug, info, trace};

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The display stopped supplying selections before the game finished.
    #[display(fmt = "input closed while waiting for a move from {}", active)]
    InputClosed { active: Color },
}

/// Owns the game state and plays it out through a display.
pub struct Engine<D> {
    state: GameState,
    display: D,
    rules: Rules,
}

impl<D: BoardDisplay> Engine<D> {
    /// A new game under the default rules.
    pub fn new(display: D) -> Self {
        Self::with_rules(display, Rules::default())
    }

    pub fn with_rules(display: D, rules: Rules) -> Self {
        Self::from_state(GameState::new(), display, rules)
    }

    /// Resume play from an arbitrary position.
    pub fn from_state(state: GameState, display: D, rules: Rules) -> Self {
        Self {
            state,
            display,
            rules,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Returns true once the board is full or neither player can move.
    pub fn is_finished(&self) -> bool {
        self.state.is_game_over() || self.state.is_stalled(self.rules.legality)
    }

    /// Play the game to completion and report the outcome on the display.
    ///
    /// A player with no legal move passes. Each turn the status line is shown, then
    /// selections are polled until a legal one arrives; illegal selections are dropped.
    pub fn run(&mut self) -> Result<Outcome, EngineError> {
        info!(legality = ?self.rules.legality, "starting game");
        self.sync();

        while !self.is_finished() {
            let active = self.state.active;
            if !self.state.board.has_legal_move(active, self.rules.legality) {
                debug!(color = %active, "no legal move, passing");
                self.state.pass();
                continue;
            }

            self.display.show_message(&self.state.status_message());
            let loc = self.await_legal_move()?;
            self.apply(loc);
        }

        let outcome = self.state.outcome();
        let score = self.state.score();
        info!(black = score.black, white = score.white, ?outcome, "game over");
        self.display.show_message(&outcome.to_string());
        Ok(outcome)
    }

    /// Push the current occupancy of every square to the display.
    pub fn sync(&mut self) {
        sync_display(&self.state.board, &mut self.display);
    }

    fn await_legal_move(&mut self) -> Result<Location, EngineError> {
        let active = self.state.active;
        loop {
            let loc = self
                .display
                .select_cell()
                .ok_or(EngineError::InputClosed { active })?;

            if self.state.is_legal(loc, self.rules.legality) {
                return Ok(loc);
            }
            trace!(color = %active, %loc, "rejected selection");
        }
    }

    fn apply(&mut self, loc: Location) {
        let color = self.state.active;
        let flipped = self.state.play(loc);
        info!(%color, %loc, flipped = flipped.len(), "move");
        debug!(%flipped, "flipped");
        self.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::HeadlessDisplay;
    use crate::{Board, Cell, Legality};

    fn scripted(moves: &str) -> HeadlessDisplay {
        HeadlessDisplay::from_moves(moves).unwrap()
    }

    #[test]
    fn initial_sync_and_status() {
        let mut engine = Engine::new(HeadlessDisplay::new());
        let result = engine.run();

        assert_eq!(
            result,
            Err(EngineError::InputClosed {
                active: Color::Black
            })
        );
        let display = engine.display();
        assert_eq!(display.markers(), &Board::new());
        assert_eq!(
            display.messages(),
            ["**black** has 2 pieces up --- white has 2 pieces up"]
        );
    }

    #[test]
    fn illegal_selections_are_dropped() {
        let mut engine = Engine::new(scripted("A1 D4 H8 D3"));
        let result = engine.run();

        assert_eq!(
            result,
            Err(EngineError::InputClosed {
                active: Color::White
            })
        );
        assert_eq!(engine.state().board.get("D3".parse().unwrap()), Cell::Black);
        assert_eq!(engine.state().board.get("D4".parse().unwrap()), Cell::Black);
        assert_eq!(engine.display().polls(), 5);
        assert_eq!(
            engine.display().messages(),
            [
                "**black** has 2 pieces up --- white has 2 pieces up",
                "black has 4 pieces up --- **white** has 1 pieces up",
            ]
        );
        assert_eq!(engine.display().markers(), &engine.state().board);
    }

    #[test]
    fn bracket_rules_reject_non_capturing_moves() {
        let rules = Rules::new(Legality::Bracket);
        let mut engine = Engine::with_rules(scripted("C3 D3"), rules);
        engine.run().unwrap_err();

        assert_eq!(engine.state().board.get("C3".parse().unwrap()), Cell::Empty);
        assert_eq!(engine.state().board.get("D3".parse().unwrap()), Cell::Black);
        assert_eq!(engine.state().active, Color::White);
    }

    #[test]
    fn adjacency_rules_accept_non_capturing_moves() {
        let mut engine = Engine::new(scripted("C3"));
        engine.run().unwrap_err();

        let board = &engine.state().board;
        assert_eq!(board.get("C3".parse().unwrap()), Cell::Black);
        assert_eq!(board.score().white, 2);
    }

    #[test]
    fn final_move_decides_the_game() {
        #[rustfmt::skip]
        let board: Board = [
            "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB",
            "WWWWWWWW", "WWWWWWWW", "WWWWWWWW", "WWWWWWW.",
        ]
        .concat()
        .parse()
        .unwrap();
        let state = GameState::from_board(board, Color::Black);
        let mut engine = Engine::from_state(state, scripted("H8"), Rules::default());

        assert_eq!(engine.run(), Ok(Outcome::BlackWins));
        assert!(engine.state().is_game_over());
        assert_eq!(engine.state().score().black, 39);
        assert_eq!(engine.state().score().white, 25);
        assert_eq!(
            engine.display().messages(),
            [
                "**black** has 32 pieces up --- white has 31 pieces up",
                "Game over. The winner is black.",
            ]
        );
    }

    #[test]
    fn full_board_reports_immediately() {
        let board: Board = "BW".repeat(32).parse().unwrap();
        let state = GameState::from_board(board, Color::Black);
        let mut engine = Engine::from_state(state, HeadlessDisplay::new(), Rules::default());

        assert_eq!(engine.run(), Ok(Outcome::Tie));
        assert_eq!(engine.display().polls(), 0);
        assert_eq!(
            engine.display().messages(),
            ["Game over. It is a tie game."]
        );
    }

    #[test]
    fn stuck_player_passes() {
        // Every empty square touches only white, so white cannot move.
        let mut board: Board = "W".repeat(64).parse().unwrap();
        board.set("A1".parse().unwrap(), Cell::Empty);
        let state = GameState::from_board(board, Color::White);
        let mut engine = Engine::from_state(state, scripted("A1"), Rules::default());

        assert_eq!(engine.run(), Ok(Outcome::WhiteWins));
        assert_eq!(
            engine.display().messages(),
            [
                "**black** has 0 pieces up --- white has 63 pieces up",
                "Game over. The winner is white.",
            ]
        );
    }

    #[test]
    fn stalled_game_ends_before_the_board_fills() {
        // Black has no bracketing move and neither does white.
        let mut board: Board = "B".repeat(64).parse().unwrap();
        board.set("A1".parse().unwrap(), Cell::Empty);
        board.set("H8".parse().unwrap(), Cell::Empty);
        let state = GameState::from_board(board, Color::Black);
        let rules = Rules::new(Legality::Bracket);
        let mut engine = Engine::from_state(state, HeadlessDisplay::new(), rules);

        assert_eq!(engine.run(), Ok(Outcome::BlackWins));
        assert!(!engine.state().is_game_over());
        assert_eq!(engine.display().polls(), 0);
    }

    #[test]
    fn sync_is_idempotent() {
        let mut engine = Engine::new(HeadlessDisplay::new());
        engine.sync();
        let first = *engine.display().markers();
        engine.sync();

        assert_eq!(engine.display().markers(), &first);
        assert_eq!(engine.display().markers(), &engine.state().board);
        assert_eq!(engine.display().marker_calls(), 128);
    }
}
