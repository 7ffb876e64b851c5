//! Implements game-level Othello logic: whose turn it is, status, and the final outcome.

use crate::{Board, Legality, Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game, and the color of their pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Color {
    /// Gets the other player.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// Piece counts for each color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Tie,
}

impl Outcome {
    /// Decide the game by piece count.
    pub fn from_score(score: Score) -> Self {
        use std::cmp::Ordering::*;
        match score.black.cmp(&score.white) {
            Greater => Outcome::BlackWins,
            Less => Outcome::WhiteWins,
            Equal => Outcome::Tie,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Tie => None,
        }
    }
}

/// The message shown when the game ends.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(color) => write!(f, "Game over. The winner is {}.", color),
            None => f.write_str("Game over. It is a tie game."),
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The starting position with black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::default())
    }

    pub fn from_board(board: Board, active: Color) -> Self {
        Self { board, active }
    }

    /// Returns whether the active player may play at `loc`.
    pub fn is_legal(&self, loc: Location, legality: Legality) -> bool {
        legality.permits(&self.board, self.active, loc)
    }

    pub fn legal_moves(&self, legality: Legality) -> LocationList {
        self.board.legal_moves(self.active, legality)
    }

    /// Play `loc` for the active player and hand the turn over.
    /// Returns the flipped squares.
    pub fn play(&mut self, loc: Location) -> LocationList {
        let flipped = self.board.apply_move(self.active, loc);
        self.active = !self.active;
        flipped
    }

    /// Hand the turn over without placing a piece.
    pub fn pass(&mut self) {
        self.active = !self.active;
    }

    /// The game ends when every square is occupied.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Returns true when neither player has a move under `legality`.
    pub fn is_stalled(&self, legality: Legality) -> bool {
        !self.board.has_legal_move(Color::Black, legality)
            && !self.board.has_legal_move(Color::White, legality)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(self.score())
    }

    /// The per-turn status line, marking the active player with `**`.
    pub fn status_message(&self) -> String {
        let Score { black, white } = self.score();
        match self.active {
            Color::Black => format!(
                "**black** has {} pieces up --- white has {} pieces up",
                black, white
            ),
            Color::White => format!(
                "black has {} pieces up --- **white** has {} pieces up",
                black, white
            ),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        f.write_str(&self.status_message())
    }
}
