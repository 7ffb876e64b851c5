//! The Othello board and its move dynamics.
//!
//! The board is a plain 8×8 grid of [`Cell`]s. Legality checks and captures are
//! expressed as one line scan run along each of the 8 [`Direction`]s.

use crate::game::{Color, Score};
use crate::rules::Legality;
use crate::{utils, Direction, Location, LocationList, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of one square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl Cell {
    /// The color of the piece in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character used for this cell in board diagrams.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// The logical state of every square on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: two pieces of each color crossed in the center.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Location::from_coords(3, 3), Cell::White);
        board.set(Location::from_coords(3, 4), Cell::Black);
        board.set(Location::from_coords(4, 3), Cell::Black);
        board.set(Location::from_coords(4, 4), Cell::White);
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Iterate over every location and its contents, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        Location::all().map(move |loc| (loc, self.get(loc)))
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        let target = Cell::from(color);
        self.cells().filter(|&(_, cell)| cell == target).count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, cell)| cell.is_empty()).count()
    }

    /// Returns true when all 64 squares are occupied.
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Piece counts for both colors.
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Color::Black),
            white: self.count(Color::White),
        }
    }

    /// Returns whether `color` may play at `loc` under the adjacency rule:
    /// the square is empty and at least one neighbor holds an opposing piece.
    ///
    /// This does not check that the placement captures anything. See
    /// [`Board::is_bracketing_move`] for the standard rule.
    pub fn is_legal_move(&self, color: Color, loc: Location) -> bool {
        let opponent = Cell::from(!color);
        self.get(loc).is_empty() && loc.neighbors().any(|n| self.get(n) == opponent)
    }

    /// Returns whether `color` may play at `loc` under standard Othello rules:
    /// the square is empty and the placement brackets at least one opposing line.
    pub fn is_bracketing_move(&self, color: Color, loc: Location) -> bool {
        self.get(loc).is_empty()
            && IntoIterator::into_iter(Direction::ALL)
                .any(|dir| !self.bracketed_line(color, loc, dir).is_empty())
    }

    /// All squares where `color` may play under `legality`.
    pub fn legal_moves(&self, color: Color, legality: Legality) -> LocationList {
        Location::all()
            .filter(|&loc| legality.permits(self, color, loc))
            .collect()
    }

    pub fn has_legal_move(&self, color: Color, legality: Legality) -> bool {
        Location::all().any(|loc| legality.permits(self, color, loc))
    }

    /// The opposing pieces that `color` would flip by playing at `loc`.
    /// Does not modify the board.
    pub fn captures(&self, color: Color, loc: Location) -> LocationList {
        let mut captured = LocationList::new();
        for dir in IntoIterator::into_iter(Direction::ALL) {
            captured.extend_from(self.bracketed_line(color, loc, dir));
        }
        captured
    }

    /// Place a piece of `color` at `loc` and flip every opposing line it brackets.
    /// Returns the flipped squares.
    pub fn apply_move(&mut self, color: Color, loc: Location) -> LocationList {
        debug_assert!(self.get(loc).is_empty(), "{} is already occupied", loc);

        self.set(loc, color.into());
        let mut flipped = LocationList::new();
        for dir in IntoIterator::into_iter(Direction::ALL) {
            let line = self.bracketed_line(color, loc, dir);
            for captured in line {
                self.set(captured, color.into());
            }
            flipped.extend_from(line);
        }
        flipped
    }

    /// Scan outward from `origin` along `dir` and return the run of opposing pieces
    /// closed off by a piece of `color`. Empty if the run reaches an empty square or
    /// the edge of the board first.
    fn bracketed_line(&self, color: Color, origin: Location, dir: Direction) -> LocationList {
        let mut line = LocationList::new();
        let mut cursor = origin.step(dir);

        while let Some(loc) = cursor {
            match self.get(loc).color() {
                None => break,
                Some(c) if c == color => return line,
                Some(_) => line.insert(loc),
            }
            cursor = loc.step(dir);
        }

        LocationList::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |loc| self.get(loc).glyph())
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", found)]
    InvalidCharacter { found: char },
    #[display(fmt = "board string has {} squares, expected 64", squares)]
    WrongLength { squares: usize },
}

/// Parse a board from 64 square characters in row-major order:
/// `B` for black, `W` for white, `.` or `_` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'B' => Ok(Cell::Black),
                'W' => Ok(Cell::White),
                '.' | '_' => Ok(Cell::Empty),
                _ => Err(ParseBoardError::InvalidCharacter { found: c }),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                squares: cells.len(),
            });
        }

        let mut board = Self::empty();
        for (loc, cell) in Location::all().zip(cells) {
            board.set(loc, cell);
        }
        Ok(board)
    }
}
