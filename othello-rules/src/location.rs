//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A location on the Othello board, stored as a row-major square index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the Othello board, which can be iterated in row-major order.
/// Packed into one bit per square.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct LocationList(u64);

/// One of the 8 compass directions a line can run in from a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The unit `(row, col)` step for this direction. Row 0 is the top of the board.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl Location {
    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self(index)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Convert from row and column coordinates.
    /// Panics if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(
            row < EDGE_LENGTH && col < EDGE_LENGTH,
            "location ({}, {}) is off the board",
            row,
            col
        );
        Self((row * EDGE_LENGTH + col) as u8)
    }

    /// Convert from row and column coordinates, or `None` if they are off the board.
    pub fn try_from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self::from_coords(row, col))
        } else {
            None
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The neighboring location in `direction`, or `None` at the edge of the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row() as isize + dr as isize;
        let col = self.col() as isize + dc as isize;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_from_coords(row as usize, col as usize)
    }

    /// All in-bounds neighbors of this location.
    pub fn neighbors(self) -> impl Iterator<Item = Location> {
        IntoIterator::into_iter(Direction::ALL).filter_map(move |dir| self.step(dir))
    }

    /// Every location on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }

    #[inline]
    fn mask(self) -> u64 {
        1 << self.0
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || row > EDGE_LENGTH || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl LocationList {
    /// The empty list.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    /// Add `loc` to this list.
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Add every location in `other` to this list.
    pub fn extend_from(&mut self, other: LocationList) {
        self.0 |= other.0;
    }

    /// Returns true if this list and `other` share no locations.
    pub fn is_disjoint(self, other: LocationList) -> bool {
        self.0 & other.0 == 0
    }

    /// Returns true if there are no locations in this list.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::new();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let next = Location(self.0.trailing_zeros() as u8);
        self.0 ^= next.mask();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
