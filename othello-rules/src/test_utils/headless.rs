use crate::{Board, BoardDisplay, Cell, Color, Location, ParseLocationError};
use std::collections::VecDeque;

/// A [`BoardDisplay`] with no screen: selections come from a script, and everything
/// the engine renders is recorded for inspection.
#[derive(Clone, Debug)]
pub struct HeadlessDisplay {
    selections: VecDeque<Location>,
    markers: Board,
    messages: Vec<String>,
    marker_calls: usize,
    polls: usize,
}

impl HeadlessDisplay {
    /// A display with no scripted selections and no markers.
    pub fn new() -> Self {
        Self::with_selections(std::iter::empty())
    }

    pub fn with_selections<I: IntoIterator<Item = Location>>(selections: I) -> Self {
        Self {
            selections: selections.into_iter().collect(),
            markers: Board::empty(),
            messages: Vec::new(),
            marker_calls: 0,
            polls: 0,
        }
    }

    /// Script selections from whitespace-separated notation ("D3 C5 F6").
    pub fn from_moves(moves: &str) -> Result<Self, ParseLocationError> {
        let selections = moves
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Location>, _>>()?;
        Ok(Self::with_selections(selections))
    }

    pub fn push_selection(&mut self, loc: Location) {
        self.selections.push_back(loc);
    }

    /// The markers currently shown, as a board.
    pub fn markers(&self) -> &Board {
        &self.markers
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Number of place or clear calls received.
    pub fn marker_calls(&self) -> usize {
        self.marker_calls
    }

    /// Number of times a selection was requested, including the one that found the script empty.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining_selections(&self) -> usize {
        self.selections.len()
    }
}

impl Default for HeadlessDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardDisplay for HeadlessDisplay {
    fn select_cell(&mut self) -> Option<Location> {
        self.polls += 1;
        self.selections.pop_front()
    }

    fn place_marker(&mut self, color: Color, loc: Location) {
        self.marker_calls += 1;
        self.markers.set(loc, color.into());
    }

    fn clear_marker(&mut self, loc: Location) {
        self.marker_calls += 1;
        self.markers.set(loc, Cell::Empty);
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
