use crate::{Board, Cell, Color, Location};

/// The outside world as the engine sees it: something that can render markers and
/// messages, and hand back the squares a player selects.
pub trait BoardDisplay {
    /// Block until a player designates a square. No legality check is done here.
    /// Returns `None` once no more selections will ever arrive.
    fn select_cell(&mut self) -> Option<Location>;

    /// Show a marker of `color` at `loc`, replacing whatever was there.
    fn place_marker(&mut self, color: Color, loc: Location);

    /// Remove any marker at `loc`.
    fn clear_marker(&mut self, loc: Location);

    /// Show a single line of status text.
    fn show_message(&mut self, text: &str);
}

impl<D: BoardDisplay + ?Sized> BoardDisplay for &mut D {
    fn select_cell(&mut self) -> Option<Location> {
        (**self).select_cell()
    }

    fn place_marker(&mut self, color: Color, loc: Location) {
        (**self).place_marker(color, loc)
    }

    fn clear_marker(&mut self, loc: Location) {
        (**self).clear_marker(loc)
    }

    fn show_message(&mut self, text: &str) {
        (**self).show_message(text)
    }
}

/// Make the markers on `display` match `board` exactly.
pub fn sync_display<D: BoardDisplay + ?Sized>(board: &Board, display: &mut D) {
    for (loc, cell) in board.cells() {
        match cell {
            Cell::Empty => display.clear_marker(loc),
            Cell::Black => display.place_marker(Color::Black, loc),
            Cell::White => display.place_marker(Color::White, loc),
        }
    }
}
