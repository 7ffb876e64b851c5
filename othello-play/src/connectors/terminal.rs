//! [`BoardDisplay`] over a line-oriented terminal.

use derive_more::{Display, Error};
use othello_rules::{Board, BoardDisplay, Cell, Color, Location};
use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::warn;

/// Reads moves from `input` one per line and draws the board to `output`.
///
/// The board is redrawn from the markers it has been sent each time a message is shown.
pub struct TerminalDisplay<R, W> {
    input: R,
    output: W,
    markers: Board,
}

impl TerminalDisplay<BufReader<Stdin>, Stdout> {
    /// A display on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDisplay<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            markers: Board::empty(),
        }
    }

    /// The markers currently drawn.
    pub fn markers(&self) -> &Board {
        &self.markers
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let result = self
            .output
            .write_fmt(args)
            .and_then(|_| self.output.flush());
        if let Err(error) = result {
            warn!(%error, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> BoardDisplay for TerminalDisplay<R, W> {
    fn select_cell(&mut self) -> Option<Location> {
        loop {
            self.emit(format_args!("Enter a move: "));

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(error) => {
                    warn!(%error, "failed to read move");
                    return None;
                }
            }

            match parse_selection(&line) {
                Ok(loc) => return Some(loc),
                Err(_) => self.emit(format_args!("Cannot parse move.\n")),
            }
        }
    }

    fn place_marker(&mut self, color: Color, loc: Location) {
        self.markers.set(loc, color.into());
    }

    fn clear_marker(&mut self, loc: Location) {
        self.markers.set(loc, Cell::Empty);
    }

    fn show_message(&mut self, text: &str) {
        let grid = self.markers.to_string();
        self.emit(format_args!("\n{}\n\n{}\n", grid, text));
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "expected a square like \"D3\" or a zero-based \"row col\" pair")]
pub struct ParseSelectionError;

/// Parse a typed selection: algebraic notation ("d3") or zero-based "row col".
pub fn parse_selection(text: &str) -> Result<Location, ParseSelectionError> {
    let text = text.trim();
    if let Ok(loc) = text.parse::<Location>() {
        return Ok(loc);
    }

    let mut parts = text.split_whitespace();
    let mut coord = || -> Result<usize, ParseSelectionError> {
        parts
            .next()
            .ok_or(ParseSelectionError)?
            .parse()
            .map_err(|_| ParseSelectionError)
    };
    let row = coord()?;
    let col = coord()?;
    if parts.next().is_some() {
        return Err(ParseSelectionError);
    }

    Location::try_from_coords(row, col).ok_or(ParseSelectionError)
}
