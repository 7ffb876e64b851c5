//! Miscellaneous project utilities.

use crate::{Location, EDGE_LENGTH};
use std::fmt::{self, Formatter};

/// Format a square-by-square rendering of the board as a labeled grid.
/// `glyph` is called once per location, in row-major order.
pub fn format_grid<F>(f: &mut Formatter<'_>, glyph: F) -> fmt::Result
where
    F: Fn(Location) -> char,
{
    write!(f, "  A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, " {}", glyph(Location::from_coords(row, col)))?;
        }
    }

    Ok(())
}
