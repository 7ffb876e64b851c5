//! `othello-rules` is a small, deterministic Othello rules engine.
//!
//! The crate is layered bottom-up:
//!
//!  - [`Location`], [`LocationList`] and [`Direction`] address cells and lines on the board.
//!  - [`Board`] holds the grid of [`Cell`]s and implements legality checks and the
//!    line-scanning capture algorithm.
//!  - [`GameState`] pairs a board with the active [`Color`] and reports status and [`Outcome`].
//!  - [`Engine`] runs the turn loop against an injected [`BoardDisplay`], which owns
//!    rendering and input.
#![deny(unsafe_code)]

pub mod test_utils;

mod board;
mod display;
mod engine;
mod game;
mod location;
mod rules;
mod utils;

pub use board::*;
pub use display::*;
pub use engine::*;
pub use game::*;
pub use location::*;
pub use rules::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
