//! Configurable rule variants.

use crate::{Board, Color, Location};

/// Which check decides whether a placement is allowed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Legality {
    /// The target is empty and touches at least one opposing piece.
    /// Does not require the placement to capture anything.
    Adjacent,
    /// Standard Othello: the placement must bracket at least one opposing line.
    Bracket,
}

impl Default for Legality {
    fn default() -> Self {
        Legality::Adjacent
    }
}

impl Legality {
    /// Returns whether `color` may play at `loc` on `board` under this rule.
    pub fn permits(self, board: &Board, color: Color, loc: Location) -> bool {
        match self {
            Legality::Adjacent => board.is_legal_move(color, loc),
            Legality::Bracket => board.is_bracketing_move(color, loc),
        }
    }
}

/// The rule set an [`Engine`](crate::Engine) plays under.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rules {
    pub legality: Legality,
}

impl Rules {
    pub fn new(legality: Legality) -> Self {
        Self { legality }
    }
}
