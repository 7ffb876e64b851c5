//! Command-line configuration for the `othello` binary.

use clap::{Parser, ValueEnum};
use othello_rules::{Legality, Rules};

/// Play a game of Othello in the terminal.
#[derive(Parser, Debug)]
#[command(name = "othello", version)]
pub struct Config {
    /// Which placements are accepted as legal moves.
    #[arg(long, value_enum, default_value_t = LegalityArg::Adjacent)]
    pub legality: LegalityArg,

    /// Log filter used when RUST_LOG is not set. Logs are written to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LegalityArg {
    /// Any empty square touching an opposing piece.
    Adjacent,
    /// Standard Othello: the placement must capture.
    Bracket,
}

impl From<LegalityArg> for Legality {
    fn from(arg: LegalityArg) -> Self {
        match arg {
            LegalityArg::Adjacent => Legality::Adjacent,
            LegalityArg::Bracket => Legality::Bracket,
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules::new(self.legality.into())
    }
}
