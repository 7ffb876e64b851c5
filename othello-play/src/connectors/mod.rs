//! Connectors let the engine play through different interfaces.

mod terminal;

pub use terminal::{parse_selection, ParseSelectionError, TerminalDisplay};
