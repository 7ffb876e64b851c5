//! Terminal front end for [`othello_rules`].
//!
//! [`connectors`] implement [`othello_rules::BoardDisplay`] for different interfaces;
//! [`config`] turns command-line flags into engine [`Rules`](othello_rules::Rules).

pub mod config;
pub mod connectors;
