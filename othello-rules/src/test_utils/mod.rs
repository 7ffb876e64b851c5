//! Utilities used for testing and benchmarking.

mod headless;
pub use headless::HeadlessDisplay;

mod perft;
pub use perft::run_perft;
