//! Various configuration options to control `wavefmt`

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
