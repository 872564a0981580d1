pub mod print_config;
pub mod runner;
pub mod test_utils;

pub use print_config::{PrintConfig, QuoteStyle};
pub use runner::{parse_module, print_module, ParseError, ParsedModule, PrintError};
