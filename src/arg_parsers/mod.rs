//! Parsers for the values of positional command-line arguments

mod dimension;
pub use dimension::*;
