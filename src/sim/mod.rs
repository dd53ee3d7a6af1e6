//! Input and output of instruction listings.

/// Hex listing loader and writer.
pub mod loader;

pub use loader::{
    parse_hex_words, read_hex_file, save_result, write_hex_file, write_technique_file,
};
