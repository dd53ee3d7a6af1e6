//! Hex Listing Loader and Writer.
//!
//! This module reads instruction listings (one hexadecimal word per line)
//! into memory and writes technique results back in the same layout.

use std::fs;

use crate::common::error::{Error, Result};
use crate::report::TechniqueResult;

/// Parses one hexadecimal word.
///
/// Case-insensitive, with an optional `0x`/`0X` prefix. Returns `None` for
/// empty input, non-hex characters, or values wider than 32 bits.
pub fn parse_hex_word(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Parses a newline-delimited hex listing.
///
/// Blank lines are skipped; every other line, trimmed, must be one word.
///
/// # Returns
///
/// The words in listing order, or [`Error::InvalidHex`] naming the first
/// offending line (1-based).
pub fn parse_hex_words(text: &str) -> Result<Vec<u32>> {
    let mut words = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let word = parse_hex_word(line).ok_or_else(|| Error::InvalidHex {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Loads a hex listing from disk.
pub fn read_hex_file(path: &str) -> Result<Vec<u32>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_hex_words(&text)
}

/// Formats words as a listing, one 8-digit uppercase word per line.
pub fn format_hex_words(words: &[u32]) -> String {
    words.iter().map(|w| format!("{:08X}\n", w)).collect()
}

/// Writes words as a plain hex listing that [`read_hex_file`] can load back.
pub fn write_hex_file(path: &str, words: &[u32]) -> Result<()> {
    fs::write(path, format_hex_words(words)).map_err(|e| Error::io(path, e))
}

/// Formats a technique result with its header.
///
/// ```text
/// Technique: 3_no_forwarding_nops
/// Overhead: 2 instructions
/// ==================================================
///
/// 1: 0x00100093
/// ```
pub fn format_technique(result: &TechniqueResult) -> String {
    let mut out = format!(
        "Technique: {}\nOverhead: {} instructions\n{}\n\n",
        result.technique.name(),
        result.overhead,
        "=".repeat(50)
    );
    for (i, word) in result.words.iter().enumerate() {
        out.push_str(&format!("{}: 0x{:08X}\n", i + 1, word));
    }
    out
}

/// Writes a technique result with its header to disk.
pub fn write_technique_file(path: &str, result: &TechniqueResult) -> Result<()> {
    fs::write(path, format_technique(result)).map_err(|e| Error::io(path, e))
}

/// Saves a technique result.
///
/// The plain listing is written unless `annotated` is set, so the file can
/// be fed back through [`read_hex_file`]. The annotated layout carries the
/// technique header and numbered lines, and is for reading only.
pub fn save_result(path: &str, result: &TechniqueResult, annotated: bool) -> Result<()> {
    if annotated {
        write_technique_file(path, result)
    } else {
        write_hex_file(path, &result.words)
    }
}
