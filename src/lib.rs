//! RV32 Instruction Decoder and Pipeline Hazard Analyzer.
//!
//! This crate decodes fixed-width 32-bit RISC-V base integer instructions and
//! analyzes a straight-line instruction sequence for the data and control
//! hazards that would stall a simple in-order pipeline.
//!
//! # Architecture
//!
//! * **Decoder**: bitfield extraction and opcode-driven format classification.
//! * **Detector**: RAW/WAW/WAR hazards over a three-successor window, and
//!   control hazards over a two-successor window after branches and jumps.
//! * **Resolvers**: stall insertion, reordering, and delayed-branch slot filling.
//! * **Analyzer**: nine named technique evaluations combining the above.
//!
//! Every analysis function is pure and total. Only the listing loader and
//! the configuration layer can fail.
//!
//! # Modules
//!
//! * `common`: Shared constants and error handling.
//! * `config`: Configuration loading and parsing.
//! * `isa`: Instruction decoding and programs.
//! * `pipeline`: Hazard detection, resolution and the technique catalog.
//! * `report`: Analysis results and rendering.
//! * `sim`: Hex listing input and output.

/// Shared constants and the crate error type.
pub mod common;

/// Configuration system for tracing and output settings.
///
/// Loads and parses TOML configuration files; the command line overrides
/// individual settings.
pub mod config;

/// Instruction Set Architecture definitions and the decoder.
///
/// Implements RV32 base integer field extraction and classification into
/// the R, I, S, B, U and J formats.
pub mod isa;

/// Hazard detection, resolution strategies and technique orchestration.
pub mod pipeline;

/// Per-technique results and report rendering.
pub mod report;

/// Reading and writing hexadecimal instruction listings.
pub mod sim;

pub use common::{Error, Result};
pub use isa::{decode, Instruction, Program};
pub use pipeline::{analyze_all, Conflict, ConflictKind, Technique};
pub use report::{AnalysisReport, TechniqueResult};
