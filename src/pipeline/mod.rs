//! Static pipeline hazard analysis.
//!
//! This module contains hazard detection over a decoded program, the three
//! hazard resolution strategies, and the technique catalog that combines
//! them into the analyzer's report.

/// Technique orchestration.
pub mod analyzer;

/// Hazard records.
pub mod conflict;

/// Data and control hazard detection.
pub mod hazards;

/// Stall insertion, reordering and delayed-branch slot filling.
pub mod resolve;

/// The nine-entry technique catalog.
pub mod techniques;

pub use analyzer::{analyze_all, ConflictSets, PipelineAnalyzer};
pub use conflict::{Conflict, ConflictKind};
pub use hazards::{detect_control, detect_data};
pub use techniques::{Technique, CATALOG};
