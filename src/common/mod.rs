//! Common utilities and types used throughout the analyzer.
//!
//! This module provides the crate-wide error type and the constants shared
//! by the decoder, the hazard detector and the resolvers.

/// Pipeline geometry and encoding constants.
pub mod constants;

/// Error types for the I/O and configuration edges.
pub mod error;

pub use constants::{CONTROL_HAZARD_WINDOW, CONTROL_STALL_SLOTS, DATA_HAZARD_WINDOW, NOP};
pub use error::{Error, Result};
