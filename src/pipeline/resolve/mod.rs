//! Hazard resolution strategies.
//!
//! Three independent transformations, each taking the original program and
//! returning a new word sequence. None of them composes with another; the
//! technique catalog decides which one runs with which conflict set.

/// Delayed-branch slot filling.
pub mod delay;

/// Reordering of independent instructions into hazard gaps.
pub mod reorder;

/// NOP insertion.
pub mod stall;

pub use delay::apply_delayed_branch;
pub use reorder::reorder;
pub use stall::insert_nops;
