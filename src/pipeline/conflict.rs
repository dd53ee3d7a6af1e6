//! Hazard records produced by the detector.

use std::fmt;

use serde::Serialize;

/// Classification of a detected hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ConflictKind {
    /// Read after write: the consumer reads the producer's destination.
    #[serde(rename = "RAW")]
    Raw,
    /// Write after write: both instructions write the same register.
    #[serde(rename = "WAW")]
    Waw,
    /// Write after read: the consumer overwrites a register the producer reads.
    #[serde(rename = "WAR")]
    War,
    /// The producer is a branch or jump.
    #[serde(rename = "CONTROL")]
    Control,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConflictKind::Raw => "RAW",
            ConflictKind::Waw => "WAW",
            ConflictKind::War => "WAR",
            ConflictKind::Control => "CONTROL",
        };
        f.write_str(s)
    }
}

/// A hazard between two instructions of the original program.
///
/// `producer < consumer` always holds, and both index the original decoded
/// program regardless of any later insertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Conflict {
    producer: usize,
    consumer: usize,
    kind: ConflictKind,
}

impl Conflict {
    /// # Panics
    ///
    /// If `producer >= consumer`.
    pub fn new(producer: usize, consumer: usize, kind: ConflictKind) -> Self {
        assert!(
            producer < consumer,
            "conflict producer {} must precede consumer {}",
            producer,
            consumer
        );
        Self {
            producer,
            consumer,
            kind,
        }
    }

    pub fn producer(&self) -> usize {
        self.producer
    }

    pub fn consumer(&self) -> usize {
        self.consumer
    }

    pub fn kind(&self) -> ConflictKind {
        self.kind
    }

    /// Distance between the two instructions in the original program.
    pub fn distance(&self) -> usize {
        self.consumer - self.producer
    }

    /// Lifts a control pair into a [`ConflictKind::Control`] conflict.
    pub fn control((producer, consumer): (usize, usize)) -> Self {
        Self::new(producer, consumer, ConflictKind::Control)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.producer, self.consumer)
    }
}
