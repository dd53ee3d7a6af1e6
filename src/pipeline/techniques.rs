//! The fixed catalog of hazard-handling techniques.
//!
//! Each entry names the conflict set it reads and the resolution it applies,
//! so the orchestrator runs the catalog as data instead of nine call sites.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::error::Error;

/// One of the nine evaluated techniques, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Technique {
    /// Detect data hazards without forwarding.
    #[serde(rename = "1_no_forwarding_detect")]
    NoForwardingDetect,
    /// Detect data hazards with forwarding.
    #[serde(rename = "2_forwarding_detect")]
    ForwardingDetect,
    /// Insert NOPs, no forwarding.
    #[serde(rename = "3_no_forwarding_nops")]
    NoForwardingNops,
    /// Insert NOPs, forwarding.
    #[serde(rename = "4_forwarding_nops")]
    ForwardingNops,
    /// Reorder, no forwarding.
    #[serde(rename = "5_no_forwarding_reorder")]
    NoForwardingReorder,
    /// Reorder, forwarding.
    #[serde(rename = "6_forwarding_reorder")]
    ForwardingReorder,
    /// Insert NOPs after branches and jumps.
    #[serde(rename = "7_control_nops")]
    ControlNops,
    /// Fill delay slots after branches and jumps.
    #[serde(rename = "8_delayed_branch")]
    DelayedBranch,
    /// Stall insertion plus reordering, both with forwarding.
    #[serde(rename = "9_combined")]
    Combined,
}

impl Technique {
    /// Every technique in catalog order.
    pub const ALL: [Technique; 9] = [
        Technique::NoForwardingDetect,
        Technique::ForwardingDetect,
        Technique::NoForwardingNops,
        Technique::ForwardingNops,
        Technique::NoForwardingReorder,
        Technique::ForwardingReorder,
        Technique::ControlNops,
        Technique::DelayedBranch,
        Technique::Combined,
    ];

    /// Stable name used in reports, JSON output and saved files.
    pub fn name(self) -> &'static str {
        match self {
            Technique::NoForwardingDetect => "1_no_forwarding_detect",
            Technique::ForwardingDetect => "2_forwarding_detect",
            Technique::NoForwardingNops => "3_no_forwarding_nops",
            Technique::ForwardingNops => "4_forwarding_nops",
            Technique::NoForwardingReorder => "5_no_forwarding_reorder",
            Technique::ForwardingReorder => "6_forwarding_reorder",
            Technique::ControlNops => "7_control_nops",
            Technique::DelayedBranch => "8_delayed_branch",
            Technique::Combined => "9_combined",
        }
    }

    /// Parses a stable technique name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Technique::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::UnknownTechnique(name.to_string()))
    }

    /// Whether the technique only reports hazards and leaves the program as is.
    pub fn is_detect_only(self) -> bool {
        matches!(
            self,
            Technique::NoForwardingDetect | Technique::ForwardingDetect
        )
    }

    /// Catalog entry for this technique.
    pub fn spec(self) -> &'static TechniqueSpec {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Technique {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technique::from_name(s)
    }
}

/// Which precomputed conflict list a technique reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictSet {
    /// Data conflicts detected without forwarding.
    NoForwarding,
    /// Data conflicts detected with forwarding.
    Forwarding,
    /// Control pairs lifted to CONTROL conflicts.
    Control,
}

/// What a technique does with its conflict set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Report the conflict count; the program passes through.
    DetectOnly,
    InsertNops { forwarding: bool },
    Reorder { forwarding: bool },
    DelayedBranch,
    /// Runs stall insertion, discards it, and reports the reorder result.
    ///
    /// This matches the established output of the analyzer. It is not a
    /// composition of the two strategies.
    Combined { forwarding: bool },
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechniqueSpec {
    pub technique: Technique,
    pub conflicts: ConflictSet,
    pub resolution: Resolution,
}

/// The nine techniques, indexed by `Technique as usize`.
pub const CATALOG: [TechniqueSpec; 9] = [
    TechniqueSpec {
        technique: Technique::NoForwardingDetect,
        conflicts: ConflictSet::NoForwarding,
        resolution: Resolution::DetectOnly,
    },
    TechniqueSpec {
        technique: Technique::ForwardingDetect,
        conflicts: ConflictSet::Forwarding,
        resolution: Resolution::DetectOnly,
    },
    TechniqueSpec {
        technique: Technique::NoForwardingNops,
        conflicts: ConflictSet::NoForwarding,
        resolution: Resolution::InsertNops { forwarding: false },
    },
    TechniqueSpec {
        technique: Technique::ForwardingNops,
        conflicts: ConflictSet::Forwarding,
        resolution: Resolution::InsertNops { forwarding: true },
    },
    TechniqueSpec {
        technique: Technique::NoForwardingReorder,
        conflicts: ConflictSet::NoForwarding,
        resolution: Resolution::Reorder { forwarding: false },
    },
    TechniqueSpec {
        technique: Technique::ForwardingReorder,
        conflicts: ConflictSet::Forwarding,
        resolution: Resolution::Reorder { forwarding: true },
    },
    TechniqueSpec {
        technique: Technique::ControlNops,
        conflicts: ConflictSet::Control,
        resolution: Resolution::InsertNops { forwarding: false },
    },
    TechniqueSpec {
        technique: Technique::DelayedBranch,
        conflicts: ConflictSet::Control,
        resolution: Resolution::DelayedBranch,
    },
    TechniqueSpec {
        technique: Technique::Combined,
        conflicts: ConflictSet::Forwarding,
        resolution: Resolution::Combined { forwarding: true },
    },
];
