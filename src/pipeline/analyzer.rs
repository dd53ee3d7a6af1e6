//! Technique orchestration.
//!
//! Decodes nothing itself: it takes a decoded [`Program`], derives the three
//! conflict sets once, then runs every catalog entry against them.

use serde::Serialize;

use crate::isa::Program;
use crate::pipeline::conflict::Conflict;
use crate::pipeline::hazards::{detect_control, detect_data};
use crate::pipeline::resolve::{apply_delayed_branch, insert_nops, reorder};
use crate::pipeline::techniques::{ConflictSet, Resolution, TechniqueSpec, CATALOG};
use crate::report::{AnalysisReport, TechniqueResult};

/// The conflict lists shared by all techniques.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConflictSets {
    pub no_forwarding: Vec<Conflict>,
    pub forwarding: Vec<Conflict>,
    pub control: Vec<Conflict>,
}

impl ConflictSets {
    /// Runs the detector twice for data hazards and once for control hazards.
    pub fn detect(program: &Program) -> Self {
        Self {
            no_forwarding: detect_data(program, false),
            forwarding: detect_data(program, true),
            control: detect_control(program)
                .into_iter()
                .map(Conflict::control)
                .collect(),
        }
    }

    pub fn get(&self, set: ConflictSet) -> &[Conflict] {
        match set {
            ConflictSet::NoForwarding => &self.no_forwarding,
            ConflictSet::Forwarding => &self.forwarding,
            ConflictSet::Control => &self.control,
        }
    }
}

/// Runs the technique catalog over one program.
///
/// Holds no state besides the borrowed program and the trace flag; every
/// call to [`PipelineAnalyzer::analyze_all`] recomputes from scratch.
pub struct PipelineAnalyzer<'a> {
    program: &'a Program,
    trace: bool,
}

impl<'a> PipelineAnalyzer<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            trace: cfg!(feature = "always-trace"),
        }
    }

    /// Enables `[Hazard]` / `[Analyze]` trace lines on stderr.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace || cfg!(feature = "always-trace");
        self
    }

    /// Evaluates all nine techniques in catalog order.
    pub fn analyze_all(&self) -> AnalysisReport {
        let sets = ConflictSets::detect(self.program);

        if self.trace {
            self.trace_conflicts("no-forwarding", &sets.no_forwarding);
            self.trace_conflicts("forwarding", &sets.forwarding);
            self.trace_conflicts("control", &sets.control);
        }

        let results = CATALOG
            .iter()
            .map(|spec| self.evaluate(spec, &sets))
            .collect();

        AnalysisReport::new(self.program.len(), sets, results)
    }

    /// Evaluates a single catalog entry against precomputed conflict sets.
    pub fn evaluate(&self, spec: &TechniqueSpec, sets: &ConflictSets) -> TechniqueResult {
        let program = self.program;
        let conflicts = sets.get(spec.conflicts);

        let words = match spec.resolution {
            Resolution::DetectOnly => program.words().to_vec(),
            Resolution::InsertNops { forwarding } => insert_nops(program, conflicts, forwarding),
            Resolution::Reorder { forwarding } => reorder(program, conflicts, forwarding),
            Resolution::DelayedBranch => apply_delayed_branch(program),
            Resolution::Combined { forwarding } => {
                let _stalled = insert_nops(program, conflicts, forwarding);
                reorder(program, conflicts, forwarding)
            }
        };

        let result = TechniqueResult::new(spec.technique, words, conflicts.len(), program.len());
        if self.trace {
            eprintln!(
                "[Analyze] {:<24} conflicts={:<4} overhead={}",
                spec.technique.name(),
                result.conflicts,
                result.overhead
            );
        }
        result
    }

    fn trace_conflicts(&self, label: &str, conflicts: &[Conflict]) {
        eprintln!("[Hazard] {} set: {} conflict(s)", label, conflicts.len());
        for c in conflicts {
            eprintln!(
                "[Hazard]   {} ({:#010x} -> {:#010x})",
                c,
                self.program.words()[c.producer()],
                self.program.words()[c.consumer()]
            );
        }
    }
}

/// Evaluates all nine techniques for `program` without tracing.
pub fn analyze_all(program: &Program) -> AnalysisReport {
    PipelineAnalyzer::new(program).analyze_all()
}
