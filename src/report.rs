//! Analysis results and reporting.
//!
//! Collects the per-technique outcome of a [`PipelineAnalyzer`] run and
//! renders it as a fixed-width table or as JSON.
//!
//! [`PipelineAnalyzer`]: crate::pipeline::PipelineAnalyzer

use serde::{Serialize, Serializer};

use crate::common::error::Result;
use crate::pipeline::analyzer::ConflictSets;
use crate::pipeline::techniques::Technique;

/// Outcome of one technique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TechniqueResult {
    pub technique: Technique,
    /// Resulting word sequence; the original program for detect-only techniques.
    #[serde(serialize_with = "hex_words")]
    pub words: Vec<u32>,
    /// Size of the conflict set the technique read.
    pub conflicts: usize,
    /// Words added relative to the original program.
    pub overhead: usize,
}

impl TechniqueResult {
    pub fn new(technique: Technique, words: Vec<u32>, conflicts: usize, original_len: usize) -> Self {
        let overhead = words.len().saturating_sub(original_len);
        Self {
            technique,
            words,
            conflicts,
            overhead,
        }
    }

    /// The single figure traditionally shown per technique.
    ///
    /// Detect-only techniques report their conflict count, every other
    /// technique its overhead.
    pub fn score(&self) -> usize {
        if self.technique.is_detect_only() {
            self.conflicts
        } else {
            self.overhead
        }
    }
}

/// Results of all nine techniques for one program, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub original_len: usize,
    pub conflicts: ConflictSets,
    pub results: Vec<TechniqueResult>,
}

impl AnalysisReport {
    pub fn new(original_len: usize, conflicts: ConflictSets, results: Vec<TechniqueResult>) -> Self {
        Self {
            original_len,
            conflicts,
            results,
        }
    }

    pub fn get(&self, technique: Technique) -> Option<&TechniqueResult> {
        self.results.iter().find(|r| r.technique == technique)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TechniqueResult> {
        self.results.iter()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report as a fixed-width table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(58);
        let thin = "-".repeat(58);

        out.push_str(&rule);
        out.push('\n');
        out.push_str("PIPELINE HAZARD ANALYSIS\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("{:<25}{}\n", "instructions", self.original_len));
        out.push_str(&format!(
            "{:<25}{}\n",
            "hazards.data",
            self.conflicts.no_forwarding.len()
        ));
        out.push_str(&format!(
            "{:<25}{}\n",
            "hazards.data_forwarded",
            self.conflicts.forwarding.len()
        ));
        out.push_str(&format!(
            "{:<25}{}\n",
            "hazards.control",
            self.conflicts.control.len()
        ));
        out.push_str(&thin);
        out.push('\n');
        out.push_str(&format!(
            "  {:<26} {:>10} {:>10} {:>6}\n",
            "technique", "conflicts", "overhead", "words"
        ));
        for r in &self.results {
            out.push_str(&format!(
                "  {:<26} {:>10} {:>10} {:>6}\n",
                r.technique.name(),
                r.conflicts,
                r.overhead,
                r.words.len()
            ));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Prints [`AnalysisReport::render`] to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}

fn hex_words<S: Serializer>(words: &[u32], s: S) -> std::result::Result<S::Ok, S::Error> {
    s.collect_seq(words.iter().map(|w| format!("{:08X}", w)))
}
