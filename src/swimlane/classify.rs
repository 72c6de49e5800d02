//! Lane classifier: assigns each workflow step to one external-system lane.
//!
//! Classification is a first-match linear scan over a small, fixed,
//! ordered list of lane names — no scoring. A step mentioning two lane
//! names lands in whichever is declared first.

use super::step::WorkflowStep;

/// External systems the workflow prompt steers the model toward, in
/// declaration (priority) order.
pub const DEFAULT_LANES: [&str; 5] = ["Salesforce", "DocuSign", "Google Drive", "Slack", "Email"];

/// The closed, ordered set of lane names configured for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSet {
    names: Vec<String>,
}

impl LaneSet {
    /// Build a lane set from an ordered list of names.
    ///
    /// Blank names are dropped. An empty list collapses to
    /// [`LaneSet::default_systems`] so lane assignment stays total.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Self::default_systems();
        }
        Self { names }
    }

    /// The default external-system lanes.
    #[must_use]
    pub fn default_systems() -> Self {
        Self { names: DEFAULT_LANES.iter().map(|&n| n.to_owned()).collect() }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Lane name for a lane index produced by [`classify`].
    #[must_use]
    pub fn name(&self, lane: usize) -> &str {
        &self.names[lane]
    }
}

impl Default for LaneSet {
    fn default() -> Self {
        Self::default_systems()
    }
}

/// Assign a step to a lane index.
///
/// Lane names are matched case-insensitively as substrings of the step
/// text, in declared order; the first match wins. When nothing matches,
/// the step falls back to `position % lane_count` — deterministic and
/// total, but otherwise arbitrary. `position` is the step's 0-based
/// position in the full step sequence.
#[must_use]
pub fn classify(step: &WorkflowStep, lanes: &LaneSet, position: usize) -> usize {
    let haystack = step.text.to_lowercase();
    for (i, name) in lanes.names().iter().enumerate() {
        if haystack.contains(&name.to_lowercase()) {
            return i;
        }
    }
    position % lanes.len()
}

/// A parsed step together with its assigned lane index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedStep {
    pub step: WorkflowStep,
    pub lane: usize,
}
