//! Step types produced by the workflow text parser.

/// A single discrete step parsed out of generated workflow text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    /// 1-based position in the ordered sequence. Insertion order is
    /// execution order; unique and strictly increasing per parse.
    pub index: usize,
    /// The literal leading marker as it appeared in the text (e.g. `"3."`),
    /// or a synthesized one when the source line carried none. Display
    /// only — never used for re-sorting.
    pub ordinal_label: String,
    /// Full step content (title + description), trimmed, with wrapped
    /// continuation lines merged in with a single separating space.
    pub text: String,
}

/// Parser output: an optional leading prose sentence plus the ordered steps.
///
/// The intro is carried separately for display as a caption; it never
/// becomes a diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWorkflow {
    pub intro: Option<String>,
    pub steps: Vec<WorkflowStep>,
}
