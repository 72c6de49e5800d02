//! Swimlane workflow diagrams.
//!
//! Parses free-form numbered workflow text (as returned by the LLM) into
//! discrete ordered steps, assigns each step to an external-system lane by
//! keyword, builds a lane-grouped directed graph with cross-lane edge
//! tags, and renders it — Graphviz layout when available, HTML grid
//! fallback otherwise. Everything here is stateless and recomputed fresh
//! from the raw text on every call.

pub mod classify;
pub mod graph;
pub mod parse;
pub mod render;
pub mod step;

pub use classify::{ClassifiedStep, DEFAULT_LANES, LaneSet, classify};
pub use graph::{DiagramEdge, DiagramNode, WorkflowGraph, build};
pub use parse::parse;
pub use render::{DiagramArtifact, DotLayoutEngine, LayoutEngine, RenderError, render};
pub use step::{ParsedWorkflow, WorkflowStep};

/// Parse workflow text and classify every step in one pass.
///
/// Returns the optional intro sentence (displayed as a caption, never part
/// of the diagram) and the ordered lane-tagged steps.
#[must_use]
pub fn parse_and_classify(raw_text: &str, lanes: &LaneSet) -> (Option<String>, Vec<ClassifiedStep>) {
    let parsed = parse::parse(raw_text);
    let steps = parsed
        .steps
        .into_iter()
        .enumerate()
        .map(|(position, step)| {
            let lane = classify::classify(&step, lanes, position);
            ClassifiedStep { step, lane }
        })
        .collect();
    (parsed.intro, steps)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_tests;
