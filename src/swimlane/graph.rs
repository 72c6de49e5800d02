//! Diagram builder: lane-tagged steps into a lane-grouped directed graph.
//!
//! The graph is a pure data model — node labels, lane grouping, and
//! cross-lane edge tags — with no rendering concern. It carries its lane
//! names so rendering needs nothing beyond the graph itself, and it is
//! never mutated after `build` returns.

use super::classify::{ClassifiedStep, LaneSet};

/// Display-length threshold for node labels. Longer step texts are cut to
/// `threshold - 3` characters with an ellipsis marker; the underlying step
/// text is never mutated.
pub const DEFAULT_LABEL_WIDTH: usize = 48;

/// One diagram node per workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    /// Stable node identifier (`step_0`, `step_1`, ...).
    pub id: String,
    /// Index into [`WorkflowGraph::lanes`].
    pub lane: usize,
    /// Display label: ordinal marker plus truncated step text.
    pub label: String,
}

/// Directed edge between consecutive steps, by node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: usize,
    pub to: usize,
    /// `true` when the endpoints sit in different lanes.
    pub cross_lane: bool,
}

/// A lane-grouped directed graph of workflow steps.
///
/// Every configured lane is declared here, including lanes with no
/// assigned nodes; whether empty lanes show up in the output is a renderer
/// policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowGraph {
    pub lanes: Vec<String>,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl WorkflowGraph {
    /// Node positions assigned to the given lane, in step order.
    #[must_use]
    pub fn lane_nodes(&self, lane: usize) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.lane == lane)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Build the diagram graph with the default label width.
#[must_use]
pub fn build(steps: &[ClassifiedStep], lanes: &LaneSet) -> WorkflowGraph {
    build_with_label_width(steps, lanes, DEFAULT_LABEL_WIDTH)
}

/// Build the diagram graph with an explicit label-width threshold.
#[must_use]
pub fn build_with_label_width(steps: &[ClassifiedStep], lanes: &LaneSet, label_width: usize) -> WorkflowGraph {
    let nodes: Vec<DiagramNode> = steps
        .iter()
        .enumerate()
        .map(|(i, cs)| DiagramNode {
            id: format!("step_{i}"),
            lane: cs.lane,
            label: format!("{} {}", cs.step.ordinal_label, truncate(&cs.step.text, label_width)),
        })
        .collect();

    let edges: Vec<DiagramEdge> = steps
        .windows(2)
        .enumerate()
        .map(|(i, pair)| DiagramEdge { from: i, to: i + 1, cross_lane: pair[0].lane != pair[1].lane })
        .collect();

    WorkflowGraph { lanes: lanes.names().to_vec(), nodes, edges }
}

/// Cut `text` to `max - 3` characters and append `...` when it exceeds
/// `max` characters. Character-based, so multi-byte text stays intact.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max || max < 4 {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max - 3).collect();
    format!("{cut}...")
}
