//! Renderer: workflow graph → Graphviz layout or HTML grid fallback.
//!
//! DESIGN
//! ======
//! Availability over fidelity: rendering first tries a graph-layout engine
//! (Graphviz `dot` piped to SVG). Any engine failure — missing binary,
//! non-zero exit, garbage output — is absorbed locally and downgraded to a
//! self-contained HTML grid of lane rows, so a well-formed graph always
//! yields an artifact. The two branches are an explicit result type rather
//! than an ignored error, so tests can assert which one executed without
//! depending on whether `dot` is installed.

use std::fmt::Write as _;
use std::io::Write as _;
use std::process::{Command, Stdio};

use tracing::warn;

use super::graph::WorkflowGraph;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of the optional external graph-layout engine. Always caught at
/// the renderer boundary, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum LayoutEngineError {
    /// The engine process could not be started (typically: not installed).
    #[error("layout engine spawn failed: {0}")]
    Spawn(String),
    /// The engine ran but did not produce usable output.
    #[error("layout engine failed: {0}")]
    Engine(String),
}

/// A malformed graph reached the renderer. Unreachable for graphs built by
/// [`super::graph::build`]; hitting this is a programming-contract
/// violation, not a runtime condition to recover from.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("edge endpoint references missing node {0}")]
    DanglingEdge(usize),
    #[error("node {node} references missing lane {lane}")]
    UnknownLane { node: usize, lane: usize },
}

// =============================================================================
// LAYOUT ENGINE
// =============================================================================

/// A synchronous, local graph-layout engine: DOT text in, rendered markup out.
pub trait LayoutEngine {
    /// Render a DOT digraph description to display markup (e.g. SVG).
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutEngineError`] if the engine is unavailable or its
    /// invocation fails.
    fn render_dot(&self, dot: &str) -> Result<String, LayoutEngineError>;
}

/// Layout engine backed by the local Graphviz `dot` binary.
pub struct DotLayoutEngine {
    program: String,
}

impl DotLayoutEngine {
    #[must_use]
    pub fn new() -> Self {
        Self { program: "dot".into() }
    }

    /// Use an alternative layout program / binary path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for DotLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for DotLayoutEngine {
    fn render_dot(&self, dot: &str) -> Result<String, LayoutEngineError> {
        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| LayoutEngineError::Spawn(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(dot.as_bytes())
                .map_err(|e| LayoutEngineError::Engine(format!("stdin write failed: {e}")))?;
            // Dropping stdin closes the pipe so `dot` sees EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| LayoutEngineError::Engine(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LayoutEngineError::Engine(format!(
                "exit status {status}: {stderr}",
                status = output.status
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| LayoutEngineError::Engine(format!("non-UTF-8 output: {e}")))
    }
}

// =============================================================================
// ARTIFACT
// =============================================================================

/// The rendered diagram — either engine-laid-out markup or the grid fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramArtifact {
    /// SVG markup produced by the graph-layout engine.
    Layout(String),
    /// Self-contained HTML grid rendered without an engine.
    Grid(String),
}

impl DiagramArtifact {
    /// `true` when the grid fallback was used instead of the layout engine.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        matches!(self, Self::Grid(_))
    }

    /// The artifact markup, whichever branch produced it.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Layout(s) | Self::Grid(s) => s,
        }
    }
}

// =============================================================================
// RENDER
// =============================================================================

/// Render a workflow graph, downgrading to the grid fallback on any layout
/// engine failure.
///
/// # Errors
///
/// Returns a [`RenderError`] only when the graph itself is malformed,
/// which [`super::graph::build`] guarantees against.
pub fn render(graph: &WorkflowGraph, engine: &dyn LayoutEngine) -> Result<DiagramArtifact, RenderError> {
    validate(graph)?;

    let dot = to_dot(graph);
    match engine.render_dot(&dot) {
        Ok(svg) => Ok(DiagramArtifact::Layout(svg)),
        Err(e) => {
            warn!(error = %e, "layout engine unavailable, falling back to grid rendering");
            Ok(DiagramArtifact::Grid(render_grid(graph)))
        }
    }
}

fn validate(graph: &WorkflowGraph) -> Result<(), RenderError> {
    for (i, node) in graph.nodes.iter().enumerate() {
        if node.lane >= graph.lanes.len() {
            return Err(RenderError::UnknownLane { node: i, lane: node.lane });
        }
    }
    for edge in &graph.edges {
        let dangling = usize::max(edge.from, edge.to);
        if dangling >= graph.nodes.len() {
            return Err(RenderError::DanglingEdge(dangling));
        }
    }
    Ok(())
}

// =============================================================================
// DOT EMISSION
// =============================================================================

/// Serialize the graph as a Graphviz digraph: one `cluster` subgraph per
/// lane (with an invisible placeholder node when the lane is empty, so the
/// lane row keeps its spacing), dashed blue edges for cross-lane
/// transitions.
#[must_use]
pub fn to_dot(graph: &WorkflowGraph) -> String {
    let mut out = String::from("digraph workflow {\n");
    out.push_str("    rankdir=LR;\n    ranksep=0.5;\n    nodesep=0.5;\n    fontname=\"Arial\";\n");

    for (lane_idx, lane) in graph.lanes.iter().enumerate() {
        let _ = writeln!(out, "    subgraph cluster_{lane_idx} {{");
        let _ = writeln!(out, "        label=\"{}\";", escape_dot(lane));
        let _ = writeln!(
            out,
            "        style=filled;\n        fillcolor=\"lightblue{shade}\";\n        fontsize=14;\n        penwidth=2;",
            shade = lane_idx % 2 + 1
        );

        let members = graph.lane_nodes(lane_idx);
        if members.is_empty() {
            let _ = writeln!(
                out,
                "        phantom_{lane_idx} [label=\"\", shape=none, width=0, height=0, style=invis];"
            );
        }
        for pos in members {
            let node = &graph.nodes[pos];
            let _ = writeln!(
                out,
                "        {id} [label=\"{label}\", shape=box, style=filled, fillcolor=\"#ffffcc\", fontsize=12, margin=\"0.15\"];",
                id = node.id,
                label = escape_dot(&node.label)
            );
        }
        out.push_str("    }\n");
    }

    for edge in &graph.edges {
        let from = &graph.nodes[edge.from].id;
        let to = &graph.nodes[edge.to].id;
        if edge.cross_lane {
            let _ = writeln!(out, "    {from} -> {to} [color=blue, penwidth=1.5, style=dashed];");
        } else {
            let _ = writeln!(out, "    {from} -> {to} [color=black, penwidth=1.5];");
        }
    }

    out.push_str("}\n");
    out
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

// =============================================================================
// GRID FALLBACK
// =============================================================================

const GRID_STYLE: &str = r"
.workflow-container { display: flex; flex-direction: column; width: 100%;
  border: 1px solid #ddd; border-radius: 5px; overflow: hidden; }
.lane-row { display: flex; border-bottom: 1px solid #ddd; }
.lane-row:last-child { border-bottom: none; }
.lane-name { width: 150px; padding: 10px; background-color: #f0f8ff;
  font-weight: bold; border-right: 1px solid #ddd; }
.lane-steps { flex: 1; padding: 10px; display: flex; flex-wrap: wrap; align-items: center; }
.step-box { background-color: #ffffcc; border: 1px solid #ddd; border-radius: 4px;
  padding: 8px; margin: 5px; max-width: 250px; font-size: 12px; }
.arrow { color: #999; margin: 0 5px; font-size: 16px; }
";

/// Render the grid fallback: one row per lane with at least one step,
/// step boxes in step order, arrow glyphs between consecutive boxes.
#[must_use]
pub fn render_grid(graph: &WorkflowGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<style>{GRID_STYLE}</style>");
    out.push_str("<div class=\"workflow-container\">\n");

    for (lane_idx, lane) in graph.lanes.iter().enumerate() {
        let members = graph.lane_nodes(lane_idx);
        if members.is_empty() {
            continue;
        }

        out.push_str("<div class=\"lane-row\">");
        let _ = write!(out, "<div class=\"lane-name\">{}</div>", escape_html(lane));
        out.push_str("<div class=\"lane-steps\">");
        for (i, pos) in members.iter().enumerate() {
            if i > 0 {
                out.push_str("<div class=\"arrow\">&#8594;</div>");
            }
            let _ = write!(out, "<div class=\"step-box\">{}</div>", escape_html(&graph.nodes[*pos].label));
        }
        out.push_str("</div></div>\n");
    }

    out.push_str("</div>\n");
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
