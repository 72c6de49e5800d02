//! Tests for the workflow step parser, lane classifier, and diagram builder.

use super::classify::{ClassifiedStep, LaneSet, classify};
use super::graph::{DEFAULT_LABEL_WIDTH, build, build_with_label_width};
use super::parse::parse;
use super::parse_and_classify;
use super::step::WorkflowStep;

fn step(index: usize, text: &str) -> WorkflowStep {
    WorkflowStep { index, ordinal_label: format!("{index}."), text: text.to_owned() }
}

// =============================================================================
// PARSER TESTS
// =============================================================================

#[test]
fn parse_numbered_steps() {
    let input = "1. Create record in Salesforce\n2. Send contract via DocuSign\n3. Archive in Google Drive";
    let parsed = parse(input);
    assert!(parsed.intro.is_none());
    assert_eq!(parsed.steps.len(), 3);
    assert_eq!(parsed.steps[0].index, 1);
    assert_eq!(parsed.steps[0].ordinal_label, "1.");
    assert_eq!(parsed.steps[0].text, "Create record in Salesforce");
    assert_eq!(parsed.steps[2].index, 3);
    assert_eq!(parsed.steps[2].text, "Archive in Google Drive");
}

#[test]
fn parse_intro_before_first_step() {
    let input = "This automates lease onboarding.\n1. Upload file to Google Drive\n2. Send contract via DocuSign\n3. Notify via Slack";
    let parsed = parse(input);
    assert_eq!(parsed.intro.as_deref(), Some("This automates lease onboarding."));
    assert_eq!(parsed.steps.len(), 3);
}

#[test]
fn parse_multi_line_intro_is_space_joined() {
    let input = "Here is a proposed\nautomation workflow.\n1. Do the thing";
    let parsed = parse(input);
    assert_eq!(parsed.intro.as_deref(), Some("Here is a proposed automation workflow."));
    assert_eq!(parsed.steps.len(), 1);
}

#[test]
fn parse_continuation_line_merged_with_single_space() {
    let input = "1. Create record: set up a new\nclient file in Salesforce";
    let parsed = parse(input);
    assert_eq!(parsed.steps.len(), 1);
    assert_eq!(parsed.steps[0].text, "Create record: set up a new client file in Salesforce");
}

#[test]
fn parse_blank_lines_discarded() {
    let input = "1. First step\n\n\n2. Second step\n";
    let parsed = parse(input);
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[1].text, "Second step");
}

#[test]
fn parse_indices_ignore_model_numbering() {
    // Model-authored numerals are kept for display only; indices restart
    // at 1 and increase in encounter order.
    let input = "3. First in text\n7. Second in text\n2. Third in text";
    let parsed = parse(input);
    let indices: Vec<usize> = parsed.steps.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert_eq!(parsed.steps[0].ordinal_label, "3.");
    assert_eq!(parsed.steps[1].ordinal_label, "7.");
    assert_eq!(parsed.steps[2].ordinal_label, "2.");
}

#[test]
fn parse_step_count_matches_numbered_lines() {
    let input = "Intro sentence.\n1. One\n2. Two\nwrapped detail\n3. Three";
    let parsed = parse(input);
    // 3 numbered lines -> 3 steps, wrapped line folded into step 2.
    assert_eq!(parsed.steps.len(), 3);
    assert_eq!(parsed.steps[1].text, "Two wrapped detail");
}

#[test]
fn parse_number_without_dot_space_is_not_a_step() {
    let input = "1.No space after dot\n2 No dot at all";
    let parsed = parse(input);
    // Degenerate fallback: no real step starts, each line becomes a step.
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[0].text, "1.No space after dot");
    assert_eq!(parsed.steps[0].ordinal_label, "1.");
}

#[test]
fn parse_degenerate_no_numbered_lines() {
    let input = "Collect documents\nReview terms\nSign and file";
    let parsed = parse(input);
    assert!(parsed.intro.is_none());
    assert_eq!(parsed.steps.len(), 3);
    assert_eq!(parsed.steps[0].ordinal_label, "1.");
    assert_eq!(parsed.steps[2].text, "Sign and file");
}

#[test]
fn parse_empty_input() {
    let parsed = parse("");
    assert!(parsed.intro.is_none());
    assert!(parsed.steps.is_empty());

    let parsed = parse("   \n\n\t \n");
    assert!(parsed.intro.is_none());
    assert!(parsed.steps.is_empty());
}

#[test]
fn parse_is_deterministic() {
    let input = "Intro.\n1. One\nwrapped\n2. Two";
    assert_eq!(parse(input), parse(input));
}

#[test]
fn parse_multi_digit_ordinals() {
    let input = "10. Tenth step\n11. Eleventh step";
    let parsed = parse(input);
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[0].ordinal_label, "10.");
    assert_eq!(parsed.steps[0].text, "Tenth step");
}

// =============================================================================
// CLASSIFIER TESTS
// =============================================================================

#[test]
fn classify_direct_keyword_match() {
    let lanes = LaneSet::default_systems();
    let s = step(1, "Send the contract via DocuSign for signature");
    assert_eq!(classify(&s, &lanes, 0), 1);
    assert_eq!(lanes.name(1), "DocuSign");
}

#[test]
fn classify_is_case_insensitive() {
    let lanes = LaneSet::default_systems();
    let s = step(1, "upload the file to GOOGLE DRIVE");
    assert_eq!(classify(&s, &lanes, 4), 2);
}

#[test]
fn classify_first_declared_lane_wins() {
    // Both "Slack" and "Email" appear; Slack is declared earlier.
    let lanes = LaneSet::new(["Salesforce", "DocuSign", "Google Drive", "Slack", "Email"]);
    let s = step(1, "Notify the team on Slack and send an Email recap");
    assert_eq!(classify(&s, &lanes, 0), 3);
    assert_eq!(lanes.name(3), "Slack");
}

#[test]
fn classify_round_robin_fallback() {
    let lanes = LaneSet::default_systems();
    let s = step(8, "Review the terms with the legal team");
    // Position 7 with 5 lanes -> lane index 7 % 5 = 2.
    assert_eq!(classify(&s, &lanes, 7), 2);
}

#[test]
fn classify_fallback_depends_only_on_position() {
    let lanes = LaneSet::default_systems();
    let a = step(1, "Review the terms");
    let b = step(1, "Completely different unmatched text");
    assert_eq!(classify(&a, &lanes, 3), classify(&b, &lanes, 3));
}

#[test]
fn classify_is_deterministic() {
    let lanes = LaneSet::default_systems();
    let s = step(2, "Notify via Slack");
    assert_eq!(classify(&s, &lanes, 1), classify(&s, &lanes, 1));
}

#[test]
fn lane_set_drops_blank_names_and_defaults_when_empty() {
    let lanes = LaneSet::new(["CRM", "  ", ""]);
    assert_eq!(lanes.names(), ["CRM"]);

    let lanes = LaneSet::new(Vec::<String>::new());
    assert_eq!(lanes.len(), 5);
    assert_eq!(lanes.name(0), "Salesforce");
}

// =============================================================================
// PARSE + CLASSIFY
// =============================================================================

#[test]
fn parse_and_classify_scenario() {
    let input = "This automates lease onboarding.\n1. Upload file to Google Drive\n2. Send contract via DocuSign\n3. Notify via Slack";
    let lanes = LaneSet::default_systems();
    let (intro, steps) = parse_and_classify(input, &lanes);

    assert_eq!(intro.as_deref(), Some("This automates lease onboarding."));
    assert_eq!(steps.len(), 3);
    let assigned: Vec<&str> = steps.iter().map(|cs| lanes.name(cs.lane)).collect();
    assert_eq!(assigned, ["Google Drive", "DocuSign", "Slack"]);
}

#[test]
fn parse_and_classify_empty_input() {
    let lanes = LaneSet::default_systems();
    let (intro, steps) = parse_and_classify("", &lanes);
    assert!(intro.is_none());
    assert!(steps.is_empty());
}

// =============================================================================
// DIAGRAM BUILDER TESTS
// =============================================================================

#[test]
fn build_tags_cross_lane_edges() {
    let lanes = LaneSet::new(["CRM", "DocuSign"]);
    let steps = vec![
        ClassifiedStep { step: step(1, "Open CRM record"), lane: 0 },
        ClassifiedStep { step: step(2, "Update CRM fields"), lane: 0 },
        ClassifiedStep { step: step(3, "Send via DocuSign"), lane: 1 },
    ];
    let graph = build(&steps, &lanes);

    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);
    assert_eq!((graph.edges[0].from, graph.edges[0].to, graph.edges[0].cross_lane), (0, 1, false));
    assert_eq!((graph.edges[1].from, graph.edges[1].to, graph.edges[1].cross_lane), (1, 2, true));
}

#[test]
fn build_empty_steps_yields_empty_graph_with_lanes_declared() {
    let lanes = LaneSet::default_systems();
    let graph = build(&[], &lanes);
    assert_eq!(graph.lanes.len(), 5);
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn build_single_step_has_no_edges() {
    let lanes = LaneSet::default_systems();
    let steps = vec![ClassifiedStep { step: step(1, "Notify via Slack"), lane: 3 }];
    let graph = build(&steps, &lanes);
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
    assert_eq!(graph.nodes[0].id, "step_0");
    assert_eq!(graph.nodes[0].lane, 3);
}

#[test]
fn build_node_labels_combine_ordinal_and_text() {
    let lanes = LaneSet::default_systems();
    let steps = vec![ClassifiedStep { step: step(1, "Notify via Slack"), lane: 3 }];
    let graph = build(&steps, &lanes);
    assert_eq!(graph.nodes[0].label, "1. Notify via Slack");
}

#[test]
fn build_truncates_long_labels_without_mutating_text() {
    let lanes = LaneSet::default_systems();
    let text = "abcdefghijklmnop"; // 16 chars
    let steps = vec![ClassifiedStep { step: step(1, text), lane: 0 }];
    let graph = build_with_label_width(&steps, &lanes, 10);

    assert_eq!(graph.nodes[0].label, "1. abcdefg...");
    // The underlying step is untouched.
    assert_eq!(steps[0].step.text, text);
}

#[test]
fn build_short_labels_not_truncated() {
    let lanes = LaneSet::default_systems();
    let text = "short";
    let steps = vec![ClassifiedStep { step: step(1, text), lane: 0 }];
    let graph = build_with_label_width(&steps, &lanes, DEFAULT_LABEL_WIDTH);
    assert_eq!(graph.nodes[0].label, "1. short");
}

#[test]
fn lane_nodes_preserve_step_order() {
    let lanes = LaneSet::new(["CRM", "Email"]);
    let steps = vec![
        ClassifiedStep { step: step(1, "a"), lane: 0 },
        ClassifiedStep { step: step(2, "b"), lane: 1 },
        ClassifiedStep { step: step(3, "c"), lane: 0 },
    ];
    let graph = build(&steps, &lanes);
    assert_eq!(graph.lane_nodes(0), vec![0, 2]);
    assert_eq!(graph.lane_nodes(1), vec![1]);
}
