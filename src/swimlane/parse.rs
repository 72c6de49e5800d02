//! Step parser for LLM-generated workflow text.
//!
//! The model returns a numbered list ("1. Create record: ...") that may be
//! preceded by a prose sentence and may wrap a step's description onto the
//! next line without a new number. Model-authored numbering is not trusted
//! to be contiguous or correctly ordered, so indices are reassigned here.

use super::step::{ParsedWorkflow, WorkflowStep};

/// Parse raw workflow text into an intro sentence and ordered steps.
///
/// Total over all strings: empty or whitespace-only input yields no intro
/// and no steps, and parsing the same string twice yields identical output.
#[must_use]
pub fn parse(raw_text: &str) -> ParsedWorkflow {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut intro_lines: Vec<&str> = Vec::new();
    let mut steps: Vec<WorkflowStep> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in lines {
        if let Some((label, rest)) = split_step_start(line) {
            if let Some((ordinal_label, text)) = current.take() {
                finalize_step(&mut steps, ordinal_label, text);
            }
            current = Some((label.to_owned(), rest.trim().to_owned()));
        } else if let Some((_, text)) = current.as_mut() {
            // Wrapped description line: merge into the current step.
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line);
        } else {
            intro_lines.push(line);
        }
    }
    if let Some((ordinal_label, text)) = current.take() {
        finalize_step(&mut steps, ordinal_label, text);
    }

    if steps.is_empty() {
        // No numbered lines anywhere: fall back to one step per non-empty
        // line with synthesized markers. In that case nothing qualifies as
        // an intro.
        let steps = intro_lines
            .iter()
            .enumerate()
            .map(|(i, line)| WorkflowStep {
                index: i + 1,
                ordinal_label: format!("{}.", i + 1),
                text: (*line).to_owned(),
            })
            .collect();
        return ParsedWorkflow { intro: None, steps };
    }

    let intro = if intro_lines.is_empty() {
        None
    } else {
        Some(intro_lines.join(" "))
    };
    ParsedWorkflow { intro, steps }
}

fn finalize_step(steps: &mut Vec<WorkflowStep>, ordinal_label: String, text: String) {
    let index = steps.len() + 1;
    steps.push(WorkflowStep { index, ordinal_label, text: text.trim().to_owned() });
}

/// Split a step-start line like `"3. Upload the document"` into its marker
/// (`"3."`) and content. A step start is one or more digits, a period, and
/// a space at the beginning of the (already trimmed) line.
fn split_step_start(line: &str) -> Option<(&str, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .map(|rest| (&line[..=digits], rest))
}
