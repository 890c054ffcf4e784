//! Step classification
//!
//! Each row's kind depends only on its own text and the indent of the row
//! directly after it:
//! - a row followed by a deeper row is a category header
//! - otherwise a row whose trimmed text starts with `//` or `--` is a comment
//! - everything else is a gradable step

use crate::types::{ClassifiedRow, StepKind, TestpadStep};

/// Line-comment prefixes recognized in step text
const COMMENT_PREFIXES: [&str; 2] = ["//", "--"];

/// Classify every step, preserving length and order
pub fn classify_steps(steps: &[TestpadStep]) -> Vec<ClassifiedRow> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| ClassifiedRow::new(step, classify_step(step, steps.get(i + 1))))
        .collect()
}

/// Classify one step given its successor, if any
pub fn classify_step(step: &TestpadStep, next: Option<&TestpadStep>) -> StepKind {
    let has_child = next.is_some_and(|n| n.indent > step.indent);
    if has_child {
        return StepKind::Category;
    }

    let text = step.text.trim();
    if COMMENT_PREFIXES.iter().any(|p| text.starts_with(p)) {
        StepKind::Comment
    } else {
        StepKind::Step
    }
}
