//! Spreadsheet export template
//!
//! Produces a tab-separated blank template for offline test runs. Every row
//! is encoded the same way regardless of its kind.

use crate::parser::MAX_INDENT;
use crate::types::ClassifiedRow;

/// Column headers of the export template
pub const EXPORT_HEADER: [&str; 5] = ["Step", "Text", "Pass", "Fail", "Blocked"];

/// Spaces emitted per indent level inside the text cell
pub const INDENT_UNIT: &str = "  ";

/// Build the tab-separated export template
///
/// The text cell starts with an apostrophe so spreadsheets keep it as text
/// instead of coercing it to a number or date. Result columns are always
/// empty. Tabs and line breaks inside a cell become single spaces so every
/// row stays on one line with five columns.
pub fn build_export_template(rows: &[ClassifiedRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(EXPORT_HEADER.join("\t"));

    for row in rows {
        let text = format!("'{}{}", INDENT_UNIT.repeat(row.indent.min(MAX_INDENT)), cell(&row.text));
        lines.push([cell(&row.step).as_str(), text.as_str(), "", "", ""].join("\t"));
    }

    lines.join("\n")
}

fn cell(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_steps;
    use crate::types::TestpadStep;

    #[test]
    fn test_export_shape() {
        let rows = classify_steps(&[
            TestpadStep::new("", 0, "Account"),
            TestpadStep::new("1", 1, "Sign up"),
            TestpadStep::new("2", 1, "// optional"),
        ]);

        let output = build_export_template(&rows);
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), rows.len() + 1);
        for line in &lines {
            let cols: Vec<&str> = line.split('\t').collect();
            assert_eq!(cols.len(), 5, "line: {line:?}");
        }
        for line in &lines[1..] {
            let cols: Vec<&str> = line.split('\t').collect();
            assert_eq!(&cols[2..], &["", "", ""]);
        }
    }

    #[test]
    fn test_export_header() {
        let output = build_export_template(&[]);
        assert_eq!(output, "Step\tText\tPass\tFail\tBlocked");
    }

    #[test]
    fn test_export_indent_encoding() {
        let rows = classify_steps(&[
            TestpadStep::new("", 0, "Group"),
            TestpadStep::new("3", 2, "Deep step"),
        ]);
        let output = build_export_template(&rows);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "\t'Group\t\t\t");
        assert_eq!(lines[2], "3\t'    Deep step\t\t\t");
    }

    #[test]
    fn test_export_huge_indent() {
        let parsed =
            crate::parser::parse_testpad("number,indent,text\n1,9223372036854775807,Deep\n");
        let output = build_export_template(&classify_steps(&parsed.steps));
        let expected = format!("1\t'{}Deep\t\t\t", INDENT_UNIT.repeat(MAX_INDENT));
        assert_eq!(output.lines().nth(1), Some(expected.as_str()));

        let hand_built = classify_steps(&[TestpadStep::new("2", usize::MAX, "Built")]);
        let output = build_export_template(&hand_built);
        assert!(output.ends_with("Built\t\t\t"));
    }

    #[test]
    fn test_export_flattens_multiline_cells() {
        let rows = classify_steps(&[TestpadStep::new("1", 0, "Check:\n- title\tbody")]);
        let output = build_export_template(&rows);
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1\t'Check: - title body\t\t\t");
    }

    #[test]
    fn test_export_ignores_kind() {
        let step = TestpadStep::new("1", 0, "-- same either way");
        let comment = classify_steps(std::slice::from_ref(&step));
        let mut as_step = comment.clone();
        as_step[0].kind = crate::types::StepKind::Step;

        assert_eq!(
            build_export_template(&comment),
            build_export_template(&as_step)
        );
    }
}
