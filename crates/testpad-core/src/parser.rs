//! Testpad script extraction
//!
//! Exported test scripts interleave three blocks with no delimiter other than
//! literal marker lines:
//! - a metadata block opened by `SCRIPT` or `TEMPLATE` and closed by
//!   `REPORT COMMENTS`, holding `Name` and `Description` rows
//! - a step table introduced by a `number,indent,text` header row
//! - a trailing free-text comments block after `REPORT COMMENTS`
//!
//! Metadata is only read inside the script block. The step table header is
//! searched for across the whole input, and the first match wins.

use crate::csv::{parse_csv_line, split_records};
use crate::types::{ParsedTestpad, TestpadStep};

/// Marker lines that open the metadata block
const SCRIPT_MARKERS: [&str; 2] = ["SCRIPT", "TEMPLATE"];

/// Marker line that closes the metadata block and the step table
const COMMENTS_MARKER: &str = "REPORT COMMENTS";

/// Prefix (lowercased) of the step table header row
const STEP_HEADER: &str = "number,indent,text";

/// Deepest indent level kept; deeper values are clamped
pub const MAX_INDENT: usize = 32;

/// Where the scan is relative to the script block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptState {
    OutsideScript,
    InsideScript,
}

/// Where the scan is relative to the step table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    BeforeHeader,
    ReadingSteps,
    Closed,
}

/// Metadata key the last keyed row introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataKey {
    Name,
    Description,
    Other,
}

/// Parse a testpad export into its name, description and steps
pub fn parse_testpad(content: &str) -> ParsedTestpad {
    let records = split_records(content);
    extract_testpad(&records)
}

/// Extract a testpad from already-split logical records
pub fn extract_testpad(records: &[String]) -> ParsedTestpad {
    let mut testpad = ParsedTestpad::default();

    let mut script = ScriptState::OutsideScript;
    let mut table = TableState::BeforeHeader;
    let mut current_key: Option<MetadataKey> = None;

    for (record_num, record) in records.iter().enumerate() {
        let trimmed = record.trim();

        // Step table
        match table {
            TableState::BeforeHeader => {
                if trimmed.to_lowercase().starts_with(STEP_HEADER) {
                    log::debug!("step table header at record {}", record_num);
                    table = TableState::ReadingSteps;
                }
            }
            TableState::ReadingSteps => {
                if trimmed == COMMENTS_MARKER {
                    log::debug!("step table closed at record {}", record_num);
                    table = TableState::Closed;
                } else if !trimmed.is_empty() {
                    if let Some(step) = parse_step_row(record) {
                        testpad.steps.push(step);
                    }
                }
            }
            TableState::Closed => {}
        }

        // Script block
        match script {
            ScriptState::OutsideScript => {
                if SCRIPT_MARKERS.contains(&trimmed) {
                    log::debug!("script block opened at record {}", record_num);
                    script = ScriptState::InsideScript;
                    current_key = None;
                }
            }
            ScriptState::InsideScript => {
                if trimmed == COMMENTS_MARKER {
                    log::debug!("script block closed at record {}", record_num);
                    script = ScriptState::OutsideScript;
                    current_key = None;
                } else if !trimmed.is_empty() {
                    read_metadata_row(record, &mut testpad, &mut current_key);
                }
            }
        }
    }

    if table == TableState::BeforeHeader {
        log::debug!("no step table header found");
    }
    log::debug!(
        "extracted testpad {:?} with {} steps",
        testpad.name,
        testpad.steps.len()
    );

    testpad
}

/// Apply one non-blank record from inside the script block
fn read_metadata_row(
    record: &str,
    testpad: &mut ParsedTestpad,
    current_key: &mut Option<MetadataKey>,
) {
    let fields = parse_csv_line(record);

    if fields.len() > 1 && !fields[0].is_empty() {
        let value = fields[1..].join(",").trim().to_string();
        let key = match fields[0].as_str() {
            "Name" => {
                testpad.name = value;
                MetadataKey::Name
            }
            "Description" => {
                testpad.description = value;
                MetadataKey::Description
            }
            _ => MetadataKey::Other,
        };
        *current_key = Some(key);
        return;
    }

    // Free-text description continuation, not a valid CSV row itself
    if *current_key == Some(MetadataKey::Description) && !record.contains(',') {
        if !testpad.description.is_empty() {
            testpad.description.push('\n');
        }
        testpad.description.push_str(record);
    }
}

/// Parse one row of the step table
///
/// Rows with fewer than three fields, or with both label and text empty, are
/// dropped.
fn parse_step_row(record: &str) -> Option<TestpadStep> {
    let fields = parse_csv_line(record);
    if fields.len() < 3 {
        return None;
    }

    let step = fields[0].trim();
    let text = fields[2].trim();
    if step.is_empty() && text.is_empty() {
        return None;
    }

    Some(TestpadStep::new(step, parse_indent(&fields[1]), text))
}

/// Parse an indent cell; anything that is not a non-negative integer is 0
fn parse_indent(cell: &str) -> usize {
    let cell = cell.trim();
    match cell.parse::<i64>() {
        Ok(n) if n > MAX_INDENT as i64 => {
            log::warn!("indent {} clamped to {}", n, MAX_INDENT);
            MAX_INDENT
        }
        Ok(n) if n >= 0 => n as usize,
        Ok(n) => {
            log::warn!("negative indent {} treated as 0", n);
            0
        }
        Err(_) => {
            if !cell.is_empty() {
                log::warn!("non-integer indent {:?} treated as 0", cell);
            }
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_testpad() {
        let content = "SCRIPT\nName,Login flow\nDescription,Sign in and out\n\nnumber,indent,text\n1,0,Open the app\n2,0,Tap Sign in\n";

        let testpad = parse_testpad(content);

        assert_eq!(testpad.name, "Login flow");
        assert_eq!(testpad.description, "Sign in and out");
        assert_eq!(testpad.steps.len(), 2);
        assert_eq!(testpad.steps[0], TestpadStep::new("1", 0, "Open the app"));
        assert_eq!(testpad.steps[1], TestpadStep::new("2", 0, "Tap Sign in"));
    }

    #[test]
    fn test_template_marker_opens_script() {
        let testpad = parse_testpad("TEMPLATE\nName,Checkout\n");
        assert_eq!(testpad.name, "Checkout");
        assert!(testpad.steps.is_empty());
    }

    #[test]
    fn test_markers_are_exact_and_case_sensitive() {
        let testpad = parse_testpad("script\nName,Lower\nSCRIPT:\nName,Suffix\n");
        assert_eq!(testpad.name, "");

        let testpad = parse_testpad("  SCRIPT  \nName,Padded\n");
        assert_eq!(testpad.name, "Padded");
    }

    #[test]
    fn test_metadata_outside_script_ignored() {
        let testpad = parse_testpad("Name,Outside\nSCRIPT\nDescription,Inside\n");
        assert_eq!(testpad.name, "");
        assert_eq!(testpad.description, "Inside");
    }

    #[test]
    fn test_name_rejoins_commas() {
        let testpad = parse_testpad("SCRIPT\nName,Login, logout, and retry \n");
        assert_eq!(testpad.name, "Login, logout, and retry");
    }

    #[test]
    fn test_description_continuation_lines() {
        let content = "SCRIPT\nName,Sync\nDescription,First line\nSecond line\nThird line\nnumber,indent,text\n1,0,Go\n";

        let testpad = parse_testpad(content);

        assert_eq!(testpad.description, "First line\nSecond line\nThird line");
        assert_eq!(testpad.steps.len(), 1);
    }

    #[test]
    fn test_continuation_with_comma_not_appended() {
        let content = "SCRIPT\nDescription,Start\n,orphan cell\nplain tail\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.description, "Start\nplain tail");
    }

    #[test]
    fn test_continuation_only_after_description() {
        let content = "SCRIPT\nName,Pad\nloose line\nDescription,Desc\nOwner,Sam\nafter owner\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.name, "Pad");
        assert_eq!(testpad.description, "Desc");
    }

    #[test]
    fn test_multiline_quoted_description() {
        let content = "SCRIPT\nDescription,\"Line one\nLine two\"\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.description, "Line one\nLine two");
    }

    #[test]
    fn test_header_and_comments_boundary() {
        let content = "SCRIPT\nName,Foo\n\nnumber,indent,text\n1,0,Step one\n\nREPORT COMMENTS\nnumber,indent,text\n2,0,should be ignored";

        let testpad = parse_testpad(content);

        assert_eq!(testpad.name, "Foo");
        assert_eq!(testpad.steps.len(), 1);
        assert_eq!(testpad.steps[0].text, "Step one");
    }

    #[test]
    fn test_metadata_after_comments_not_captured() {
        let content = "SCRIPT\nName,Foo\nREPORT COMMENTS\nName,Bar\nDescription,Nope\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.name, "Foo");
        assert_eq!(testpad.description, "");
    }

    #[test]
    fn test_header_is_case_insensitive_prefix() {
        let content = "  Number,Indent,Text,Extra\n1,0,Go\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.steps, vec![TestpadStep::new("1", 0, "Go")]);
    }

    #[test]
    fn test_header_found_outside_script() {
        let content = "number,indent,text\n1,0,First\nSCRIPT\nName,Late\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.name, "Late");
        assert_eq!(testpad.steps.len(), 1);
    }

    #[test]
    fn test_missing_header_yields_no_steps() {
        let content = "SCRIPT\nName,Foo\nDescription,Bar\n1,0,Not a step\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.name, "Foo");
        assert_eq!(testpad.description, "Bar");
        assert!(testpad.steps.is_empty());
    }

    #[test]
    fn test_step_rows_skip_short_and_empty() {
        let content = "number,indent,text\n1,0\n,,\n , 2 , \n3,1,Kept\n,2,No label\n";
        let testpad = parse_testpad(content);
        assert_eq!(
            testpad.steps,
            vec![
                TestpadStep::new("3", 1, "Kept"),
                TestpadStep::new("", 2, "No label"),
            ]
        );
    }

    #[test]
    fn test_invalid_indent_defaults_to_zero() {
        let content = "number,indent,text\n1,x,Bad\n2,,Missing\n3,-2,Negative\n4, 3 ,Spaced\n";
        let testpad = parse_testpad(content);
        let indents: Vec<usize> = testpad.steps.iter().map(|s| s.indent).collect();
        assert_eq!(indents, vec![0, 0, 0, 3]);
    }

    #[test]
    fn test_huge_indent_is_clamped() {
        let content = "number,indent,text\n1,9223372036854775807,Deep\n2,10000000000,Deeper\n3,99999999999999999999,Overflow\n";
        let testpad = parse_testpad(content);
        let indents: Vec<usize> = testpad.steps.iter().map(|s| s.indent).collect();
        assert_eq!(indents, vec![MAX_INDENT, MAX_INDENT, 0]);
    }

    #[test]
    fn test_step_text_keeps_quoted_commas() {
        let content = "number,indent,text\n1,0,\"Tap \"\"Save\"\", then wait\"\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.steps[0].text, "Tap \"Save\", then wait");
    }

    #[test]
    fn test_step_text_multiline_cell() {
        let content = "number,indent,text\n1,0,\"Check:\n- title\n- body\"\n2,0,Done\n";
        let testpad = parse_testpad(content);
        assert_eq!(testpad.steps.len(), 2);
        assert_eq!(testpad.steps[0].text, "Check:\n- title\n- body");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_testpad(""), ParsedTestpad::default());
    }

    #[test]
    fn test_step_order_preserved() {
        let content = "number,indent,text\n9,0,a\n1,0,b\n9,0,c\n";
        let testpad = parse_testpad(content);
        let labels: Vec<&str> = testpad.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(labels, vec!["9", "1", "9"]);
    }
}
