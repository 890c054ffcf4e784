//! CSV dialect used by spreadsheet testpad exports
//!
//! Two stages:
//! - [`split_records`] turns raw text into logical records, keeping newlines
//!   that sit inside an open quoted field
//! - [`parse_csv_line`] turns one logical record into its fields, resolving
//!   quoting and `""` escapes
//!
//! Neither stage fails. A quote left open at the end of the input still
//! yields the partial record.

/// Split raw text into logical CSV records
///
/// Physical lines end in `\n` or `\r\n`. A line that starts while a quoted
/// field is still open is appended to the pending record with a `\n`
/// separator instead of starting a new record.
pub fn split_records(content: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut pending = String::new();
    let mut in_quotes = false;

    for line in content.lines() {
        if in_quotes {
            pending.push('\n');
            pending.push_str(line);
        } else {
            pending.clear();
            pending.push_str(line);
        }

        if count_boundary_quotes(line) % 2 == 1 {
            in_quotes = !in_quotes;
        }

        if !in_quotes {
            records.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        log::warn!(
            "unterminated quoted field at end of input; keeping partial record ({} bytes)",
            pending.len()
        );
        records.push(pending);
    }

    log::trace!("split {} logical records", records.len());
    records
}

/// Count quote characters that open or close a field
///
/// A doubled quote (`""`) is an escaped literal and does not count.
fn count_boundary_quotes(line: &str) -> usize {
    let mut count = 0;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        if chars.peek() == Some(&'"') {
            chars.next();
        } else {
            count += 1;
        }
    }
    count
}

/// Parse one logical record into fields
///
/// The last field is always pushed, so a record ending in a comma yields a
/// trailing empty field.
pub fn parse_csv_line(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_input() {
        assert!(split_records("").is_empty());
    }

    #[test]
    fn test_split_simple_lines() {
        let records = split_records("a,b\r\nc,d\ne,f\n");
        assert_eq!(records, vec!["a,b", "c,d", "e,f"]);
    }

    #[test]
    fn test_split_keeps_blank_lines_as_records() {
        let records = split_records("a\n\nb");
        assert_eq!(records, vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_multiline_quoted_record() {
        let records = split_records("x,\"line1\nline2\",y");
        assert_eq!(records, vec!["x,\"line1\nline2\",y"]);
    }

    #[test]
    fn test_split_multiline_spanning_three_lines() {
        let records = split_records("1,0,\"first\nsecond\nthird\"\n2,0,next");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "1,0,\"first\nsecond\nthird\"");
        assert_eq!(records[1], "2,0,next");
    }

    #[test]
    fn test_split_escaped_quotes_do_not_toggle() {
        let records = split_records("a,\"b\"\"c\",d\ne,f");
        assert_eq!(records, vec!["a,\"b\"\"c\",d", "e,f"]);
    }

    #[test]
    fn test_split_empty_quoted_field_does_not_toggle() {
        let records = split_records("a,\"\",b\nc");
        assert_eq!(records, vec!["a,\"\",b", "c"]);
    }

    #[test]
    fn test_split_dangling_quote_keeps_remainder() {
        let records = split_records("a,b\nc,\"open\nstill open");
        assert_eq!(records, vec!["a,b", "c,\"open\nstill open"]);
    }

    #[test]
    fn test_parse_plain_fields() {
        assert_eq!(parse_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_round_trip_without_special_chars() {
        let cases: &[&[&str]] = &[
            &["1", "0", "Open the app"],
            &["", "", ""],
            &["only"],
            &["a b", " padded ", "tab\there"],
        ];
        for fields in cases {
            let line = fields.join(",");
            assert_eq!(parse_csv_line(&line), fields.to_vec(), "line: {line:?}");
        }
    }

    #[test]
    fn test_parse_escaped_quote() {
        assert_eq!(parse_csv_line("a,\"b\"\"c\",d"), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_parse_quoted_comma_is_literal() {
        assert_eq!(
            parse_csv_line("1,0,\"Tap Save, then Back\""),
            vec!["1", "0", "Tap Save, then Back"]
        );
    }

    #[test]
    fn test_parse_trailing_comma_yields_empty_field() {
        assert_eq!(parse_csv_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn test_parse_multiline_record() {
        let records = split_records("x,\"line1\nline2\",y");
        assert_eq!(records.len(), 1);
        let fields = parse_csv_line(&records[0]);
        assert_eq!(fields, vec!["x", "line1\nline2", "y"]);
    }
}
