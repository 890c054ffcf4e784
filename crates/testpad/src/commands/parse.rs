//! Implementation of the `testpad parse` command

use testpad_core::{classify_steps, parse_testpad};

use crate::colors::{COLORS, paint};
use crate::output::{JsonIssue, JsonResponse, ParseData};
use crate::project::read_input_file;

use super::indented_text;

/// Width of the index, kind and label columns
const TEXT_COLUMN: usize = 24;

/// Run the parse command
pub fn run_parse(file: String, json_output: bool, quiet: bool) -> Result<i32, String> {
    let content = match read_input_file(&file) {
        Ok(c) => c,
        Err(e) => {
            let message = format!("{:#}", e);
            if json_output {
                let issues = vec![JsonIssue::error("E008", message).with_file(&file)];
                JsonResponse::error("parse", ParseData::default(), issues).print();
            } else {
                eprintln!("error: {}", message);
            }
            return Ok(2);
        }
    };

    let testpad = parse_testpad(&content);
    let rows = classify_steps(&testpad.steps);

    if json_output {
        JsonResponse::ok(
            "parse",
            ParseData {
                name: testpad.name,
                description: testpad.description,
                rows,
            },
        )
        .print();
        return Ok(0);
    }
    if quiet {
        return Ok(0);
    }

    println!("Name: {}", testpad.name);
    if !testpad.description.is_empty() {
        println!("Description:");
        for line in testpad.description.lines() {
            println!("  {}", line);
        }
    }
    println!();

    if rows.is_empty() {
        println!("No testpad content (no number,indent,text header found)");
        return Ok(0);
    }

    println!("{:>4}  {:<8}  {:<6}  TEXT", "#", "KIND", "STEP");
    for (index, row) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:<8}  {:<6}  {}",
            index,
            row.kind.as_str(),
            row.step,
            paint(&indented_text(row, TEXT_COLUMN), COLORS.for_kind(row.kind))
        );
    }

    Ok(0)
}
