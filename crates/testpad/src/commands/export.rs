//! Implementation of the `testpad export` command

use testpad_core::{build_export_template, classify_steps, parse_testpad};

use crate::output::{ExportData, JsonIssue, JsonResponse};
use crate::project::read_input_file;

/// Run the export command
pub fn run_export(file: String, json_output: bool, quiet: bool) -> Result<i32, String> {
    let content = match read_input_file(&file) {
        Ok(c) => c,
        Err(e) => {
            let message = format!("{:#}", e);
            if json_output {
                let issues = vec![JsonIssue::error("E008", message).with_file(&file)];
                JsonResponse::error("export", ExportData::default(), issues).print();
            } else {
                eprintln!("error: {}", message);
            }
            return Ok(2);
        }
    };

    let testpad = parse_testpad(&content);
    let rows = classify_steps(&testpad.steps);
    if rows.is_empty() {
        log::warn!("{} has no step rows; exporting header only", file);
    }
    let template = build_export_template(&rows);

    if json_output {
        JsonResponse::ok("export", ExportData { template }).print();
    } else if !quiet {
        println!("{}", template);
    }

    Ok(0)
}
