//! Implementation of the `testpad links` command

use std::io::Read;

use testpad_core::{Segment, linkify_multiline};

use crate::output::{JsonIssue, JsonResponse, LinksData};
use crate::project::read_input_file;

/// Run the links command
///
/// Reads `text`, else `file`, else stdin.
pub fn run_links(
    text: Option<String>,
    file: Option<String>,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let input = match (text, file) {
        (Some(text), _) => text,
        (None, Some(file)) => match read_input_file(&file) {
            Ok(c) => c,
            Err(e) => {
                let message = format!("{:#}", e);
                if json_output {
                    let issues = vec![JsonIssue::error("E008", message).with_file(&file)];
                    JsonResponse::error("links", LinksData::default(), issues).print();
                } else {
                    eprintln!("error: {}", message);
                }
                return Ok(2);
            }
        },
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            buf
        }
    };

    let segments = linkify_multiline(input.trim_end_matches(['\r', '\n']));

    if json_output {
        JsonResponse::ok("links", LinksData { segments }).print();
    } else if !quiet {
        for segment in &segments {
            println!("{}", describe_segment(segment));
        }
    }

    Ok(0)
}

/// One-line description of a segment
fn describe_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text { text } => format!("text   {:?}", text),
        Segment::Link { label, url, .. } if label == url => format!("link   {}", url),
        Segment::Link { label, url, .. } => format!("link   {} -> {}", label, url),
        Segment::Break => "break".to_string(),
    }
}
