//! Implementation of the `testpad show` command

use testpad_core::{
    ResourceKind, ResourceSource, ResultStore, ResultSummary, Segment, TestpadError,
    classify_steps, linkify_multiline, linkify_text, parse_testpad,
};

use crate::colors::{COLORS, paint};
use crate::output::{JsonResponse, ShowData, ShowRow, report_error};
use crate::project::Project;

use super::indented_text;

/// Width of the index, result and label columns
const TEXT_COLUMN: usize = 25;

/// Run the show command
pub fn run_show(
    resource: String,
    user: Option<String>,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let data = match build_show_data(&resource, user) {
        Ok(d) => d,
        Err(e) => return Ok(report_error("show", ShowData::default(), &e, json_output)),
    };

    if json_output {
        JsonResponse::ok("show", data).print();
    } else if !quiet {
        output_text(&data);
    }

    Ok(0)
}

/// Resolve the resource and merge in the user's stored results
fn build_show_data(resource_id: &str, user: Option<String>) -> Result<ShowData, TestpadError> {
    let project = Project::discover()?;
    let user = project.resolve_user(user)?;
    let resource = project.resources().resource_content(resource_id)?;

    let mut data = ShowData {
        resource: resource_id.to_string(),
        user: user.clone(),
        kind: Some(resource.kind),
        ..Default::default()
    };
    let content = resource.content.unwrap_or_default();

    match resource.kind {
        ResourceKind::Testpad => {
            let testpad = parse_testpad(&content);
            let rows = classify_steps(&testpad.steps);
            let results = project.open_store()?.stored_results(&user, resource_id)?;

            data.summary = Some(ResultSummary::from_rows(&rows, &results));
            data.name = testpad.name;
            data.description = testpad.description;
            data.rows = rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| ShowRow {
                    index,
                    result: results.get(&index).copied(),
                    row,
                })
                .collect();
        }
        ResourceKind::Markdown => {
            data.segments = linkify_multiline(content.trim_end());
        }
        ResourceKind::Video => {
            data.segments = linkify_text(content.trim());
        }
    }

    Ok(data)
}

/// Render segments for the terminal, links as `label <url>`
fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text { text } => text.clone(),
            Segment::Link { label, url, .. } if label == url => url.clone(),
            Segment::Link { label, url, .. } => format!("{} <{}>", label, url),
            Segment::Break => "\n".to_string(),
        })
        .collect()
}

fn output_text(data: &ShowData) {
    let Some(ResourceKind::Testpad) = data.kind else {
        println!("{}", render_segments(&data.segments));
        return;
    };

    if !data.name.is_empty() {
        println!("{}", data.name);
    }
    if !data.description.is_empty() {
        let rendered = render_segments(&linkify_multiline(&data.description));
        for line in rendered.lines() {
            println!("  {}", line);
        }
    }
    println!();

    if data.rows.is_empty() {
        println!("No testpad content");
        return;
    }

    for entry in &data.rows {
        let marker = match entry.result {
            Some(value) => paint(
                &format!("{:<7}", value.as_str().to_uppercase()),
                COLORS.for_result(value),
            ),
            None if entry.row.kind.is_gradable() => format!("{:<7}", "-"),
            None => format!("{:<7}", ""),
        };
        let text = render_segments(&linkify_multiline(&entry.row.text));
        let row = testpad_core::ClassifiedRow {
            text,
            ..entry.row.clone()
        };
        println!(
            "{:>4}  {}  {:<8}  {}",
            entry.index,
            marker,
            entry.row.step,
            paint(&indented_text(&row, TEXT_COLUMN), COLORS.for_kind(row.kind))
        );
    }

    if let Some(summary) = data.summary {
        println!();
        println!(
            "{}/{} tested: {} pass, {} fail, {} blocked, {} untested",
            summary.tested(),
            summary.total,
            summary.pass,
            summary.fail,
            summary.blocked,
            summary.untested
        );
    }
}
