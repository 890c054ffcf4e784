//! Implementation of the `testpad mark` command

use testpad_core::{ResultStore, ResultValue, TestpadError, classify_steps, toggle_and_persist};

use crate::output::{JsonResponse, MarkData, report_error};
use crate::project::Project;

/// What the user asked to record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkAction {
    Toggle(ResultValue),
    Clear,
}

impl MarkAction {
    fn parse(value: &str) -> Result<Self, TestpadError> {
        if value.trim().eq_ignore_ascii_case("clear") {
            Ok(MarkAction::Clear)
        } else {
            value.parse().map(MarkAction::Toggle)
        }
    }
}

/// Run the mark command
pub fn run_mark(
    resource: String,
    step_index: usize,
    result: String,
    user: Option<String>,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let data = match mark_step(&resource, step_index, &result, user) {
        Ok(d) => d,
        Err(e) => return Ok(report_error("mark", MarkData::default(), &e, json_output)),
    };

    if json_output {
        JsonResponse::ok("mark", data).print();
    } else if !quiet {
        match data.result {
            Some(value) => println!("{} step {}: {}", data.resource, data.step_index, value),
            None => println!("{} step {}: cleared", data.resource, data.step_index),
        }
    }

    Ok(0)
}

/// Validate the target row, then toggle and persist its result
fn mark_step(
    resource_id: &str,
    step_index: usize,
    result: &str,
    user: Option<String>,
) -> Result<MarkData, TestpadError> {
    let action = MarkAction::parse(result)?;
    let project = Project::discover()?;
    let user = project.resolve_user(user)?;

    let testpad = project.load_testpad(resource_id)?;
    let rows = classify_steps(&testpad.steps);
    let row = rows.get(step_index).ok_or(TestpadError::StepOutOfRange {
        index: step_index,
        count: rows.len(),
    })?;
    if !row.kind.is_gradable() {
        return Err(TestpadError::NotGradable {
            index: step_index,
            kind: row.kind.to_string(),
        });
    }

    let mut store = project.open_store()?;
    let value = match action {
        MarkAction::Toggle(clicked) => {
            let mut results = store.stored_results(&user, resource_id)?;
            toggle_and_persist(
                &mut store,
                &mut results,
                &user,
                resource_id,
                step_index,
                clicked,
            )?
        }
        MarkAction::Clear => {
            store.set_result(&user, resource_id, step_index, None)?;
            None
        }
    };

    Ok(MarkData {
        resource: resource_id.to_string(),
        user,
        step_index,
        result: value,
    })
}
