//! Implementation of the `testpad results` command

use testpad_core::{ResultStore, TestpadError, is_valid_resource_id};

use crate::colors::{COLORS, paint};
use crate::output::{JsonResponse, ResultsData, StoredResultEntry, report_error};
use crate::project::Project;

/// Run the results command
pub fn run_results(
    resource: String,
    user: Option<String>,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let data = match load_results(&resource, user) {
        Ok(d) => d,
        Err(e) => return Ok(report_error("results", ResultsData::default(), &e, json_output)),
    };

    if json_output {
        JsonResponse::ok("results", data).print();
    } else if !quiet {
        if data.results.is_empty() {
            println!("No stored results for {} ({})", data.resource, data.user);
        } else {
            println!("{:>5}  RESULT", "STEP");
            for entry in &data.results {
                println!(
                    "{:>5}  {}",
                    entry.step_index,
                    paint(entry.result.as_str(), COLORS.for_result(entry.result))
                );
            }
        }
    }

    Ok(0)
}

/// Read stored results straight from the store
///
/// The resource file need not exist; results outlive the content they were
/// recorded against.
fn load_results(resource_id: &str, user: Option<String>) -> Result<ResultsData, TestpadError> {
    if !is_valid_resource_id(resource_id) {
        return Err(TestpadError::ResourceNotFound {
            id: resource_id.to_string(),
        });
    }
    let project = Project::discover()?;
    let user = project.resolve_user(user)?;
    let results = project.open_store()?.stored_results(&user, resource_id)?;

    Ok(ResultsData {
        resource: resource_id.to_string(),
        user,
        results: results
            .into_iter()
            .map(|(step_index, result)| StoredResultEntry { step_index, result })
            .collect(),
    })
}
