//! Implementation of the `testpad list` command

use crate::output::{JsonResponse, ListData, ResourceSummary, report_error};
use crate::project::Project;

/// Run the list command
pub fn run_list(json_output: bool, quiet: bool) -> Result<i32, String> {
    let project = match Project::discover() {
        Ok(p) => p,
        Err(e) => return Ok(report_error("list", ListData::default(), &e, json_output)),
    };

    let resources = match project.resources().list_resources() {
        Ok(r) => r,
        Err(e) => return Ok(report_error("list", ListData::default(), &e, json_output)),
    };

    let resources: Vec<ResourceSummary> = resources
        .into_iter()
        .map(|(id, kind)| ResourceSummary { id, kind })
        .collect();

    if json_output {
        JsonResponse::ok("list", ListData { resources }).print();
    } else if !quiet {
        if resources.is_empty() {
            println!("No resources found");
        } else {
            output_table(&resources);
        }
    }

    Ok(0)
}

/// Output a formatted table
fn output_table(resources: &[ResourceSummary]) {
    let id_width = resources
        .iter()
        .map(|r| r.id.len())
        .max()
        .unwrap_or(8)
        .max(8);

    println!("{:<id_width$}  TYPE", "RESOURCE", id_width = id_width);
    for resource in resources {
        println!(
            "{:<id_width$}  {}",
            resource.id,
            resource.kind,
            id_width = id_width
        );
    }
}
