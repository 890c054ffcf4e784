//! Implementation of the `testpad init` command

use std::fs;
use std::path::Path;

use testpad_core::config::{CONFIG_FILE, PROJECT_DIR};

use crate::output::{InitData, JsonIssue, JsonResponse};

/// Default config.toml content
const DEFAULT_CONFIG: &str = r#"[testpad]
# Directory holding resources, relative to .testpad/
# Files are named <id>.csv (testpad), <id>.md (markdown) or <id>.url (video)
resources_dir = "resources"

# SQLite database for per-step results, relative to .testpad/
database = "results.db"

# User id used when --user is not given
# default_user = "tester"
"#;

/// Run the init command
pub fn run_init(force: bool, json_output: bool, quiet: bool) -> Result<i32, String> {
    let testpad_dir = Path::new(PROJECT_DIR);
    let config_path = testpad_dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        let message = ".testpad directory already exists (use --force to overwrite)".to_string();
        if json_output {
            let issues = vec![JsonIssue::error("E001", message.clone())];
            JsonResponse::error("init", InitData::default(), issues).print();
        } else {
            eprintln!("error: {}", message);
        }
        return Ok(1);
    }

    let resources_dir = testpad_dir.join("resources");
    fs::create_dir_all(&resources_dir)
        .map_err(|e| format!("failed to create {}: {}", resources_dir.display(), e))?;
    fs::write(&config_path, DEFAULT_CONFIG)
        .map_err(|e| format!("failed to write {}: {}", config_path.display(), e))?;
    log::debug!("initialized project at {}", testpad_dir.display());

    let files_created = vec![
        format!("{}/{}", PROJECT_DIR, CONFIG_FILE),
        format!("{}/resources/", PROJECT_DIR),
    ];

    if json_output {
        JsonResponse::ok(
            "init",
            InitData {
                path: format!("{}/", PROJECT_DIR),
                files_created,
            },
        )
        .print();
    } else if !quiet {
        println!("Initialized testpad project in {}/", PROJECT_DIR);
        for file in &files_created {
            println!("  created {}", file);
        }
    }

    Ok(0)
}
