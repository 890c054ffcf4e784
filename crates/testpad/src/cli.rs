//! CLI argument parsing with clap derive

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Testpad - Run scripted beta-test procedures exported from spreadsheets
#[derive(Parser)]
#[command(name = "testpad")]
#[command(version = VERSION)]
#[command(about = "Run scripted beta-test procedures exported from spreadsheets")]
#[command(long_about = "Testpad reads test scripts exported from spreadsheets, classifies their rows into categories, comments and gradable steps, and tracks per-step pass/fail/blocked results.\n\nLogging is controlled by RUST_LOG (default: warn).")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a testpad project in current directory
    ///
    /// Creates .testpad/ with a config file and an empty resources directory.
    #[command(long_about = "Initialize a testpad project in current directory.\n\nCreates:\n  .testpad/config.toml   Project configuration\n  .testpad/resources/    Resource files (<id>.csv, <id>.md, <id>.url)")]
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Parse a testpad export file and show its classified rows
    #[command(long_about = "Parse a testpad export file and show its classified rows.\n\nDisplays the script name, description, and each row with its index, kind (category, comment, step), label and indented text.")]
    Parse {
        /// Exported CSV file
        file: String,
    },

    /// Print a blank tab-separated template for offline runs
    #[command(long_about = "Print a blank tab-separated template for offline runs.\n\nColumns: Step, Text, Pass, Fail, Blocked. Paste the output into a spreadsheet.")]
    Export {
        /// Exported CSV file
        file: String,
    },

    /// Show the link segments found in text
    Links {
        /// Text to scan (reads --file when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
    },

    /// List resources in the project
    List,

    /// Show a resource with stored results and progress
    Show {
        /// Resource id
        resource: String,

        /// User whose results to show (defaults to config default_user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Toggle a result on one step
    ///
    /// Marking a step with the result it already has clears it.
    #[command(long_about = "Toggle a result on one step.\n\nSTEP_INDEX is the 0-based row index shown by `testpad show`.\nMarking a step with the result it already has clears it; `clear` always clears.")]
    Mark {
        /// Resource id
        resource: String,

        /// 0-based step index
        step_index: usize,

        /// pass, fail, blocked, or clear
        result: String,

        /// User recording the result (defaults to config default_user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Print stored results for a resource
    Results {
        /// Resource id
        resource: String,

        /// User whose results to print (defaults to config default_user)
        #[arg(long)]
        user: Option<String>,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mark_args() {
        let cli = Cli::try_parse_from(["testpad", "mark", "login", "3", "pass", "--user", "u1"])
            .unwrap();
        match cli.command {
            Some(Commands::Mark {
                resource,
                step_index,
                result,
                user,
            }) => {
                assert_eq!(resource, "login");
                assert_eq!(step_index, 3);
                assert_eq!(result, "pass");
                assert_eq!(user.as_deref(), Some("u1"));
            }
            _ => panic!("expected mark command"),
        }
    }

    #[test]
    fn test_links_text_and_file_conflict() {
        let result = Cli::try_parse_from(["testpad", "links", "hi", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["testpad", "parse", "a.csv", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }
}
