//! testpad CLI - Run scripted beta-test procedures exported from spreadsheets

mod cli;
mod colors;
mod commands;
mod output;
mod project;
mod store;

use std::process::ExitCode;

use cli::Commands;

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(Commands::Init { force }) => commands::run_init(force, cli.json, cli.quiet),
        Some(Commands::Parse { file }) => commands::run_parse(file, cli.json, cli.quiet),
        Some(Commands::Export { file }) => commands::run_export(file, cli.json, cli.quiet),
        Some(Commands::Links { text, file }) => {
            commands::run_links(text, file, cli.json, cli.quiet)
        }
        Some(Commands::List) => commands::run_list(cli.json, cli.quiet),
        Some(Commands::Show { resource, user }) => {
            commands::run_show(resource, user, cli.json, cli.quiet)
        }
        Some(Commands::Mark {
            resource,
            step_index,
            result,
            user,
        }) => commands::run_mark(resource, step_index, result, user, cli.json, cli.quiet),
        Some(Commands::Results { resource, user }) => {
            commands::run_results(resource, user, cli.json, cli.quiet)
        }
        None => {
            // No subcommand - print version info
            if !cli.quiet {
                println!("testpad v{}", env!("CARGO_PKG_VERSION"));
                println!("Use --help for usage information");
            }
            Ok(0)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Initialize env_logger; RUST_LOG overrides the flag-derived default
fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
