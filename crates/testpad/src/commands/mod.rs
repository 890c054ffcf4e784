//! CLI command implementations

pub mod export;
pub mod init;
pub mod links;
pub mod list;
pub mod mark;
pub mod parse;
pub mod results;
pub mod show;

pub use export::run_export;
pub use init::run_init;
pub use links::run_links;
pub use list::run_list;
pub use mark::run_mark;
pub use parse::run_parse;
pub use results::run_results;
pub use show::run_show;

use testpad_core::{ClassifiedRow, MAX_INDENT};

/// Indent a row's text for terminal display
///
/// Continuation lines of a multi-line cell line up under the first line,
/// `column` characters in.
pub(crate) fn indented_text(row: &ClassifiedRow, column: usize) -> String {
    let pad = "  ".repeat(row.indent.min(MAX_INDENT));
    row.text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", pad, line)
            } else {
                format!("\n{:column$}{}{}", "", pad, line)
            }
        })
        .collect()
}
