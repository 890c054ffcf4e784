//! testpad-core: Core library for testpad ingestion, classification and rendering
//!
//! Raw spreadsheet exports flow through:
//! records ([`csv::split_records`]) -> fields ([`csv::parse_csv_line`]) ->
//! script ([`parse_testpad`]) -> typed rows ([`classify_steps`]), which are
//! then rendered ([`linkify_multiline`]) or exported ([`build_export_template`]).

/// Core error types for testpad operations
pub mod error;

/// Configuration handling
pub mod config;

/// Core data types (ParsedTestpad, TestpadStep, ClassifiedRow, etc.)
pub mod types;

/// CSV record splitting and field parsing
pub mod csv;

/// Testpad script extraction
pub mod parser;

/// Step classification
pub mod classify;

/// Inline link rendering
pub mod linkify;

/// Spreadsheet export template
pub mod export;

/// Per-step results and the result store seam
pub mod results;

/// Resource content lookup
pub mod resource;

// Re-exports for convenience
pub use classify::{classify_step, classify_steps};
pub use config::{Config, TestpadConfig, find_project_root, find_project_root_from};
pub use csv::{parse_csv_line, split_records};
pub use error::TestpadError;
pub use export::build_export_template;
pub use linkify::{linkify_multiline, linkify_text, plain_text};
pub use parser::{MAX_INDENT, extract_testpad, parse_testpad};
pub use resource::{DirResourceSource, ResourceSource, is_valid_resource_id};
pub use results::{
    MemoryResultStore, ResultMap, ResultStore, ResultSummary, toggle_and_persist, toggle_result,
};
pub use types::{
    ClassifiedRow, ParsedTestpad, ResourceContent, ResourceKind, ResultValue, Segment, StepKind,
    TestpadStep,
};
