//! JSON output formatting

use serde::{Deserialize, Serialize};
use testpad_core::{ClassifiedRow, ResourceKind, ResultSummary, ResultValue, Segment, TestpadError};

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors and warnings
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Print the response as pretty JSON on stdout
    pub fn print(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: failed to serialize response: {}", e),
        }
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error code (e.g., "E003")
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
    /// Resource id or file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonIssue {
    /// Error-severity issue
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: "error".to_string(),
            message: message.into(),
            file: None,
        }
    }

    /// Set the file path
    pub fn with_file(mut self, file: &str) -> Self {
        self.file = Some(file.to_string());
        self
    }
}

impl From<&TestpadError> for JsonIssue {
    fn from(err: &TestpadError) -> Self {
        Self::error(err.code(), err.to_string())
    }
}

/// Report an error in the selected output mode and return its exit code
pub fn report_error<T: Serialize>(
    command: &str,
    empty: T,
    err: &TestpadError,
    json_output: bool,
) -> i32 {
    if json_output {
        JsonResponse::error(command, empty, vec![JsonIssue::from(err)]).print();
    } else {
        eprintln!("error: {}", err);
    }
    err.exit_code()
}

/// Data payload for init command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitData {
    /// Path to the created directory
    pub path: String,
    /// Files created
    pub files_created: Vec<String>,
}

/// Data payload for parse command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseData {
    pub name: String,
    pub description: String,
    pub rows: Vec<ClassifiedRow>,
}

/// Data payload for export command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportData {
    /// Tab-separated template
    pub template: String,
}

/// Data payload for links command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksData {
    pub segments: Vec<Segment>,
}

/// Data payload for list command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListData {
    pub resources: Vec<ResourceSummary>,
}

/// One resource in list output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// A row with its index and stored result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowRow {
    pub index: usize,
    #[serde(flatten)]
    pub row: ClassifiedRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultValue>,
}

/// Data payload for show command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowData {
    pub resource: String,
    pub user: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceKind>,
    pub name: String,
    pub description: String,
    pub rows: Vec<ShowRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ResultSummary>,
    /// Rendered segments for markdown and video resources
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

/// Data payload for mark command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkData {
    pub resource: String,
    pub user: String,
    pub step_index: usize,
    /// New value, `null` when cleared
    pub result: Option<ResultValue>,
}

/// One stored result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResultEntry {
    pub step_index: usize,
    pub result: ResultValue,
}

/// Data payload for results command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsData {
    pub resource: String,
    pub user: String,
    pub results: Vec<StoredResultEntry>,
}
