//! Error types for testpad operations

use thiserror::Error;

/// Core error type for testpad operations
///
/// Parsing never produces one of these: malformed spreadsheet exports degrade
/// to fewer structured rows instead. Errors come from the collaborators around
/// the pipeline (resources, stored results, configuration).
#[derive(Error, Debug)]
pub enum TestpadError {
    // === Project errors (E001-E002) ===
    /// E001: .testpad directory not initialized
    #[error("E001: .testpad directory not initialized")]
    NotInitialized,

    /// E002: Configuration file could not be read or parsed
    #[error("E002: configuration error: {0}")]
    Config(String),

    // === Resource errors (E003-E005) ===
    /// E003: No resource with the given id
    #[error("E003: resource not found: {id}")]
    ResourceNotFound { id: String },

    /// E004: Resource exists but is not the kind the operation needs
    #[error("E004: resource {id} is a {kind} resource, expected {expected}")]
    UnsupportedResource {
        id: String,
        kind: String,
        expected: String,
    },

    /// E005: Resource has no content
    #[error("E005: resource {id} has no content")]
    EmptyContent { id: String },

    // === Result errors (E006-E007, E010) ===
    /// E006: Step index does not address a parsed step
    #[error("E006: step index {index} out of range (resource has {count} steps)")]
    StepOutOfRange { index: usize, count: usize },

    /// E007: Unrecognized result value
    #[error("E007: invalid result value: {value} (must be pass/fail/blocked)")]
    InvalidResult { value: String },

    /// E010: Step index addresses a category or comment row
    #[error("E010: row {index} is a {kind}, only steps take results")]
    NotGradable { index: usize, kind: String },

    // === IO and system errors ===
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Result store adapter failure
    #[error("result store error: {0}")]
    Store(String),
}

impl TestpadError {
    /// Get the error code (e.g., "E001", "E002")
    pub fn code(&self) -> &'static str {
        match self {
            TestpadError::NotInitialized => "E001",
            TestpadError::Config(_) => "E002",
            TestpadError::ResourceNotFound { .. } => "E003",
            TestpadError::UnsupportedResource { .. } => "E004",
            TestpadError::EmptyContent { .. } => "E005",
            TestpadError::StepOutOfRange { .. } => "E006",
            TestpadError::InvalidResult { .. } => "E007",
            TestpadError::Io(_) => "E008",
            TestpadError::Store(_) => "E009",
            TestpadError::NotGradable { .. } => "E010",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            TestpadError::NotInitialized => 9,

            TestpadError::Config(_) => 4,

            TestpadError::ResourceNotFound { .. } | TestpadError::Io(_) => 2, // File errors

            TestpadError::UnsupportedResource { .. }
            | TestpadError::EmptyContent { .. }
            | TestpadError::StepOutOfRange { .. }
            | TestpadError::InvalidResult { .. }
            | TestpadError::NotGradable { .. } => 1, // Usage errors

            TestpadError::Store(_) => 3,
        }
    }
}
