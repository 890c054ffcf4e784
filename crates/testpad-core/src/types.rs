//! Core data types for testpad

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TestpadError;

/// A parsed testpad script
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParsedTestpad {
    /// Script name from the `Name` metadata row
    pub name: String,
    /// Script description, continuation lines joined with `\n`
    pub description: String,
    /// Step rows in source order
    pub steps: Vec<TestpadStep>,
}

/// One row of the `number,indent,text` step table
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TestpadStep {
    /// Label from column 0, verbatim (may be empty, not necessarily numeric)
    pub step: String,
    /// Nesting depth from column 1 (0 when missing or not an integer)
    pub indent: usize,
    /// Free-form text from column 2
    pub text: String,
}

impl TestpadStep {
    /// Create a step row
    pub fn new(step: impl Into<String>, indent: usize, text: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            indent,
            text: text.into(),
        }
    }
}

/// Semantic role of a step row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Introduces a deeper block of rows
    Category,
    /// Starts with `//` or `--`
    Comment,
    /// Actionable, individually gradable step
    Step,
}

impl StepKind {
    /// Lowercase name used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Category => "category",
            StepKind::Comment => "comment",
            StepKind::Step => "step",
        }
    }

    /// Whether rows of this kind can carry a pass/fail/blocked result
    pub fn is_gradable(&self) -> bool {
        matches!(self, StepKind::Step)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step row with its derived kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedRow {
    /// Label from column 0
    pub step: String,
    /// Nesting depth
    pub indent: usize,
    /// Row text
    pub text: String,
    /// Derived role
    pub kind: StepKind,
}

impl ClassifiedRow {
    /// Attach a kind to a step row
    pub fn new(step: &TestpadStep, kind: StepKind) -> Self {
        Self {
            step: step.step.clone(),
            indent: step.indent,
            text: step.text.clone(),
            kind,
        }
    }
}

/// Result a tester recorded for one step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultValue {
    Pass,
    Fail,
    Blocked,
}

impl ResultValue {
    /// Lowercase name used in storage and output
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultValue::Pass => "pass",
            ResultValue::Fail => "fail",
            ResultValue::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultValue {
    type Err = TestpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" => Ok(ResultValue::Pass),
            "fail" => Ok(ResultValue::Fail),
            "blocked" => Ok(ResultValue::Blocked),
            _ => Err(TestpadError::InvalidResult {
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of content a resource holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Markdown,
    Testpad,
    Video,
}

impl ResourceKind {
    /// Map a file extension to a resource kind
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" | "testpad" => Some(ResourceKind::Testpad),
            "md" | "markdown" => Some(ResourceKind::Markdown),
            "url" | "video" => Some(ResourceKind::Video),
            _ => None,
        }
    }

    /// Lowercase name used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Markdown => "markdown",
            ResourceKind::Testpad => "testpad",
            ResourceKind::Video => "video",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw content supplied by the resource store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceContent {
    /// What the content is
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Raw text, `None` when the resource is empty
    pub content: Option<String>,
}

/// A piece of rendered inline text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Plain text, verbatim
    Text { text: String },
    /// A link; `source` is the exact input text it was produced from
    Link {
        label: String,
        url: String,
        source: String,
    },
    /// Line break between two input lines
    Break,
}

impl Segment {
    /// Build a text segment
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    /// The input text this segment covers
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Text { text } => text,
            Segment::Link { source, .. } => source,
            Segment::Break => "\n",
        }
    }

    /// Whether this segment renders as a link
    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}
