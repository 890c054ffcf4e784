//! Per-step results and the result store seam
//!
//! Results are keyed by the 0-based index of a step in the array produced by
//! the parser. Local state is an explicit [`ResultMap`]; persistence goes
//! through a [`ResultStore`] supplied by the caller.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::TestpadError;
use crate::types::{ClassifiedRow, ResultValue};

/// Results for one user and resource, by step index
pub type ResultMap = BTreeMap<usize, ResultValue>;

/// Persistence for per-step results
///
/// Implementations must give last-write-wins semantics per
/// `(user, resource, step_index)`. Writes to different steps are independent.
pub trait ResultStore {
    /// All stored results for a user and resource
    fn stored_results(&self, user_id: &str, resource_id: &str) -> Result<ResultMap, TestpadError>;

    /// Store a result, or delete it when `value` is `None`
    ///
    /// Deleting a missing result is not an error.
    fn set_result(
        &mut self,
        user_id: &str,
        resource_id: &str,
        step_index: usize,
        value: Option<ResultValue>,
    ) -> Result<(), TestpadError>;
}

/// In-memory result store
#[derive(Debug, Default)]
pub struct MemoryResultStore {
    results: HashMap<(String, String), ResultMap>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn stored_results(&self, user_id: &str, resource_id: &str) -> Result<ResultMap, TestpadError> {
        Ok(self
            .results
            .get(&(user_id.to_string(), resource_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn set_result(
        &mut self,
        user_id: &str,
        resource_id: &str,
        step_index: usize,
        value: Option<ResultValue>,
    ) -> Result<(), TestpadError> {
        let key = (user_id.to_string(), resource_id.to_string());
        match value {
            Some(value) => {
                self.results.entry(key).or_default().insert(step_index, value);
            }
            None => {
                if let Some(map) = self.results.get_mut(&key) {
                    map.remove(&step_index);
                    if map.is_empty() {
                        self.results.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Toggle a result in local state
///
/// Clicking the value a step already has clears it; any other value replaces
/// it. Returns the step's new value, which is what the caller persists.
pub fn toggle_result(
    results: &mut ResultMap,
    step_index: usize,
    clicked: ResultValue,
) -> Option<ResultValue> {
    if results.get(&step_index) == Some(&clicked) {
        results.remove(&step_index);
        None
    } else {
        results.insert(step_index, clicked);
        Some(clicked)
    }
}

/// Toggle locally, then persist the new value
///
/// Local state is updated first and is not rolled back if the store fails;
/// the error is returned so the caller can report it.
pub fn toggle_and_persist<S: ResultStore + ?Sized>(
    store: &mut S,
    results: &mut ResultMap,
    user_id: &str,
    resource_id: &str,
    step_index: usize,
    clicked: ResultValue,
) -> Result<Option<ResultValue>, TestpadError> {
    let value = toggle_result(results, step_index, clicked);
    if let Err(e) = store.set_result(user_id, resource_id, step_index, value) {
        log::warn!(
            "failed to persist result for {}/{} step {}: {}",
            user_id,
            resource_id,
            step_index,
            e
        );
        return Err(e);
    }
    Ok(value)
}

/// Progress over the gradable rows of a testpad
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSummary {
    pub pass: usize,
    pub fail: usize,
    pub blocked: usize,
    pub untested: usize,
    /// Number of rows of kind `step`
    pub total: usize,
}

impl ResultSummary {
    /// Summarize results over classified rows
    ///
    /// Categories and comments never count, even if a result is stored at
    /// their index.
    pub fn from_rows(rows: &[ClassifiedRow], results: &ResultMap) -> Self {
        let mut summary = Self::default();
        for (index, row) in rows.iter().enumerate() {
            if !row.kind.is_gradable() {
                continue;
            }
            summary.total += 1;
            match results.get(&index) {
                Some(ResultValue::Pass) => summary.pass += 1,
                Some(ResultValue::Fail) => summary.fail += 1,
                Some(ResultValue::Blocked) => summary.blocked += 1,
                None => summary.untested += 1,
            }
        }
        summary
    }

    /// Number of steps with any result
    pub fn tested(&self) -> usize {
        self.pass + self.fail + self.blocked
    }
}
