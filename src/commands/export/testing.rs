//! Scripted `PullRequestSource` for exporter tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::error::{ExportError, Result};
use super::source::PullRequestSource;

/// Replays a fixed listing and fixed diffs, recording every call.
#[derive(Default)]
pub struct ScriptedSource {
    listing: Vec<u64>,
    listing_fails: bool,
    diffs: HashMap<u64, Vec<u8>>,
    failing_diffs: HashSet<u64>,
    pub list_calls: Cell<usize>,
    pub labels: RefCell<Vec<String>>,
    pub diff_calls: RefCell<Vec<u64>>,
}

impl ScriptedSource {
    /// Listing of `(number, diff)` pairs in the given order.
    pub fn new<'a>(items: impl IntoIterator<Item = (u64, &'a str)>) -> Self {
        Self::from_bytes(items.into_iter().map(|(number, diff)| (number, diff.as_bytes())))
    }

    pub fn from_bytes<'a>(items: impl IntoIterator<Item = (u64, &'a [u8])>) -> Self {
        let mut source = Self::default();
        for (number, diff) in items {
            source.listing.push(number);
            source.diffs.insert(number, diff.to_vec());
        }
        source
    }

    pub fn failing_listing() -> Self {
        Self {
            listing_fails: true,
            ..Self::default()
        }
    }

    pub fn fail_diff(mut self, number: u64) -> Self {
        self.failing_diffs.insert(number);
        self
    }
}

impl PullRequestSource for ScriptedSource {
    fn list_closed_labeled(&self, label: &str) -> Result<Vec<u64>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.labels.borrow_mut().push(label.to_string());
        if self.listing_fails {
            return Err(ExportError::ExternalTool {
                command: "gh pr list".to_string(),
                message: "not authenticated".to_string(),
            }
            .into());
        }
        Ok(self.listing.clone())
    }

    fn get_diff(&self, number: u64) -> Result<Vec<u8>> {
        self.diff_calls.borrow_mut().push(number);
        if self.failing_diffs.contains(&number) {
            return Err(ExportError::ExternalTool {
                command: format!("gh pr diff {number}"),
                message: "exit status: 1".to_string(),
            }
            .into());
        }
        Ok(self.diffs.get(&number).cloned().unwrap_or_default())
    }
}
