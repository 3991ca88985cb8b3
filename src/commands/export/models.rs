use std::path::PathBuf;

use serde::Deserialize;

/// A pull request number paired with its diff, held in memory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub number: u64,
    /// Raw `gh pr diff` output; diffs of non-UTF-8 files are not valid UTF-8.
    pub diff: Vec<u8>,
}

/// A diff persisted to disk, named by its position in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchFile {
    /// Zero-based position in the listing, unrelated to the PR number.
    pub index: usize,
    pub path: PathBuf,
    pub bytes: usize,
}

/// One entry of `gh pr list --json number`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PrRef {
    pub number: u64,
}
