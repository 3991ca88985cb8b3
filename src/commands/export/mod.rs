//! Export the diffs of closed, labeled pull requests as numbered patch files.
//!
//! A run has three strictly ordered phases: list the matching pull requests,
//! fetch every diff, then write them all under the output directory. Nothing
//! is written until every diff has been fetched.

mod config;
mod error;
mod models;
mod source;
mod storage;
#[cfg(test)]
mod testing;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use source::{GhCli, PullRequestSource};

use config::LIST_LIMIT;
use models::{PatchFile, WorkItem};

use std::io::IsTerminal;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

/// What a successful run wrote.
#[derive(Debug)]
pub struct ExportSummary {
    pub output_dir: PathBuf,
    pub patches: Vec<PatchFile>,
}

/// Run the export against `gh` with the fixed configuration and report the result.
pub fn run() -> Result<()> {
    let config = ExportConfig::default();
    let source = GhCli::new();
    let progress = fetch_progress_bar();

    let result = export_patches(&source, &config, &progress);
    progress.finish_and_clear();
    let summary = result?;

    for patch in &summary.patches {
        println!(
            "[{}] {} ({} bytes)",
            patch.index,
            patch.path.display(),
            patch.bytes
        );
    }
    println!(
        "Exported {} patch(es) for label \"{}\" into {}",
        summary.patches.len(),
        config.label,
        summary.output_dir.display()
    );
    Ok(())
}

fn fetch_progress_bar() -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(0);
    #[allow(clippy::expect_used)] // static template string
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} Fetching diffs [{bar:30}] {pos}/{len}")
            .expect("valid template")
            .progress_chars("=> "),
    );
    bar
}

/// List, fetch, then persist every matching pull request diff.
///
/// Fails before listing if the output directory already exists. A failed
/// fetch aborts the run before the output directory is created.
pub fn export_patches(
    source: &(impl PullRequestSource + ?Sized),
    config: &ExportConfig,
    progress: &ProgressBar,
) -> Result<ExportSummary> {
    storage::ensure_output_dir_absent(&config.output_dir)?;

    let numbers = source.list_closed_labeled(&config.label)?;
    info!(label = %config.label, count = numbers.len(), "listed pull requests");
    if listing_may_be_truncated(numbers.len()) {
        warn!(
            limit = LIST_LIMIT,
            "listing reached the limit; older pull requests may be missing"
        );
    }

    let items = fetch_diffs(source, &numbers, progress)?;

    let patches = storage::write_patches(config, &items)?;
    info!(
        count = patches.len(),
        dir = %config.output_dir.display(),
        "wrote patches"
    );

    Ok(ExportSummary {
        output_dir: config.output_dir.clone(),
        patches,
    })
}

/// `gh pr list` stops silently at `--limit`, so a full page may be incomplete.
fn listing_may_be_truncated(count: usize) -> bool {
    count >= LIST_LIMIT as usize
}

fn fetch_diffs(
    source: &(impl PullRequestSource + ?Sized),
    numbers: &[u64],
    progress: &ProgressBar,
) -> Result<Vec<WorkItem>> {
    progress.set_length(numbers.len() as u64);

    let mut items = Vec::with_capacity(numbers.len());
    for &number in numbers {
        let diff = source.get_diff(number)?;
        debug!(number, bytes = diff.len(), "fetched diff");
        items.push(WorkItem { number, diff });
        progress.inc(1);
    }
    Ok(items)
}
