mod gh;

pub use gh::GhCli;

use std::process::Output;

use super::error::{ExportError, Result};

/// Read access to the pull request tracker.
///
/// The exporter only ever talks to the tracker through this trait, so the
/// `gh` subprocess adapter can be swapped for a scripted source in tests.
pub trait PullRequestSource {
    /// Numbers of closed pull requests carrying `label`, in listing order.
    fn list_closed_labeled(&self, label: &str) -> Result<Vec<u64>>;

    /// Unified diff of pull request `number`, byte for byte.
    fn get_diff(&self, number: u64) -> Result<Vec<u8>>;
}

/// Check command output status and return error if failed.
pub(super) fn check_command_status(output: &Output, command: &str) -> Result<()> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::ExternalTool {
            command: command.to_string(),
            message: format!("{}: {}", output.status, stderr.trim()),
        }
        .into());
    }
    Ok(())
}
