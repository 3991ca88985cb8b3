use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{PullRequestSource, check_command_status};
use crate::commands::export::config::{LIST_LIMIT, STATE};
use crate::commands::export::error::{ExportError, Result};
use crate::commands::export::models::PrRef;

const GH: &str = "gh";

/// `PullRequestSource` backed by the GitHub CLI.
///
/// `gh` must already be installed and authenticated (`gh auth login`);
/// this adapter manages neither.
pub struct GhCli {
    program: OsString,
    base_args: Vec<OsString>,
}

impl GhCli {
    pub fn new() -> Self {
        Self::with_command(GH, Vec::<OsString>::new())
    }

    /// Run `program base_args... <gh arguments>` instead of plain `gh`.
    pub fn with_command(
        program: impl Into<OsString>,
        base_args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Self {
        Self {
            program: program.into(),
            base_args: base_args.into_iter().map(Into::into).collect(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let command = format!("{GH} {}", args.join(" "));
        debug!(%command, "running collaborator");

        let output = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                let message = if e.kind() == ErrorKind::NotFound {
                    format!(
                        "{} is not installed or not in PATH",
                        Path::new(&self.program).display()
                    )
                } else {
                    format!("failed to spawn: {e}")
                };
                ExportError::ExternalTool {
                    command: command.clone(),
                    message,
                }
            })?;

        check_command_status(&output, &command)?;
        Ok(output.stdout)
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PullRequestSource for GhCli {
    fn list_closed_labeled(&self, label: &str) -> Result<Vec<u64>> {
        let limit = LIST_LIMIT.to_string();
        let stdout = self.run(&[
            "pr", "list", "--label", label, "--state", STATE, "--json", "number", "--limit",
            limit.as_str(),
        ])?;
        parse_pr_list(&stdout)
    }

    fn get_diff(&self, number: u64) -> Result<Vec<u8>> {
        let number = number.to_string();
        self.run(&["pr", "diff", number.as_str(), "--color", "never"])
    }
}

/// Parse `gh pr list --json number` output into PR numbers, keeping order.
fn parse_pr_list(stdout: &[u8]) -> Result<Vec<u64>> {
    let prs: Vec<PrRef> = serde_json::from_slice(stdout).map_err(|e| ExportError::Parse {
        command: format!("{GH} pr list"),
        message: e.to_string(),
    })?;
    Ok(prs.into_iter().map(|pr| pr.number).collect())
}
