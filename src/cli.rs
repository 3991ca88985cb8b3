use clap::Parser;

/// Export the diffs of closed "EuroHPC" pull requests to numbered patch files.
///
/// Requires an installed and authenticated GitHub CLI (`gh`). Patches are
/// written to ./patches, which must not exist yet.
#[derive(Parser)]
#[command(name = "patch-export", version)]
pub struct Cli {}
