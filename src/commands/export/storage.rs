//! Output directory handling and patch file writes.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use super::config::ExportConfig;
use super::error::{ExportError, Result};
use super::models::{PatchFile, WorkItem};

/// Fail with `AlreadyExists` if anything is present at the output path.
pub fn ensure_output_dir_absent(dir: &Path) -> Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(_) => Err(ExportError::AlreadyExists(dir.to_path_buf()).into()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ExportError::Io {
            path: dir.to_path_buf(),
            source: e,
        }
        .into()),
    }
}

/// Create the output directory and write one file per item, in order.
pub fn write_patches(config: &ExportConfig, items: &[WorkItem]) -> Result<Vec<PatchFile>> {
    create_output_dir(&config.output_dir)?;
    write_patch_files(config, items)
}

/// Write one file per item into the existing output directory.
///
/// Stops at the first failure; files already written stay on disk.
fn write_patch_files(config: &ExportConfig, items: &[WorkItem]) -> Result<Vec<PatchFile>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| write_patch(config, index, item))
        .collect()
}

fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir(dir).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            ExportError::AlreadyExists(dir.to_path_buf())
        } else {
            ExportError::Io {
                path: dir.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

fn write_patch(config: &ExportConfig, index: usize, item: &WorkItem) -> Result<PatchFile> {
    let path = config.patch_path(index);
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(io_error)?;
    file.write_all(&item.diff).map_err(io_error)?;

    debug!(index, number = item.number, path = %path.display(), "wrote patch");
    Ok(PatchFile {
        index,
        bytes: item.diff.len(),
        path,
    })
}
