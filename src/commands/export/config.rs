use std::path::PathBuf;

/// Label the exported pull requests must carry.
pub const LABEL: &str = "EuroHPC";

/// Pull request state passed to the listing query.
pub const STATE: &str = "closed";

/// Upper bound handed to `gh pr list --limit`; gh otherwise stops at 30.
pub const LIST_LIMIT: u32 = 1000;

const OUTPUT_DIR: &str = "patches";
const FILE_PREFIX: &str = "patch-";
const EXTENSION: &str = "diff";

/// Fixed parameters of an export run.
///
/// The binary always uses `ExportConfig::default()`; the fields are only
/// overridden in tests to redirect output into a scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub label: String,
    /// Created relative to the current working directory.
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            label: LABEL.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            file_prefix: FILE_PREFIX.to_string(),
            extension: EXTENSION.to_string(),
        }
    }
}

impl ExportConfig {
    /// Path of the patch file at the given output index.
    pub fn patch_path(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}{index}.{}", self.file_prefix, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_uses_fixed_values() {
        let config = ExportConfig::default();

        assert_eq!(config.label, "EuroHPC");
        assert_eq!(config.output_dir, PathBuf::from("patches"));
        assert_eq!(config.file_prefix, "patch-");
        assert_eq!(config.extension, "diff");
    }

    #[rstest]
    #[case::first(0, "patches/patch-0.diff")]
    #[case::second(1, "patches/patch-1.diff")]
    #[case::no_padding(12, "patches/patch-12.diff")]
    fn patch_path_encodes_index(#[case] index: usize, #[case] expected: &str) {
        let config = ExportConfig::default();
        assert_eq!(config.patch_path(index), PathBuf::from(expected));
    }
}
