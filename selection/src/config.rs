use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::SelectError;

/// Selector settings, usually read from a small YAML file:
///
/// ```yaml
/// kernel_dir: /opt/kernels/tbe
/// require_binary: true
/// allow_format_transform: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Directory holding compiled kernel binaries
    pub kernel_dir:             Option<PathBuf>,
    /// Fail selection when the kernel binary is not on disk
    pub require_binary:         bool,
    /// Fall back to a same-dtype kernel whose layouts differ
    pub allow_format_transform: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            kernel_dir:             None,
            require_binary:         false,
            allow_format_transform: true,
        }
    }
}

impl SelectorConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SelectError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SelectError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SelectError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Where the binary for `binfile_name` is expected
    pub fn binary_path(&self, binfile_name: &str) -> PathBuf {
        match &self.kernel_dir {
            Some(dir) => dir.join(binfile_name),
            None => PathBuf::from(binfile_name),
        }
    }
}
