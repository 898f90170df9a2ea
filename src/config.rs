use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the Radiance executables live and how relative inputs are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadianceConfig {
    /// Directory holding the Radiance binaries. Empty means "look up on `PATH`".
    #[serde(default)]
    pub radbin_path: PathBuf,
    /// Base directory for relative input paths during the existence check.
    /// `None` resolves them against the current working directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl RadianceConfig {
    pub fn new() -> Self {
        Self {
            radbin_path: PathBuf::new(),
            base_dir: None,
        }
    }

    pub fn with_radbin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.radbin_path = path.into();
        self
    }

    pub fn with_base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(path.into());
        self
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Full path to a Radiance program.
    pub fn executable(&self, program: &str) -> PathBuf {
        if self.radbin_path.as_os_str().is_empty() {
            PathBuf::from(program)
        } else {
            self.radbin_path.join(program)
        }
    }

    /// Resolves an input path for the existence check.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for RadianceConfig {
    fn default() -> Self {
        Self::new()
    }
}
