//! User configuration
//!
//! Read from `gitpip.toml` in the working directory, or from the file named
//! by `--config` / `GITPIP_CONFIG`. Command-line options win over the file.
//!
//! ```toml
//! package_manager = "python3"      # preset or a full command line
//! assume_yes = true                # pass -y to uninstall
//! requirements_file = "requirements/base.txt"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "gitpip.toml";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Preset name (`pip`, `python3`, `uv`, ...) or a command line.
    pub package_manager: String,
    /// Answer yes to the uninstall confirmation.
    pub assume_yes: bool,
    /// Dependency file used by `requirement --write` and `requirements`.
    pub requirements_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_manager: "pip".to_string(),
            assume_yes: false,
            requirements_file: PathBuf::from("requirements.txt"),
        }
    }
}

impl Settings {
    /// Loads the explicit config file if one is given (it must exist), else
    /// `gitpip.toml` in `dir` when present, else the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file at {}", path.display()))
    }

    /// Applies command-line options on top of the file values.
    pub fn with_overrides(
        mut self,
        package_manager: Option<String>,
        assume_yes: bool,
        requirements_file: Option<PathBuf>,
    ) -> Self {
        if let Some(package_manager) = package_manager {
            self.package_manager = package_manager;
        }
        self.assume_yes |= assume_yes;
        if let Some(requirements_file) = requirements_file {
            self.requirements_file = requirements_file;
        }
        self
    }
}
