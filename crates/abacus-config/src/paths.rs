//! Where abacus looks for its TOML files

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "abacus.toml";
const LOCAL_FILE: &str = "abacus.local.toml";
const USER_FILE: &str = "config.toml";

/// Config file locations: one per user, two per project
pub struct Paths {
    dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            dirs: ProjectDirs::from("org", "Abacus", "abacus"),
        }
    }

    /// Per-user settings, e.g. `~/.config/abacus/config.toml` on Linux
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        let dirs = self.dirs.as_ref().ok_or_else(|| {
            ConfigError::XdgError("no home directory to place user settings in".to_string())
        })?;
        Ok(dirs.config_dir().join(USER_FILE))
    }

    /// Checked-in project settings
    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_FILE)
    }

    /// Per-checkout overrides that stay out of version control
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_FILE)
    }

    pub fn is_initialized(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).exists()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
