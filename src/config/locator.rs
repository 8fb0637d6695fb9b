// SPDX-License-Identifier: GPL-3.0-only

//! Location of the default user key file.
//!
//! The default file lives in the platform configuration directory:
//! - Linux: `~/.config/extra-keys/eks/default.json`
//! - macOS: `~/Library/Application Support/extra-keys/eks/default.json`
//! - Windows: `%AppData%\extra-keys\config\eks\default.json`

use crate::app_settings;
use crate::config::types::ConfigError;
use std::path::PathBuf;

/// Source of the default user key file.
pub trait ConfigLocator {
    /// Returns the default file, or `None` when no location is available.
    fn default_file(&self) -> Option<PathBuf>;

    /// Like [`default_file`](Self::default_file), but a missing location is
    /// reported as [`ConfigError::NoDefaultLocation`].
    fn locate(&self) -> Result<PathBuf, ConfigError> {
        self.default_file().ok_or(ConfigError::NoDefaultLocation)
    }
}

/// Resolves the default file inside the platform configuration directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocator;

impl ConfigLocator for DefaultLocator {
    fn default_file(&self) -> Option<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", app_settings::APP_NAME)?;
        Some(
            proj_dirs
                .config_dir()
                .join(app_settings::CONFIG_SUBDIR)
                .join(app_settings::DEFAULT_CONFIG_FILE),
        )
    }
}

/// Always points at the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocator(pub PathBuf);

impl ConfigLocator for FixedLocator {
    fn default_file(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Never finds a file. Panels built with it only show builtin keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

impl ConfigLocator for NoLocator {
    fn default_file(&self) -> Option<PathBuf> {
        None
    }
}
