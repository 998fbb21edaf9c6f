//! # valma-config
//!
//! Layered configuration loading for VALMAtrack tooling using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VALMA_*` prefix, `__` as separator)
//! 2. Project-level `.valma/config.toml`
//! 3. User-level `~/.config/valma/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VALMA_LAYOUT__STUDENTS_DIR` -> `layout.students_dir`,
//! `VALMA_REVERT__REMOVE_HELPERS` -> `revert.remove_helpers`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use valma_config::ValmaConfig;
//!
//! let config = ValmaConfig::load_with_dotenv().expect("config");
//! println!("students live in {}", config.layout.students_dir);
//! ```

mod branding;
mod error;
mod layout;
mod revert;

pub use branding::BrandingConfig;
pub use error::ConfigError;
pub use layout::LayoutConfig;
pub use revert::RevertConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".valma/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValmaConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub revert: RevertConfig,
}

impl ValmaConfig {
    /// Load configuration for the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration rooted at `project_root`.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain rooted at `project_root`.
    ///
    /// Public so tests can add providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VALMA_").split("__"))
    }

    /// Reject values the transforms cannot work with.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.students_dir.trim().is_empty() {
            return Err(invalid("layout.students_dir", "must not be empty"));
        }
        if self.layout.site_stylesheet.trim().is_empty() {
            return Err(invalid("layout.site_stylesheet", "must not be empty"));
        }
        if self.branding.title_prefix.trim().is_empty() {
            return Err(invalid("branding.title_prefix", "must not be empty"));
        }
        if let Some(helper) = self
            .revert
            .helpers
            .iter()
            .find(|helper| Path::new(helper).is_absolute() || helper.contains(".."))
        {
            return Err(invalid(
                "revert.helpers",
                &format!("'{helper}' must be a path inside the project"),
            ));
        }
        Ok(())
    }

    /// Resolve the students root against the project root.
    #[must_use]
    pub fn students_dir(&self, project_root: &Path) -> PathBuf {
        let dir = Path::new(&self.layout.students_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            project_root.join(dir)
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("valma").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
