//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/skilltree/skilltree.toml`
//! 3. Project config: `<project_dir>/.skilltree.toml`
//!
//! Relative paths are resolved against the project directory after loading.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::render::DEFAULT_NAME_WIDTH;
use crate::domain::{
    Markers, DEFAULT_END_MARKER, DEFAULT_FALLBACK_DESCRIPTION, DEFAULT_START_MARKER,
};
use crate::util::path::{expand_env_vars, PathExt};

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = ".skilltree.toml";

/// Unified configuration for skilltree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory whose markdown files are listed (default: references)
    pub references_dir: PathBuf,
    /// Document holding the tree markers (default: SKILL.md)
    pub document: PathBuf,
    /// Root line of the tree (default: references directory name plus `/`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// File extension to list, without the dot
    pub extension: String,
    /// Marker opening the replaceable region
    pub start_marker: String,
    /// Marker closing the replaceable region
    pub end_marker: String,
    /// Column the file name is padded to
    pub name_width: usize,
    /// Description used when a file has no blockquote or heading
    pub fallback_description: String,
    /// Directory relative paths were resolved against
    #[serde(skip)]
    pub project_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            references_dir: PathBuf::from("references"),
            document: PathBuf::from("SKILL.md"),
            label: None,
            extension: "md".into(),
            start_marker: DEFAULT_START_MARKER.into(),
            end_marker: DEFAULT_END_MARKER.into(),
            name_width: DEFAULT_NAME_WIDTH,
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.into(),
            project_dir: PathBuf::new(),
        }
    }
}

/// Get the XDG config directory for skilltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "skilltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("skilltree.toml"))
}

/// Get the path to the config file in a project directory.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_FILE)
}

impl Settings {
    /// Load settings with layered precedence for `project_dir`.
    pub fn load(project_dir: &Path) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "references_dir",
                defaults.references_dir.to_string_lossy().to_string(),
            )
            .map_err(config_err)?
            .set_default("document", defaults.document.to_string_lossy().to_string())
            .map_err(config_err)?
            .set_default("extension", defaults.extension.clone())
            .map_err(config_err)?
            .set_default("start_marker", defaults.start_marker.clone())
            .map_err(config_err)?
            .set_default("end_marker", defaults.end_marker.clone())
            .map_err(config_err)?
            .set_default("name_width", defaults.name_width as i64)
            .map_err(config_err)?
            .set_default(
                "fallback_description",
                defaults.fallback_description.clone(),
            )
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        let local_path = project_config_path(project_dir);
        if local_path.exists() {
            debug!("loading project config: {}", local_path.display());
            builder = builder.add_source(File::from(local_path).required(true));
        }

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.project_dir = project_dir.to_path_buf();
        settings.expand_paths();
        settings.resolve_paths();
        settings.normalize_extension();
        settings.validate()?;

        Ok(settings)
    }

    /// Markers delimiting the tree region.
    pub fn markers(&self) -> Markers {
        Markers::new(&self.start_marker, &self.end_marker)
    }

    /// Root line of the rendered tree.
    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            let name = self
                .references_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "references".to_string());
            format!("{name}/")
        })
    }

    /// Short name of the target document for messages.
    pub fn document_name(&self) -> String {
        self.document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.document.display().to_string())
    }

    /// `path` relative to the project directory, for messages.
    pub fn display_path(&self, path: &Path) -> String {
        path.relative_to(&self.project_dir)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Expand shell variables and tilde in path fields.
    fn expand_paths(&mut self) {
        self.references_dir =
            PathBuf::from(expand_env_vars(&self.references_dir.to_string_lossy()));
        self.document = PathBuf::from(expand_env_vars(&self.document.to_string_lossy()));
    }

    fn resolve_paths(&mut self) {
        if self.references_dir.is_relative() {
            self.references_dir = self.project_dir.join(&self.references_dir);
        }
        if self.document.is_relative() {
            self.document = self.project_dir.join(&self.document);
        }
    }

    fn normalize_extension(&mut self) {
        self.extension = self.extension.trim().trim_start_matches('.').to_string();
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.start_marker.is_empty() || self.end_marker.is_empty() {
            return Err(ApplicationError::Config {
                message: "tree markers must not be empty".into(),
            });
        }
        if self.start_marker == self.end_marker {
            return Err(ApplicationError::Config {
                message: format!(
                    "start and end marker must differ: {}",
                    self.start_marker
                ),
            });
        }
        if self.extension.is_empty() {
            return Err(ApplicationError::Config {
                message: "extension must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
