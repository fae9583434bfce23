use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PlannerSettings;

const CONFIG_FILE: &str = "planner.toml";
const DATABASE_FILE: &str = "planner.db";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Ken24T", "StudyPlanner")
}

/// Reads and writes the planner's TOML configuration file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, or `planner.toml` in the
    /// working directory when no home directory can be resolved.
    pub fn default_location() -> Self {
        match project_dirs() {
            Some(dirs) => Self::new(dirs.config_dir().join(CONFIG_FILE)),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for config");
                Self::new(CONFIG_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields defaults.
    pub fn get(&self) -> Result<PlannerSettings> {
        if !self.path.exists() {
            return Ok(PlannerSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: PlannerSettings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Like [`get`](Self::get), but logs failures and falls back to defaults.
    pub fn load_or_default(&self) -> PlannerSettings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                PlannerSettings::default()
            }
        }
    }

    /// Update settings
    pub fn update(&self, settings: &PlannerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Where the planner database lives for `settings`.
pub fn resolve_database_path(settings: &PlannerSettings) -> PathBuf {
    if let Some(path) = &settings.database_path {
        return path.clone();
    }

    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DATABASE_FILE),
        None => {
            log::warn!("Unable to resolve project directory; using current dir for database");
            PathBuf::from(DATABASE_FILE)
        }
    }
}
