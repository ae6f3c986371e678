use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory, when the platform has one.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "Artisan", "ArtisanIntake")
            .map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }

    /// Load settings for startup: unreadable or invalid files fall back to the
    /// defaults, and a first run writes the defaults out for the user to edit.
    pub fn load_or_default(&self) -> Settings {
        let first_run = !self.path.exists();

        match self.get() {
            Ok(settings) => {
                if first_run {
                    if let Err(err) = self.update(&settings) {
                        log::warn!("Could not write default settings: {:#}", err);
                    }
                }
                settings
            }
            Err(err) => {
                log::warn!("{:#}; using default settings", err);
                Settings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(CONFIG_FILENAME));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup_test_service();

        let settings = service.get().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.artisan_name = "Lucien".to_string();
        settings.grid.end_hour = 18;

        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated.artisan_name, "Lucien");
        assert_eq!(updated.grid.end_hour, 18);
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = service.get().unwrap();
        settings.grid.slot_minutes = 25;

        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_test_service();

        let mut settings = Settings::default();
        settings.grid.day_count = 3;
        service.update(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_load_or_default_writes_first_run_file() {
        let (_dir, service) = setup_test_service();

        let settings = service.load_or_default();
        assert_eq!(settings, Settings::default());
        assert!(service.path().exists());
    }

    #[test]
    fn test_load_or_default_survives_corrupt_file() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "grid = \"not a table\"").unwrap();

        assert!(service.get().is_err());
        assert_eq!(service.load_or_default(), Settings::default());
    }

    #[test]
    fn test_invalid_grid_in_file_is_rejected() {
        let (_dir, service) = setup_test_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "[grid]\nstart_hour = 20\nend_hour = 8\n").unwrap();

        let err = service.get().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }
}
