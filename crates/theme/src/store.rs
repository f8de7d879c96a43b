use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use snafu::ResultExt;

use crate::error::{
    CreateDirSnafu, RenameTempFileSnafu, SerializeSettingsSnafu, ThemeResult, WriteFileSnafu,
};
use crate::settings::ThemeSettings;

pub const THEME_DIRECTORY_NAME: &str = "nimbus";
pub const THEME_FILE_NAME: &str = "theme.json";

/// Snapshot store for the theme configuration.
///
/// Readers get a cheap `Arc` snapshot of the current settings; updates
/// persist to disk first and swap the snapshot only on success.
pub struct ThemeStore {
    settings: Arc<ArcSwap<ThemeSettings>>,
    config_path: PathBuf,
}

impl ThemeStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(THEME_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".nimbus"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(THEME_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_disk(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    /// Returns the current settings snapshot.
    pub fn settings(&self) -> Arc<ThemeSettings> {
        self.settings.load_full()
    }

    /// Persists `settings` and publishes the new snapshot.
    pub fn update(&self, settings: ThemeSettings) -> ThemeResult<()> {
        let normalized_settings = settings.normalized();
        self.persist(&normalized_settings)?;
        self.settings.store(Arc::new(normalized_settings));
        Ok(())
    }

    fn load_from_disk(path: &PathBuf) -> ThemeSettings {
        if !path.exists() {
            tracing::info!("theme file not found at {:?}, using defaults", path);
            return ThemeSettings::default();
        }

        let figment = Figment::from(Serialized::defaults(ThemeSettings::default()))
            .merge(Json::file(path));

        match figment.extract::<ThemeSettings>() {
            Ok(settings) => settings.normalized(),
            Err(error) => {
                tracing::warn!(
                    "failed to parse theme settings from {:?}: {}. using defaults",
                    path,
                    error
                );
                ThemeSettings::default()
            }
        }
    }

    fn persist(&self, settings: &ThemeSettings) -> ThemeResult<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirSnafu {
                stage: "create-theme-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let content = serde_json::to_string_pretty(settings).context(SerializeSettingsSnafu {
            stage: "serialize-theme-json",
        })?;

        let temp_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, content).context(WriteFileSnafu {
            stage: "write-temporary-theme-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.config_path).context(RenameTempFileSnafu {
            stage: "rename-temporary-theme-file",
            from: temp_path,
            to: self.config_path.clone(),
        })?;

        tracing::info!("saved theme settings to {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_THEME_NAME, ThemeDefinition, ThemePalette};

    fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join("theme.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(*store.settings(), ThemeSettings::default());
    }

    #[test]
    fn update_persists_and_a_fresh_store_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut settings = ThemeSettings::default();
        settings.themes.push(ThemeDefinition {
            name: "midnight".to_string(),
            palette: ThemePalette {
                primary: "#101418".to_string(),
                ..ThemePalette::default()
            },
        });
        settings.active_theme = "midnight".to_string();
        store.update(settings.clone()).unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(*reloaded.settings(), settings);
        assert_eq!(
            reloaded.settings().active_palette().unwrap().primary,
            "#101418"
        );
    }

    #[test]
    fn update_normalizes_before_publishing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut settings = ThemeSettings::default();
        settings.plugins = vec!["  daisyui  ".to_string(), String::new()];
        settings.active_theme = format!("  {DEFAULT_THEME_NAME}  ");
        store.update(settings).unwrap();

        assert_eq!(*store.settings(), ThemeSettings::default());
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = ThemeStore::new(path);

        assert_eq!(*store.settings(), ThemeSettings::default());
    }

    #[test]
    fn persist_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.update(ThemeSettings::default()).unwrap();

        assert!(dir.path().join("theme.json").exists());
        assert!(!dir.path().join("theme.json.tmp").exists());
    }
}
