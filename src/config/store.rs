//! TOML persistence for the one process-wide configuration record.
//!
//! [`ConfigStore`] is constructed once at startup and handed to every
//! collaborator that needs settings access; there is no ambient global.
//! Load never fails the caller: a missing or unreadable record degrades to
//! defaults (and is re-persisted so the record always exists afterwards),
//! while save errors are propagated so a lost settings write stays visible
//! to the user.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{AppConfig, AppPaths};

// ---------------------------------------------------------------------------
// ConfigStore
// ---------------------------------------------------------------------------

/// Owns the settings-file location and the load/save/reset lifecycle.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store targeting the platform-appropriate `settings.toml`.
    pub fn new() -> Self {
        Self {
            path: AppPaths::new().settings_file,
        }
    }

    /// Store targeting an explicit path (useful for tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the persisted record.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the persisted record.
    ///
    /// First run (no file yet): the defaults are written out immediately so
    /// the record exists on disk after every load. A file that cannot be
    /// read or parsed also degrades to defaults, which are re-persisted;
    /// a hand-edited settings file must never block startup.
    pub fn load(&self) -> AppConfig {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "settings file {} is malformed ({e}); resetting to defaults",
                        self.path.display()
                    );
                    self.persist_defaults()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "no settings file at {}; creating defaults",
                    self.path.display()
                );
                self.persist_defaults()
            }
            Err(e) => {
                log::warn!(
                    "cannot read settings file {} ({e}); resetting to defaults",
                    self.path.display()
                );
                self.persist_defaults()
            }
        }
    }

    /// Validate and persist `config`, replacing the previous record.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Discard the current record, persist defaults and return them.
    pub fn reset_to_defaults(&self) -> Result<AppConfig> {
        let config = AppConfig::default();
        self.save(&config)?;
        Ok(config)
    }

    /// Write defaults, logging (not propagating) any failure. Used on the
    /// load path, which must not fail the caller.
    fn persist_defaults(&self) -> AppConfig {
        let config = AppConfig::default();
        if let Err(e) = self.save(&config) {
            log::warn!("could not persist default settings: {e:#}");
        }
        config
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in_temp() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let store = ConfigStore::at(dir.path().join("settings.toml"));
        (store, dir)
    }

    /// First load must return defaults AND leave a record on disk.
    #[test]
    fn first_load_creates_record() {
        let (store, _dir) = store_in_temp();
        assert!(!store.path().exists());

        let config = store.load();

        assert_eq!(config, AppConfig::default());
        assert!(store.path().exists());

        let written = std::fs::read_to_string(store.path()).expect("read");
        assert!(written.contains("min_words = 60"));
        assert!(written.contains("accuracy_threshold = 90"));
    }

    /// Verify that a modified record survives a save/load round trip.
    #[test]
    fn round_trip() {
        let (store, _dir) = store_in_temp();

        let mut config = AppConfig::default();
        config.min_words = 40;
        config.max_words = 90;
        config.spanish_required = 2;
        config.single_language_mode = true;
        config.accuracy_threshold = 75;
        config.emergency_password = "open sesame".into();
        config.english_quotes_path = "quotes/en.json".into();

        store.save(&config).expect("save");
        let loaded = store.load();

        assert_eq!(loaded, config);
    }

    /// A malformed record falls back to defaults and is rewritten in place.
    #[test]
    fn malformed_record_resets_to_defaults() {
        let (store, _dir) = store_in_temp();
        std::fs::write(store.path(), "min_words = \"sixty\"\n???").expect("write");

        let config = store.load();

        assert_eq!(config, AppConfig::default());
        // The broken file was replaced by a parseable one.
        let reloaded = store.load();
        assert_eq!(reloaded, AppConfig::default());
        assert!(std::fs::read_to_string(store.path())
            .expect("read")
            .contains("min_words = 60"));
    }

    /// Saving an invalid record must fail without touching the disk file.
    #[test]
    fn save_rejects_invalid_config() {
        let (store, _dir) = store_in_temp();
        store.save(&AppConfig::default()).expect("save defaults");

        let bad = AppConfig {
            accuracy_threshold: 0,
            ..AppConfig::default()
        };
        assert!(store.save(&bad).is_err());

        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn reset_overwrites_previous_record() {
        let (store, _dir) = store_in_temp();

        let mut config = AppConfig::default();
        config.emergency_password = "changed".into();
        store.save(&config).expect("save");

        let reset = store.reset_to_defaults().expect("reset");
        assert_eq!(reset, AppConfig::default());
        assert_eq!(store.load(), AppConfig::default());
    }
}
