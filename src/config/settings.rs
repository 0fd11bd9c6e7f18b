//! Application settings struct, defaults, validation and the field
//! invariants the settings form relies on.
//!
//! `AppConfig` implements `Serialize`, `Deserialize`, `Default` and `Clone`
//! so it can be round-tripped through the TOML settings file and shared
//! across collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hotkey::parse_shortcut;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A violated configuration invariant, one variant per rule.
///
/// These are the same rules the settings form enforces before a save; they
/// live here so the form is a thin caller with no decision logic of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_words` must be a positive number.
    #[error("minimum words must be a positive number")]
    MinWordsNotPositive,

    /// `max_words` must be a positive number.
    #[error("maximum words must be a positive number")]
    MaxWordsNotPositive,

    /// `min_words` must be less than or equal to `max_words`.
    #[error("minimum words ({min}) must be less than or equal to maximum words ({max})")]
    WordBoundsInverted { min: u32, max: u32 },

    /// `accuracy_threshold` must be between 1 and 100.
    #[error("accuracy threshold must be between 1 and 100, got {0}")]
    AccuracyOutOfRange(u32),

    /// `max_pause_secs` must be at least 1.
    #[error("maximum pause must be at least 1 second")]
    PauseTooShort,

    /// `emergency_hotkey` is not a recognisable shortcut descriptor.
    #[error("emergency hotkey {0:?} is not a valid shortcut")]
    BadEmergencyHotkey(String),
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// There is exactly one persisted record; every save replaces it wholesale
/// (last writer wins). Load/save/reset live on
/// [`ConfigStore`](crate::config::ConfigStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Minimum passage length in words.
    pub min_words: u32,
    /// Maximum passage length in words.
    pub max_words: u32,
    /// English passages the user must complete per unlock.
    pub english_required: u32,
    /// Spanish passages the user must complete per unlock.
    pub spanish_required: u32,
    /// When `true`, practice sessions stay in one language.
    pub single_language_mode: bool,
    /// Recognition accuracy required to pass, in percent (1–100).
    pub accuracy_threshold: u32,
    /// Seconds of silence tolerated before the attempt is paused.
    pub max_pause_secs: u32,
    /// Password that bypasses the reading gate.
    pub emergency_password: String,
    /// Shortcut descriptor that opens the emergency prompt
    /// (e.g. `"Ctrl+Shift+U"`).
    pub emergency_hotkey: String,
    /// Path to the English quote file; relative paths are resolved against
    /// the candidate bases in [`crate::quotes::resolve`].
    pub english_quotes_path: String,
    /// Path to the Spanish quote file; resolved the same way.
    pub spanish_quotes_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_words: 60,
            max_words: 100,
            english_required: 1,
            spanish_required: 1,
            single_language_mode: false,
            accuracy_threshold: 90,
            max_pause_secs: 3,
            emergency_password: "unlock".into(),
            emergency_hotkey: "Ctrl+Shift+U".into(),
            english_quotes_path: "english_quotes.json".into(),
            spanish_quotes_path: "spanish_quotes.json".into(),
        }
    }
}

impl AppConfig {
    /// Check every field invariant, returning the first violation found.
    ///
    /// Checked in form order: word bounds, accuracy, pause, hotkey.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words == 0 {
            return Err(ConfigError::MinWordsNotPositive);
        }
        if self.max_words == 0 {
            return Err(ConfigError::MaxWordsNotPositive);
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::WordBoundsInverted {
                min: self.min_words,
                max: self.max_words,
            });
        }
        if !(1..=100).contains(&self.accuracy_threshold) {
            return Err(ConfigError::AccuracyOutOfRange(self.accuracy_threshold));
        }
        if self.max_pause_secs < 1 {
            return Err(ConfigError::PauseTooShort);
        }
        if parse_shortcut(&self.emergency_hotkey).is_none() {
            return Err(ConfigError::BadEmergencyHotkey(
                self.emergency_hotkey.clone(),
            ));
        }
        Ok(())
    }

    /// Path of the quote file configured for `language`.
    pub fn quotes_path(&self, language: crate::quotes::Language) -> &str {
        match language {
            crate::quotes::Language::English => &self.english_quotes_path,
            crate::quotes::Language::Spanish => &self.spanish_quotes_path,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify default values match the shipped first-run record.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.min_words, 60);
        assert_eq!(cfg.max_words, 100);
        assert_eq!(cfg.english_required, 1);
        assert_eq!(cfg.spanish_required, 1);
        assert!(!cfg.single_language_mode);
        assert_eq!(cfg.accuracy_threshold, 90);
        assert_eq!(cfg.max_pause_secs, 3);
        assert_eq!(cfg.emergency_password, "unlock");
        assert_eq!(cfg.emergency_hotkey, "Ctrl+Shift+U");
        assert_eq!(cfg.english_quotes_path, "english_quotes.json");
        assert_eq!(cfg.spanish_quotes_path, "spanish_quotes.json");
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AppConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_min_words_rejected() {
        let cfg = AppConfig {
            min_words: 0,
            ..AppConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::MinWordsNotPositive));
    }

    #[test]
    fn inverted_word_bounds_rejected() {
        let cfg = AppConfig {
            min_words: 120,
            max_words: 100,
            ..AppConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::WordBoundsInverted { min: 120, max: 100 })
        );
    }

    #[test]
    fn equal_word_bounds_accepted() {
        let cfg = AppConfig {
            min_words: 80,
            max_words: 80,
            ..AppConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn accuracy_bounds_enforced() {
        for bad in [0, 101, 250] {
            let cfg = AppConfig {
                accuracy_threshold: bad,
                ..AppConfig::default()
            };
            assert_eq!(cfg.validate(), Err(ConfigError::AccuracyOutOfRange(bad)));
        }
        for ok in [1, 90, 100] {
            let cfg = AppConfig {
                accuracy_threshold: ok,
                ..AppConfig::default()
            };
            assert_eq!(cfg.validate(), Ok(()));
        }
    }

    #[test]
    fn zero_pause_rejected() {
        let cfg = AppConfig {
            max_pause_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::PauseTooShort));
    }

    #[test]
    fn garbage_hotkey_rejected() {
        let cfg = AppConfig {
            emergency_hotkey: "Ctrl+Shift+".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadEmergencyHotkey(_))
        ));
    }
}
