//! The narrow synchronous API the window layer drives.
//!
//! [`ReadingEngine`] wires the configuration store, the quote repository and
//! passage selection into the five calls the UI needs: read settings, save
//! settings, reset settings, reload passages, next passage. The UI makes no
//! decisions of its own; validation, fallback and selection policy all live
//! below this facade.
//!
//! The engine is single-threaded and request/response: every call completes
//! synchronously against local disk or memory. Callers must not invoke
//! `reload_passages` (or a settings save, which reloads internally) from two
//! threads at once.

use anyhow::Result;
use rand::rngs::ThreadRng;

use crate::config::{AppConfig, ConfigStore};
use crate::quotes::{next_quote, Language, Quote, QuoteRepository};

// ---------------------------------------------------------------------------
// ReadingEngine
// ---------------------------------------------------------------------------

/// Facade over the quote provisioning and selection engine.
pub struct ReadingEngine {
    store: ConfigStore,
    config: AppConfig,
    repository: QuoteRepository,
    rng: ThreadRng,
    passages_shown: u32,
}

impl ReadingEngine {
    /// Build the engine against the platform settings location, loading the
    /// configuration (creating it on first run) and both quote collections.
    pub fn new() -> Self {
        Self::with_store(ConfigStore::new())
    }

    /// Build the engine against an explicit store (useful for tests).
    pub fn with_store(store: ConfigStore) -> Self {
        let config = store.load();
        let mut repository = QuoteRepository::new();
        repository.reload(&config);

        Self {
            store,
            config,
            repository,
            rng: rand::rng(),
            passages_shown: 0,
        }
    }

    /// The currently active configuration record.
    pub fn configuration(&self) -> &AppConfig {
        &self.config
    }

    /// Validate, persist and activate `config`.
    ///
    /// Quote collections are rebuilt when the configured paths changed.
    /// Persistence failures are returned so the UI can show them; unlike
    /// quote loading, a lost settings write must be visible.
    pub fn save_configuration(&mut self, config: AppConfig) -> Result<()> {
        self.store.save(&config)?;

        let paths_changed = config.english_quotes_path != self.config.english_quotes_path
            || config.spanish_quotes_path != self.config.spanish_quotes_path;
        self.config = config;
        if paths_changed {
            self.repository.reload(&self.config);
        }
        Ok(())
    }

    /// Replace the record with defaults, persist, and rebuild collections.
    pub fn reset_configuration(&mut self) -> Result<&AppConfig> {
        self.config = self.store.reset_to_defaults()?;
        self.repository.reload(&self.config);
        Ok(&self.config)
    }

    /// Rebuild both quote collections from the active configuration.
    pub fn reload_passages(&mut self) {
        self.repository.reload(&self.config);
    }

    /// Draw the next passage, or `None` when the chosen collection is empty.
    ///
    /// `preference = None` randomises the language 50/50 first. Successful
    /// draws bump the session counter.
    pub fn next_passage(&mut self, preference: Option<Language>) -> Option<Quote> {
        let quote = next_quote(&mut self.rng, &self.repository, preference).cloned();
        if quote.is_some() {
            self.passages_shown += 1;
        }
        quote
    }

    /// How many passages have been shown this session (display only).
    pub fn passages_shown(&self) -> u32 {
        self.passages_shown
    }

    /// Read-only view of the loaded collections (used by the debug report).
    pub fn repository(&self) -> &QuoteRepository {
        &self.repository
    }
}

impl Default for ReadingEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
