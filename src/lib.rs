//! Read-to-Unlock quote provisioning and selection engine.
//!
//! The desktop app gates an action behind reading a randomly selected
//! passage aloud. This crate is the part with decisions in it: finding and
//! loading the per-language quote files, degrading gracefully when they are
//! missing or hand-mangled, and serving passages to the window layer. The
//! windows themselves (menus, settings form, debug view) live in the UI
//! crate and only ever call through [`ReadingEngine`].
//!
//! # Startup sequence
//!
//! 1. Initialise logging ([`init_logging`]).
//! 2. Build a [`ReadingEngine`]: loads `settings.toml` (creating it with
//!    defaults on first run) and both quote collections, substituting
//!    built-in passages where no quote file is found.
//! 3. The UI calls [`ReadingEngine::next_passage`] per practice round and
//!    the settings form round-trips records through
//!    [`ReadingEngine::save_configuration`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use read_to_unlock::{Language, ReadingEngine};
//!
//! read_to_unlock::init_logging();
//!
//! let mut engine = ReadingEngine::new();
//! if let Some(passage) = engine.next_passage(Some(Language::English)) {
//!     println!("{} — {}", passage.text, passage.author);
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod hotkey;
pub mod quotes;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use config::{AppConfig, ConfigError, ConfigStore};
pub use engine::ReadingEngine;
pub use quotes::{Language, Quote, QuoteRepository};

/// Initialise `env_logger` with an `info` default. Call once at startup,
/// before constructing the engine.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
