//! Configuration module for Read-to-Unlock.
//!
//! Provides `AppConfig` (the user-adjustable settings record), `ConfigError`
//! (its field invariants), `AppPaths` for cross-platform data directories,
//! and TOML persistence via `ConfigStore`.

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::AppPaths;
pub use settings::{AppConfig, ConfigError};
pub use store::ConfigStore;
