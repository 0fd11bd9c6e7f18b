//! Quote provisioning and selection.
//!
//! # Architecture
//!
//! ```text
//! configured path (settings)
//!         │
//!         ▼
//! ┌──────────────┐   ordered candidates   ┌──────────────┐
//! │   resolve    │───────────────────────▶│    loader    │
//! │ path → bases │                        │ read + parse │
//! └──────────────┘                        └──────┬───────┘
//!                                                │ LoadOutcome
//!                                                ▼
//!                                        ┌──────────────┐
//!                                        │  repository  │
//!                                        │ per-language │
//!                                        │  + fallback  │
//!                                        └──────┬───────┘
//!                                               │ &[Quote]
//!                                               ▼
//!                                        ┌──────────────┐
//!                                        │    select    │
//!                                        │ uniform pick │
//!                                        └──────────────┘
//! ```
//!
//! Loading is forgiving: quote files are hand-edited, so the loader
//! tolerates comments, trailing commas and odd key casing, scrapes what it
//! can out of files that do not parse at all, and substitutes built-in
//! passages when a file is missing entirely. None of it can fail the
//! caller; a broken quote file must never block a practice session.

pub mod loader;
pub mod repository;
pub mod resolve;
pub mod select;

pub use loader::{load, LoadOutcome};
pub use repository::QuoteRepository;
pub use select::next_quote;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// The two practice languages, each backed by its own quote file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// The language tag used in settings and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// A unit of practice text with its attribution.
///
/// Immutable once loaded; the repository owns the collection for each
/// language and hands out read-only views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The passage the user reads aloud. Never empty; the loader drops
    /// entries without text.
    pub text: String,
    /// Who said or wrote it; may be empty when the file omits it.
    #[serde(default)]
    pub author: String,
}

impl Quote {
    /// Convenience constructor used by the loader and the built-in
    /// fallback collections.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}
