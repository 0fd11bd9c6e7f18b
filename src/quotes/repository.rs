//! In-memory passage collections, one per language, with built-in fallback.
//!
//! [`QuoteRepository::reload`] rebuilds both collections from the configured
//! paths. Each language degrades independently: when no file is found at all
//! the built-in fallback passages are substituted, so the app always has
//! something to show. A file that exists but legitimately contains zero
//! quotes yields an empty collection, no fallback. Collections are replaced
//! wholesale on reload, never mutated in place, so readers only ever see a
//! complete snapshot.

use crate::config::AppConfig;

use super::loader;
use super::{Language, Quote};

// ---------------------------------------------------------------------------
// QuoteRepository
// ---------------------------------------------------------------------------

/// Owns the loaded quote collections for both languages.
#[derive(Debug, Default)]
pub struct QuoteRepository {
    english: Vec<Quote>,
    spanish: Vec<Quote>,
}

impl QuoteRepository {
    /// An empty repository; call [`reload`](Self::reload) to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild both language collections from the configured paths.
    ///
    /// Not safe to call concurrently with readers from another thread; the
    /// engine is single-threaded by construction and the UI serialises
    /// settings-triggered reloads.
    pub fn reload(&mut self, config: &AppConfig) {
        self.english = load_language(Language::English, &config.english_quotes_path);
        self.spanish = load_language(Language::Spanish, &config.spanish_quotes_path);
    }

    /// Read-only view of the current collection for `language`.
    pub fn quotes(&self, language: Language) -> &[Quote] {
        match language {
            Language::English => &self.english,
            Language::Spanish => &self.spanish,
        }
    }
}

/// Load one language's collection, substituting the built-in fallback when
/// no file was found. A found-but-empty file stays empty.
fn load_language(language: Language, configured_path: &str) -> Vec<Quote> {
    let outcome = loader::load(configured_path);
    if outcome.file_found() {
        return outcome.quotes;
    }
    log::info!("using built-in {language} passages (no quote file found)");
    fallback_quotes(language)
}

// ---------------------------------------------------------------------------
// Built-in fallback passages
// ---------------------------------------------------------------------------

/// The fixed passages shown when a language has no quote file at all.
fn fallback_quotes(language: Language) -> Vec<Quote> {
    match language {
        Language::English => vec![
            Quote::new(
                "I went to the woods because I wished to live deliberately, to front only the \
                 essential facts of life, and see if I could not learn what it had to teach, and \
                 not, when I came to die, discover that I had not lived.",
                "Henry David Thoreau",
            ),
            Quote::new(
                "It is not that we have a short time to live, but that we waste a lot of it. \
                 Life is long enough for the highest achievements if it were all well invested.",
                "Seneca",
            ),
            Quote::new(
                "The man who does not read good books has no advantage over the man who cannot \
                 read them.",
                "Mark Twain",
            ),
        ],
        Language::Spanish => vec![
            Quote::new(
                "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha mucho \
                 tiempo que vivía un hidalgo de los de lanza en astillero, adarga antigua, rocín \
                 flaco y galgo corredor.",
                "Miguel de Cervantes",
            ),
            Quote::new(
                "Caminante, son tus huellas el camino y nada más; caminante, no hay camino, se \
                 hace camino al andar.",
                "Antonio Machado",
            ),
            Quote::new(
                "El que lee mucho y anda mucho, ve mucho y sabe mucho.",
                "Miguel de Cervantes",
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
