//! Memoryless uniform passage selection.
//!
//! Selection carries no state between calls: the same passage can come up
//! twice in a row, and nothing is remembered about what was shown. When no
//! language preference is given the language itself is a fair coin flip,
//! then a passage is drawn uniformly within the chosen collection. The
//! other collection is *not* consulted when the chosen one is empty, so a
//! call can return `None` even while passages exist elsewhere.

use rand::Rng;

use super::{Language, Quote, QuoteRepository};

/// Draw the next passage from `repository`.
///
/// * `Some(language)`: uniform draw from that language's collection.
/// * `None`: 50/50 language pick first, then a uniform draw within it.
///
/// Returns `None` when the chosen collection has no passages. The
/// repository's fallback rules make that rare, but a found-and-empty quote
/// file makes it possible, so callers must handle it.
pub fn next_quote<'a, R: Rng>(
    rng: &mut R,
    repository: &'a QuoteRepository,
    preference: Option<Language>,
) -> Option<&'a Quote> {
    let language = preference.unwrap_or_else(|| {
        if rng.random_bool(0.5) {
            Language::English
        } else {
            Language::Spanish
        }
    });

    let pool = repository.quotes(language);
    if pool.is_empty() {
        log::warn!("no {language} passages available for selection");
        return None;
    }
    Some(&pool[rng.random_range(0..pool.len())])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
