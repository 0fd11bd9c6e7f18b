//! Candidate-path resolution for configured quote-file locations.
//!
//! A configured path may be absolute (picked through a file dialog) or
//! relative (the shipped defaults, `english_quotes.json` /
//! `spanish_quotes.json`). Relative paths are tried against several base
//! directories because the app may be launched from its install directory,
//! from a shell anywhere on disk, or from a nested build-output directory
//! during development.
//!
//! This module only *computes* the ordered candidate list; the loader is
//! the one that tests each candidate for existence and reads the first hit.

use std::path::{Path, PathBuf};

/// How many directory levels above the executable the last-resort base sits.
///
/// Covers running from a nested build-output directory (e.g.
/// `target/debug/` or `bin/Debug/<toolchain>/`) while the quote files sit
/// next to the project root.
const NESTED_BUILD_DEPTH: usize = 3;

/// The ordered base directories relative paths are resolved against:
///
/// 1. the executable's directory (installed layout),
/// 2. the current working directory,
/// 3. [`NESTED_BUILD_DEPTH`] levels above the executable's directory.
///
/// Bases the platform cannot supply (no executable path, no CWD) are
/// silently skipped, so the list may be shorter than three entries.
pub fn candidate_bases() -> Vec<PathBuf> {
    let mut bases = Vec::with_capacity(3);

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    if let Some(dir) = &exe_dir {
        bases.push(dir.clone());
    }
    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }
    if let Some(dir) = &exe_dir {
        if let Some(above) = dir.ancestors().nth(NESTED_BUILD_DEPTH) {
            bases.push(above.to_path_buf());
        }
    }

    bases
}

/// Resolve a configured path into its ordered candidate locations.
///
/// Absolute paths resolve to themselves, unchanged. Relative paths are
/// joined against every [`candidate_bases`] entry, in priority order.
/// Only local filesystem paths are supported.
pub fn candidate_paths(configured: &str) -> Vec<PathBuf> {
    let path = Path::new(configured);
    if path.is_absolute() {
        return vec![path.to_path_buf()];
    }

    candidate_bases()
        .into_iter()
        .map(|base| base.join(path))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_resolves_to_itself() {
        let abs = if cfg!(windows) {
            r"C:\quotes\en.json"
        } else {
            "/quotes/en.json"
        };
        assert_eq!(candidate_paths(abs), vec![PathBuf::from(abs)]);
    }

    #[test]
    fn relative_path_is_joined_against_every_base_in_order() {
        let candidates = candidate_paths("quotes/en.json");
        let bases = candidate_bases();

        assert_eq!(candidates.len(), bases.len());
        for (candidate, base) in candidates.iter().zip(&bases) {
            assert_eq!(candidate, &base.join("quotes/en.json"));
        }
    }

    #[test]
    fn cwd_is_among_the_bases() {
        let cwd = std::env::current_dir().expect("cwd");
        assert!(candidate_bases().contains(&cwd));
    }

    #[test]
    fn exe_dir_is_the_first_base() {
        let exe_dir = std::env::current_exe()
            .expect("exe path")
            .parent()
            .expect("exe dir")
            .to_path_buf();
        assert_eq!(candidate_bases().first(), Some(&exe_dir));
    }
}
