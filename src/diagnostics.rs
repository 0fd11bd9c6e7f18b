//! Misconfiguration report for the debug view.
//!
//! [`debug_report`] answers "where did the app look for my quote files?":
//! the configured paths, every resolver candidate with its existence, the
//! process directories, and a preview of whatever file was found, rendered
//! as one plain string the debug view can display or export.

use std::fmt::Write;

use crate::config::AppConfig;
use crate::quotes::resolve::candidate_paths;
use crate::quotes::Language;

/// Maximum number of content bytes previewed per quote file.
const PREVIEW_LEN: usize = 200;

/// Render the full diagnostic report for the current configuration.
pub fn debug_report(config: &AppConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== READ-TO-UNLOCK DEBUG INFORMATION ===\n");

    let _ = writeln!(out, "=== CONFIGURATION ===");
    let _ = writeln!(out, "English quotes path: {}", config.english_quotes_path);
    let _ = writeln!(out, "Spanish quotes path: {}", config.spanish_quotes_path);
    let _ = writeln!(out);

    let _ = writeln!(out, "=== PATH RESOLUTION ===");
    for language in [Language::English, Language::Spanish] {
        let configured = config.quotes_path(language);
        let _ = writeln!(out, "{language} candidates for {configured:?}:");
        for candidate in candidate_paths(configured) {
            let _ = writeln!(
                out,
                "  {} (exists: {})",
                candidate.display(),
                candidate.is_file()
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== PROCESS INFO ===");
    match std::env::current_dir() {
        Ok(cwd) => {
            let _ = writeln!(out, "Current directory: {}", cwd.display());
        }
        Err(e) => {
            let _ = writeln!(out, "Current directory: <unavailable: {e}>");
        }
    }
    match std::env::current_exe() {
        Ok(exe) => {
            let _ = writeln!(out, "Executable path: {}", exe.display());
        }
        Err(e) => {
            let _ = writeln!(out, "Executable path: <unavailable: {e}>");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== FILE DETAILS ===");
    for language in [Language::English, Language::Spanish] {
        let configured = config.quotes_path(language);
        let found = candidate_paths(configured)
            .into_iter()
            .find(|c| c.is_file());
        match found {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(content) => {
                    let _ = writeln!(out, "{language} file: {}", path.display());
                    let _ = writeln!(out, "  size: {} bytes", content.len());
                    let preview: String = content.chars().take(PREVIEW_LEN).collect();
                    let _ = writeln!(out, "  preview: {preview}");
                }
                Err(e) => {
                    let _ = writeln!(out, "{language} file: error reading {}: {e}", path.display());
                }
            },
            None => {
                let _ = writeln!(out, "{language} file: not found (built-in fallback in use)");
            }
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
