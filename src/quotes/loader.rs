//! Quote-file reading and tolerant parsing.
//!
//! Quote files are hand-edited JSON, so strict parsing is the wrong tool:
//! users leave trailing commas, add `//` notes, and mis-case key names.
//! [`load`] therefore runs a three-stage gauntlet:
//!
//! 1. try every resolver candidate until one can actually be read;
//! 2. parse tolerantly, with comments and trailing commas stripped and key
//!    names matched case-insensitively;
//! 3. if the document does not parse at all, scrape `"text"` / `"author"`
//!    substrings straight out of the raw bytes.
//!
//! Every failure along the way is logged and absorbed. The caller always
//! gets a (possibly empty) collection back; a corrupt quote file degrades
//! the passage pool instead of crashing the session.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::resolve::candidate_paths;
use super::Quote;

// ---------------------------------------------------------------------------
// LoadOutcome
// ---------------------------------------------------------------------------

/// Result of loading one configured quote-file path.
///
/// `source` records which candidate was actually read; `None` means no
/// candidate existed (or none could be read). The repository needs that
/// distinction: only a missing file triggers the built-in fallback, a
/// present-but-empty file does not.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The extracted passages, possibly empty.
    pub quotes: Vec<Quote>,
    /// The file the passages came from, when one was found.
    pub source: Option<PathBuf>,
}

impl LoadOutcome {
    /// `true` when some candidate file was found and read.
    pub fn file_found(&self) -> bool {
        self.source.is_some()
    }
}

// ---------------------------------------------------------------------------
// load
// ---------------------------------------------------------------------------

/// Load the quote collection for one configured path.
///
/// Tries each resolver candidate in priority order and reads the first one
/// that exists; a candidate that exists but cannot be read counts as not
/// found and the scan continues. Never fails the caller: I/O and parse
/// errors are logged, not returned.
pub fn load(configured_path: &str) -> LoadOutcome {
    for candidate in candidate_paths(configured_path) {
        if !candidate.is_file() {
            continue;
        }
        match std::fs::read_to_string(&candidate) {
            Ok(content) => {
                let quotes = parse_quotes(&content, &candidate);
                log::info!(
                    "loaded {} quote(s) from {}",
                    quotes.len(),
                    candidate.display()
                );
                return LoadOutcome {
                    quotes,
                    source: Some(candidate),
                };
            }
            Err(e) => {
                log::warn!(
                    "cannot read quote file {} ({e}); trying next candidate",
                    candidate.display()
                );
            }
        }
    }

    log::info!("no quote file found for configured path {configured_path:?}");
    LoadOutcome {
        quotes: Vec::new(),
        source: None,
    }
}

// ---------------------------------------------------------------------------
// Tolerant parsing
// ---------------------------------------------------------------------------

/// Parse file content into quotes, degrading instead of failing.
fn parse_quotes(content: &str, origin: &Path) -> Vec<Quote> {
    let cleaned = strip_trailing_commas(&strip_comments(content));
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => match quotes_from_value(&value) {
            Some(quotes) => quotes,
            None => {
                log::warn!(
                    "{} parsed as JSON but has no \"quotes\" array",
                    origin.display()
                );
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!(
                "{} is not parseable JSON ({e}); attempting raw extraction",
                origin.display()
            );
            let quotes = degraded_extract(content);
            log::warn!(
                "raw extraction recovered {} quote(s) from {}",
                quotes.len(),
                origin.display()
            );
            quotes
        }
    }
}

/// Pull the quote list out of a parsed document.
///
/// Key lookups are case-insensitive (`"Quotes"`, `"TEXT"` … all accepted).
/// Entries without a non-empty `text` are dropped; a missing `author`
/// becomes an empty attribution. Returns `None` when the document is not an
/// object with a quotes array at all.
fn quotes_from_value(value: &Value) -> Option<Vec<Quote>> {
    let array = get_ci(value.as_object()?, "quotes")?.as_array()?;

    let mut quotes = Vec::with_capacity(array.len());
    for entry in array {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let Some(text) = get_ci(obj, "text").and_then(Value::as_str) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let author = get_ci(obj, "author")
            .and_then(Value::as_str)
            .unwrap_or_default();
        quotes.push(Quote::new(text, author));
    }
    Some(quotes)
}

/// Case-insensitive field lookup on a JSON object.
fn get_ci<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

/// Remove `//` line comments and `/* */` block comments outside strings.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    // Line comment: skip to end of line, keep the newline.
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

/// Remove commas that directly precede a closing `}` or `]`, outside strings.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            match c {
                '\\' if i + 1 < chars.len() => {
                    i += 1;
                    out.push(chars[i]);
                }
                '"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                i += 1;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

// ---------------------------------------------------------------------------
// Degraded extraction
// ---------------------------------------------------------------------------

fn quotes_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)"quotes"\s*:\s*\["#).unwrap())
}

fn text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)"text"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap())
}

fn author_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)"author"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap())
}

/// Best-effort scrape of `"text"` / `"author"` fields from a file that does
/// not parse as JSON.
///
/// The region after the literal `"quotes"` key (or the whole content when
/// that key is absent) is split on object boundaries, and each piece is
/// mined for its field substrings. Hand-edited files break often enough
/// that degraded data beats an empty passage pool.
fn degraded_extract(content: &str) -> Vec<Quote> {
    let region = match quotes_key_re().find(content) {
        Some(m) => &content[m.end()..],
        None => content,
    };

    let mut quotes = Vec::new();
    for chunk in region.split('}') {
        let Some(text) = text_re()
            .captures(chunk)
            .map(|c| unescape_json_string(&c[1]))
        else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        let author = author_re()
            .captures(chunk)
            .map(|c| unescape_json_string(&c[1]))
            .unwrap_or_default();
        quotes.push(Quote::new(text, author));
    }
    quotes
}

/// Decode the common JSON string escapes; anything unrecognised is kept
/// literally, since the input is already known to be malformed.
fn unescape_json_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if let Some(decoded) = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    out.push(decoded);
                } else {
                    out.push_str("\\u");
                    out.push_str(&hex);
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Write `content` to a temp file and return its absolute path as a
    /// string (absolute paths resolve to themselves, keeping the test
    /// independent of the process CWD).
    fn quote_file(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("quotes.json");
        std::fs::write(&path, content).expect("write quote file");
        path.to_str().expect("utf-8 path").to_string()
    }

    #[test]
    fn missing_file_returns_empty_without_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("does-not-exist.json");

        let outcome = load(path.to_str().unwrap());

        assert!(outcome.quotes.is_empty());
        assert!(!outcome.file_found());
    }

    #[test]
    fn well_formed_file_preserved_verbatim() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"{
                "quotes": [
                    { "text": "Hello world today.", "author": "A" },
                    { "text": "Mañana será otro día — ¡ánimo!", "author": "B. C." }
                ]
            }"#,
        );

        let outcome = load(&path);

        assert!(outcome.file_found());
        assert_eq!(
            outcome.quotes,
            vec![
                Quote::new("Hello world today.", "A"),
                Quote::new("Mañana será otro día — ¡ánimo!", "B. C."),
            ]
        );
    }

    #[test]
    fn tolerates_comments_and_trailing_commas() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"{
                // hand-edited list
                "quotes": [
                    { "text": "First.", "author": "A", },
                    /* keep this one */
                    { "text": "Second.", "author": "B" },
                ],
            }"#,
        );

        let outcome = load(&path);

        assert_eq!(
            outcome.quotes,
            vec![Quote::new("First.", "A"), Quote::new("Second.", "B")]
        );
    }

    #[test]
    fn key_case_is_ignored() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"{ "Quotes": [ { "Text": "Mixed case.", "AUTHOR": "C" } ] }"#,
        );

        let outcome = load(&path);

        assert_eq!(outcome.quotes, vec![Quote::new("Mixed case.", "C")]);
    }

    #[test]
    fn comment_markers_inside_strings_survive() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"{ "quotes": [ { "text": "https://example.com is not /* a comment */", "author": "D" } ] }"#,
        );

        let outcome = load(&path);

        assert_eq!(
            outcome.quotes,
            vec![Quote::new("https://example.com is not /* a comment */", "D")]
        );
    }

    #[test]
    fn missing_author_becomes_empty_attribution() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(&dir, r#"{ "quotes": [ { "text": "No author." } ] }"#);

        let outcome = load(&path);

        assert_eq!(outcome.quotes, vec![Quote::new("No author.", "")]);
    }

    #[test]
    fn entries_without_text_are_dropped() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"{ "quotes": [ { "text": "", "author": "A" }, { "author": "B" }, { "text": "Kept.", "author": "C" } ] }"#,
        );

        let outcome = load(&path);

        assert_eq!(outcome.quotes, vec![Quote::new("Kept.", "C")]);
    }

    #[test]
    fn empty_quote_array_is_found_but_empty() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(&dir, r#"{ "quotes": [] }"#);

        let outcome = load(&path);

        assert!(outcome.file_found());
        assert!(outcome.quotes.is_empty());
    }

    #[test]
    fn degraded_extraction_recovers_from_broken_structure() {
        let dir = tempdir().expect("temp dir");
        // Unbalanced braces and a stray token make this unparseable.
        let path = quote_file(
            &dir,
            r#"{ "quotes": [
                { "text": "Recovered one.", "author": "A" },
                { "text": "Recovered two.", "author": "B" oops
            "#,
        );

        let outcome = load(&path);

        assert!(outcome.file_found());
        assert_eq!(
            outcome.quotes,
            vec![
                Quote::new("Recovered one.", "A"),
                Quote::new("Recovered two.", "B"),
            ]
        );
    }

    #[test]
    fn degraded_extraction_works_without_quotes_key() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            "garbage before \"text\": \"Still found.\" and \"author\": \"E\" garbage after",
        );

        let outcome = load(&path);

        assert_eq!(outcome.quotes, vec![Quote::new("Still found.", "E")]);
    }

    #[test]
    fn degraded_extraction_decodes_escapes() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(
            &dir,
            r#"not json { "text": "Line one.\nShe said \"go\".", "author": "Félix" }"#,
        );

        let outcome = load(&path);

        assert_eq!(
            outcome.quotes,
            vec![Quote::new("Line one.\nShe said \"go\".", "Félix")]
        );
    }

    #[test]
    fn parseable_but_wrong_shape_yields_empty() {
        let dir = tempdir().expect("temp dir");
        let path = quote_file(&dir, r#"[1, 2, 3]"#);

        let outcome = load(&path);

        assert!(outcome.file_found());
        assert!(outcome.quotes.is_empty());
    }
}
