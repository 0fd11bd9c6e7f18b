//! Emergency-hotkey descriptor parsing.
//!
//! The settings record stores the emergency shortcut as a display string
//! (e.g. `"Ctrl+Shift+U"`). This module turns that string into a
//! [`Shortcut`] so the configuration layer can reject descriptors the window
//! layer would never be able to register. Actually grabbing the key
//! combination from the OS is the window layer's job.
//!
//! # Examples
//!
//! ```
//! use read_to_unlock::hotkey::parse_shortcut;
//!
//! let s = parse_shortcut("Ctrl+Shift+U").unwrap();
//! assert!(s.ctrl && s.shift && !s.alt);
//! assert_eq!(s.key, "U");
//!
//! assert!(parse_shortcut("Ctrl+Shift+").is_none());
//! assert!(parse_shortcut("").is_none());
//! ```

// ---------------------------------------------------------------------------
// Shortcut
// ---------------------------------------------------------------------------

/// A parsed shortcut descriptor: modifier flags plus one main key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Control modifier present.
    pub ctrl: bool,
    /// Shift modifier present.
    pub shift: bool,
    /// Alt modifier present.
    pub alt: bool,
    /// The main key, normalised to its canonical spelling (`"U"`, `"F9"`,
    /// `"Escape"` …).
    pub key: String,
}

// ---------------------------------------------------------------------------
// parse_shortcut
// ---------------------------------------------------------------------------

/// Parse a shortcut descriptor from a config string.
///
/// Accepts `+`-separated segments: any number of distinct modifiers
/// (`Ctrl`/`Control`, `Shift`, `Alt`) in any order, terminated by exactly one
/// main key (a letter, a digit, `F1`..`F12`, or a named key).
///
/// Returns `None` for unrecognised descriptors so callers can fall back to a
/// default or display a validation error to the user.
pub fn parse_shortcut(descriptor: &str) -> Option<Shortcut> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<String> = None;

    for segment in descriptor.split('+') {
        let segment = segment.trim();
        match segment.to_ascii_lowercase().as_str() {
            "" => return None,
            "ctrl" | "control" => {
                if ctrl {
                    return None;
                }
                ctrl = true;
            }
            "shift" => {
                if shift {
                    return None;
                }
                shift = true;
            }
            "alt" => {
                if alt {
                    return None;
                }
                alt = true;
            }
            _ => {
                // Main key, must be the last segment.
                if key.is_some() {
                    return None;
                }
                key = Some(parse_main_key(segment)?);
            }
        }
    }

    key.map(|key| Shortcut {
        ctrl,
        shift,
        alt,
        key,
    })
}

/// Normalise the main-key segment, or `None` if it is not a key we accept.
fn parse_main_key(segment: &str) -> Option<String> {
    // Single letter or digit
    if segment.len() == 1 {
        let c = segment.chars().next()?;
        if c.is_ascii_alphanumeric() {
            return Some(c.to_ascii_uppercase().to_string());
        }
        return None;
    }

    // Function keys F1–F12
    if let Some(n) = segment
        .strip_prefix('F')
        .or_else(|| segment.strip_prefix('f'))
    {
        if let Ok(n) = n.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(format!("F{n}"));
            }
        }
        return None;
    }

    // Named keys
    match segment.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Some("Escape".into()),
        "space" => Some("Space".into()),
        "tab" => Some("Tab".into()),
        "enter" | "return" => Some("Enter".into()),
        "backspace" => Some("Backspace".into()),
        "delete" => Some("Delete".into()),
        "home" => Some("Home".into()),
        "end" => Some("End".into()),
        "pageup" => Some("PageUp".into()),
        "pagedown" => Some("PageDown".into()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
