//! Shared CLI helpers — path expansion, progress output, key masking.

use std::path::{Path, PathBuf};

use colored::Colorize;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Show a progress line on stderr while a request is in flight.
pub fn print_progress(message: &str) {
    eprint!("{}", format!("⠿ {message}").dimmed());
}

/// Carriage return plus ANSI "erase entire line".
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Clear the progress line, whatever its length.
pub fn clear_progress() {
    eprint!("{CLEAR_LINE}");
}

/// Report a written output file.
pub fn print_saved(path: &Path) {
    println!("{} saved to {}", "✓".green(), path.display());
}

/// Mask a secret for display, keeping a short prefix.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(6).collect();
    if prefix.chars().count() == secret.chars().count() {
        "*".repeat(secret.chars().count().max(3))
    } else {
        format!("{prefix}...")
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
