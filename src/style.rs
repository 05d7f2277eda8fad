//! ANSI colour helpers for user-facing terminal output.
//!
//! The scaffolder reports through plain `println!`/`eprintln!` rather than a
//! logging pipeline, so colouring is done with stateless string helpers that
//! wrap text in raw SGR sequences.

/// Wrap `text` in the SGR sequence for red.
#[must_use]
pub fn red(text: &str) -> String {
    format!("\x1b[31m{text}\x1b[0m")
}

/// Wrap `text` in the SGR sequence for green.
#[must_use]
pub fn green(text: &str) -> String {
    format!("\x1b[32m{text}\x1b[0m")
}

/// Strip ANSI escape sequences from a string.
///
/// Handles SGR sequences (ending in `m`) and other CSI sequences (ending
/// in any letter in the `@`..`~` range), so cursor movement, erase, etc.
/// are also stripped without consuming unrelated text.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if let Some(next) = chars.next()
                && next == '['
            {
                for inner in chars.by_ref() {
                    if ('@'..='~').contains(&inner) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
