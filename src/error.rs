//! Error types for the scaffolder.
//!
//! This module provides a structured error type using [`thiserror`].
//! Validation failures are typed variants whose `Display` output is the
//! exact user-facing message, while filesystem failures are carried as an
//! [`anyhow::Error`] whose context chain is assembled at the failing call
//! site and surfaced verbatim.

use thiserror::Error;

/// Failures that terminate a scaffolding run.
///
/// `Display` renders the message shown to the user, without the `Error: `
/// prefix or colouring added by the binary when reporting.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No target directory argument was supplied, or it was empty.
    #[error("Target directory path is required.")]
    MissingArgument,

    /// The target directory exists and already contains entries.
    #[error("Target directory \"{0}\" is not empty.")]
    TargetNotEmpty(String),

    /// An I/O failure while inspecting the target or materialising the
    /// template. Display and source delegate to [`anyhow::Error`], so the
    /// full path context chain reaches the user.
    #[error(transparent)]
    Copy(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// A corrective suggestion to print after the error message, for
    /// failures with a user-actionable remedy.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::TargetNotEmpty(_) => {
                Some("Please choose an empty directory or remove existing files.")
            }
            Self::MissingArgument | Self::Copy(_) => None,
        }
    }
}
