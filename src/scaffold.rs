//! Core scaffolding sequence: validate the target, create it, copy the
//! template in.
//!
//! The sequence is strictly linear with no rollback. A failure part-way
//! through the copy leaves whatever was already written.

use std::path::Path;

use anyhow::Context as _;

use crate::error::ScaffoldError;
use crate::template;

/// Outcome of a successful scaffolding run.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// The target directory exactly as given on the command line.
    pub target: String,
    /// Number of template files written.
    pub files: usize,
}

/// Entry point for the scaffolder: resolve the optional CLI argument and
/// delegate to [`scaffold`].
///
/// An empty path (e.g. `""` from an unset shell variable) counts as
/// missing; it would otherwise name the current working directory.
///
/// # Errors
///
/// Returns [`ScaffoldError::MissingArgument`] when `target` is absent or
/// empty, otherwise whatever [`scaffold`] returns.
pub fn run(target: Option<&Path>) -> Result<ScaffoldReport, ScaffoldError> {
    match target {
        Some(path) if !path.as_os_str().is_empty() => scaffold(path),
        Some(_) | None => Err(ScaffoldError::MissingArgument),
    }
}

/// Validate `target`, create it (including missing parents), and copy the
/// embedded template tree into it.
///
/// An existing target is accepted only when it is an empty directory; the
/// unconditional `create_dir_all` then re-creates it as a no-op. An absent
/// target is created along with any missing parent segments.
///
/// # Errors
///
/// Returns [`ScaffoldError::TargetNotEmpty`] when `target` exists and
/// contains entries, or [`ScaffoldError::Copy`] for any I/O failure while
/// inspecting, creating, or populating it.
pub fn scaffold(target: &Path) -> Result<ScaffoldReport, ScaffoldError> {
    if target.exists() && !is_empty_dir(target)? {
        return Err(ScaffoldError::TargetNotEmpty(target.display().to_string()));
    }

    std::fs::create_dir_all(target)
        .with_context(|| format!("creating directory {}", target.display()))?;
    let files = template::materialize(target)?;
    tracing::debug!("scaffolded {files} files into {}", target.display());

    Ok(ScaffoldReport {
        target: target.display().to_string(),
        files,
    })
}

/// Whether `path` is a directory with no entries.
fn is_empty_dir(path: &Path) -> anyhow::Result<bool> {
    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("reading directory {}", path.display()))?;
    Ok(entries.next().is_none())
}
