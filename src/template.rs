//! The bundled starter project, embedded at compile time.
//!
//! The `template/` directory at the crate root is compiled into the binary
//! with [`rust_embed`], so the tool materialises the same tree no matter
//! where it is installed or invoked from. The assets are read-only;
//! scaffolding only ever copies them out.

use std::path::Path;

use anyhow::{Context as _, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "template"]
struct Template;

/// Relative paths of every embedded template file.
#[must_use]
pub fn paths() -> Vec<String> {
    Template::iter().map(|p| p.into_owned()).collect()
}

/// Contents of the embedded template file at `path`.
///
/// # Errors
///
/// Returns an error if `path` names no embedded file.
pub fn read(path: &str) -> Result<Vec<u8>> {
    let file = Template::get(path)
        .ok_or_else(|| anyhow!("embedded template file `{path}` missing"))?;
    Ok(file.data.into_owned())
}

/// Write every embedded template file under `target`, creating intermediate
/// directories as needed, and return the number of files written.
///
/// File contents are copied byte for byte with no filtering or rewriting.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or a file cannot be
/// written.
pub fn materialize(target: &Path) -> Result<usize> {
    let mut written = 0;
    for file in Template::iter() {
        let rel: &str = &file;
        let bytes = read(rel)?;
        let dst = target.join(rel);
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        std::fs::write(&dst, &bytes).with_context(|| format!("writing {}", dst.display()))?;
        tracing::debug!("wrote {}", dst.display());
        written += 1;
    }
    Ok(written)
}
