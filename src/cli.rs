//! Command-line argument surface.
use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI entry point for the scaffolder.
//
// The target directory is optional at the clap level so an absent argument
// reaches the scaffolder and is reported like every other failure, rather
// than through clap's own missing-argument error.
#[derive(Parser, Debug)]
#[command(
    name = "create-vueyouse",
    about = "Scaffold a new VueYous project from the bundled starter template",
    version = option_env!("CREATE_VUEYOUSE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Directory to create the project in
    pub target_dir: Option<PathBuf>,
}
