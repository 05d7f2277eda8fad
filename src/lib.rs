//! Scaffolding engine for new VueYous projects.
//!
//! `create-vueyouse` bootstraps a starter project: it validates that the
//! target directory is usable (absent, or present and empty) and copies the
//! bundled template tree into it byte for byte, then reports the outcome in
//! colour on the terminal.
//!
//! The public API is organised into small layers:
//!
//! - **[`template`]** — the embedded starter tree and its materialisation
//! - **[`scaffold`]** — the validate → create → copy sequence behind [`scaffold::run`]
//! - **[`error`]** — the [`error::ScaffoldError`] taxonomy
//! - **[`style`]** — ANSI colour helpers for terminal reporting
//! - **[`cli`]** — clap argument surface
//! - **[`logging`]** — tracing subscriber setup
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod scaffold;
pub mod style;
pub mod template;
