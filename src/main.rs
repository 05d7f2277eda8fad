//! Binary entry point: parse the CLI, run the scaffolder, and report the
//! outcome in colour on the terminal.

use std::process::ExitCode;

use clap::Parser;

use create_vueyouse::error::ScaffoldError;
use create_vueyouse::scaffold::{self, ScaffoldReport};
use create_vueyouse::{cli, logging, style};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    logging::init();
    let version = option_env!("CREATE_VUEYOUSE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    tracing::debug!("create-vueyouse {version}");

    let args = cli::Cli::parse();
    match scaffold::run(args.target_dir.as_deref()) {
        Ok(report) => {
            print_banner(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print the success banner naming the scaffolded directory.
fn print_banner(report: &ScaffoldReport) {
    let rule = "-".repeat(58);
    let created = format!("Successfully created vueyouse in \"{}\".", report.target);
    println!();
    println!("{rule}");
    println!("{}", style::green(&created));
    println!("🚀 Welcome to VueYous! Let's learn Vue together! 📚");
    println!("{rule}");
}

/// Report a failed run on stderr: the error in red, then the corrective
/// hint in green when the failure has one.
fn report_failure(err: &ScaffoldError) {
    eprintln!("{}", style::red(&format!("Error: {err:#}")));
    if let Some(hint) = err.hint() {
        eprintln!("{}", style::green(hint));
    }
}
