//! CLI definition and input-source dispatch.

pub mod files;
pub mod stdin;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use inspect2run_common::config::TranslateOptions;

/// Rebuild `docker run` commands from `docker inspect` output.
///
/// Reads each FILE in turn, or standard input when no file is given.
#[derive(Parser, Debug)]
#[command(name = inspect2run_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Break the command over several lines with trailing backslashes.
    #[arg(short, long, env = inspect2run_common::constants::FORMAT_ENV)]
    pub format: bool,

    /// Files holding `docker inspect` JSON.
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Translation options selected on the command line.
    pub const fn options(&self) -> TranslateOptions {
        TranslateOptions::new(self.format)
    }
}

/// Final status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything that could be translated was written.
    Success,
    /// Standard input could not be read or translated.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::Failure => Self::FAILURE,
        }
    }
}

/// Runs the translation over the selected input source.
///
/// # Errors
///
/// Returns an error only if writing to standard output fails; translation
/// failures are reported inline and reflected in the exit code.
pub fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let options = cli.options();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        let outcome = stdin::execute(std::io::stdin().lock(), &options, &mut out)?;
        Ok(outcome.into())
    } else {
        files::execute(&cli.files, &options, &mut out)?;
        Ok(ExitCode::SUCCESS)
    }
}
