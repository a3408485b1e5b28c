//! CLI argument parsing, modeled on `y-lang`'s `src/bin/why/cli.rs`.
//!
//! `--help` and `--version` are declared as plain boolean flags rather than
//! letting `clap`'s derive macro auto-handle them, since the derive's
//! built-in handling exits before the combined-flags check below can run.

use clap::{CommandFactory, Parser};

use crate::logging::Severity;

#[derive(Parser, Debug)]
#[command(author, version, about, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Severity threshold below which log messages are discarded.
    #[arg(short, long = "debug_level", default_value_t = 4)]
    pub debug_level: u8,

    /// Print usage information and exit.
    #[arg(short = 'h', long, action = clap::ArgAction::SetTrue)]
    pub help: bool,

    /// Print version information and exit.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub version: bool,
}

/// What `main` should do before running the interpreter pipeline.
pub enum Action {
    Run(Severity),
    PrintHelp,
    PrintVersion,
}

/// A CLI-level usage fault: out-of-range `--debug_level`, or `--help`
/// together with `--version`.
pub struct UsageFault(pub String);

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }

    pub fn resolve(self) -> Result<Action, UsageFault> {
        if self.help && self.version {
            return Err(UsageFault(
                "--help and --version cannot be used together".to_owned(),
            ));
        }
        if self.help {
            return Ok(Action::PrintHelp);
        }
        if self.version {
            return Ok(Action::PrintVersion);
        }
        let severity = Severity::try_from(self.debug_level)
            .map_err(|_| UsageFault(format!("--debug_level must be in 0..=5, got {}", self.debug_level)))?;
        Ok(Action::Run(severity))
    }

    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }

    pub fn version_text() -> String {
        Cli::command().render_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["beeline"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn default_debug_level_is_four() {
        assert_eq!(cli(&[]).debug_level, 4);
    }

    #[test]
    fn help_and_version_together_is_a_usage_fault() {
        let result = cli(&["--help", "--version"]).resolve();
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_debug_level_is_a_usage_fault() {
        let result = cli(&["--debug_level", "6"]).resolve();
        assert!(result.is_err());
    }

    #[test]
    fn in_range_debug_level_resolves_to_run() {
        let result = cli(&["--debug_level", "0"]).resolve();
        assert!(matches!(result, Ok(Action::Run(Severity::Trace))));
    }

    #[test]
    fn help_alone_resolves_to_print_help() {
        assert!(matches!(cli(&["--help"]).resolve(), Ok(Action::PrintHelp)));
    }
}
