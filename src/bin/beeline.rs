//! The Beeline interpreter binary: reads a program from stdin, runs it,
//! and reports any fault at the process boundary. Shape mirrors `y-lang`'s
//! `src/bin/why.rs` (parse -> typecheck -> interpret, each stage's failure
//! logged and exiting non-zero), minus the typecheck stage.

#[path = "beeline/cli.rs"]
mod cli;
#[path = "beeline/logging.rs"]
mod logging;

use std::io::Read;

use log::error;

use cli::{Action, Cli};

fn main() {
    let args = Cli::init();

    let action = match args.resolve() {
        Ok(action) => action,
        Err(fault) => {
            eprintln!("{}", fault.0);
            std::process::exit(1);
        }
    };

    match action {
        Action::PrintHelp => {
            print!("{}", Cli::help_text());
        }
        Action::PrintVersion => {
            print!("{}", Cli::version_text());
        }
        Action::Run(severity) => {
            simple_logger::init_with_level(severity.into()).expect("logger already initialized");

            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .expect("failed to read stdin");

            if let Err(fault) = beeline::run(&source) {
                error!("{fault}");
                std::process::exit(1);
            }
        }
    }
}
