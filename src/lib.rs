pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;

use log::debug;

use ast::stringifier::to_string as stringify_statement;
use error::Error;
use evaluator::Evaluator;
use lexer::Lexer;
use parser::Parser;

/// Runs a single Beeline program to completion.
///
/// Tokenizes, parses, and evaluates `source` in one shot, printing
/// `print` output to stdout as it goes. Returns the first fatal error
/// encountered, if any; the pipeline never partially recovers across
/// stage boundaries (a lexing failure is never parsed, a parse failure
/// is never evaluated).
pub fn run(source: &str) -> Result<(), Error> {
    let tokens = Lexer::new(source).scan()?;

    for token in &tokens {
        debug!("{token}");
    }

    let statements = Parser::new(tokens).parse()?;

    for statement in &statements {
        debug!("{}", stringify_statement(statement));
    }

    Evaluator::new().interpret(&statements)?;

    Ok(())
}
