//! The four fault kinds the pipeline can raise, modeled on `BeelineSyntaxError`,
//! `BeelineLexingError`, `BeelineParseError`, `BeelineRuntimeError`, and the
//! generic `BeelineError` they collapse into at the process boundary.

use std::fmt;

pub use crate::lexer::token::Position;

/// A single lexical fault: one offending token-sized span.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxFault {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for SyntaxFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BeelineSyntaxError: {} at {}",
            self.message, self.position
        )
    }
}

/// The lexer's aggregate failure: every syntax fault seen in one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct LexingError {
    pub faults: Vec<SyntaxFault>,
}

impl fmt::Display for LexingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.faults.iter().map(SyntaxFault::to_string).collect();
        write!(f, "BeelineLexingError: {}", messages.join("\n"))
    }
}

impl std::error::Error for LexingError {}

/// A single grammar violation at a specific token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFault {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for ParseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BeelineParseError: {} at {}",
            self.message, self.position
        )
    }
}

/// The parser's aggregate failure: every fault recovered from in one parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub faults: Vec<ParseFault>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.faults.iter().map(ParseFault::to_string).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for ParseError {}

/// A fatal evaluation-time fault: type mismatch, undefined/duplicate
/// variable, division by zero, or a bad operand.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BeelineRuntimeError: {} at {}",
            self.message, self.position
        )
    }
}

impl std::error::Error for RuntimeError {}

/// The category every specific fault collapses into at the process boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lexing(LexingError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = match self {
            Error::Lexing(e) => e.to_string(),
            Error::Parse(e) => e.to_string(),
            Error::Runtime(e) => e.to_string(),
        };
        write!(f, "BeelineError: {inner}")
    }
}

impl std::error::Error for Error {}

impl From<LexingError> for Error {
    fn from(value: LexingError) -> Self {
        Error::Lexing(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Error::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Error::Runtime(value)
    }
}
