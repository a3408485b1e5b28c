pub mod token;

pub use token::{LiteralValue, Position, Token, TokenType};

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{LexingError, SyntaxFault};

const KEYWORDS: &[(&str, TokenType)] = &[
    ("and", TokenType::And),
    ("or", TokenType::Or),
    ("if", TokenType::If),
    ("else", TokenType::Else),
    ("true", TokenType::True),
    ("false", TokenType::False),
    ("null", TokenType::Nil),
    ("print", TokenType::Print),
    ("var", TokenType::Var),
    ("while", TokenType::While),
];

fn keyword(lexeme: &str) -> Option<TokenType> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == lexeme)
        .map(|(_, kind)| *kind)
}

/// Scans source text into a finite ordered sequence of Tokens terminated by
/// a single `END_OF_FILE`, aggregating every syntax fault observed instead
/// of aborting on the first one.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    current_offset: usize,
    current_line: usize,
    current_column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            tokens: Vec::new(),
            current_offset: 0,
            current_line: 1,
            current_column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    pub fn scan(mut self) -> Result<Vec<Token>, LexingError> {
        let mut faults = Vec::new();

        while !self.is_done() {
            self.start_offset = self.current_offset;
            self.start_line = self.current_line;
            self.start_column = self.current_column;

            if let Err(fault) = self.scan_next_token() {
                faults.push(fault);
            }
        }

        self.start_offset = self.current_offset;
        self.start_line = self.current_line;
        self.start_column = self.current_column;
        self.add_token(TokenType::EndOfFile, LiteralValue::Null);

        if faults.is_empty() {
            Ok(self.tokens)
        } else {
            Err(LexingError { faults })
        }
    }

    fn is_done(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.current_offset += c.len_utf8();
        if c == '\n' {
            self.current_line += 1;
            self.current_column = 1;
        } else {
            self.current_column += 1;
        }
        Some(c)
    }

    fn try_consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn current_lexeme(&self) -> &'a str {
        &self.input[self.start_offset..self.current_offset]
    }

    fn current_position(&self) -> Position {
        Position {
            offset: self.start_offset,
            line: self.start_line,
            column: self.start_column,
            length: self.current_offset - self.start_offset,
        }
    }

    fn add_token(&mut self, kind: TokenType, literal: LiteralValue) {
        let lexeme = self.current_lexeme().to_owned();
        let position = self.current_position();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            position,
        });
    }

    fn fault(&self, message: &str) -> SyntaxFault {
        SyntaxFault {
            message: message.to_owned(),
            position: self.current_position(),
        }
    }

    fn scan_next_token(&mut self) -> Result<(), SyntaxFault> {
        let c = self.advance().expect("scan_next_token called at EOF");
        match c {
            '(' => self.add_token(TokenType::LeftParenthesis, LiteralValue::Null),
            ')' => self.add_token(TokenType::RightParenthesis, LiteralValue::Null),
            '{' => self.add_token(TokenType::LeftBrace, LiteralValue::Null),
            '}' => self.add_token(TokenType::RightBrace, LiteralValue::Null),
            '-' => self.add_token(TokenType::Minus, LiteralValue::Null),
            '+' => self.add_token(TokenType::Plus, LiteralValue::Null),
            '*' => self.add_token(TokenType::Star, LiteralValue::Null),
            '!' => {
                let kind = if self.try_consume('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.add_token(kind, LiteralValue::Null);
            }
            '=' => {
                let kind = if self.try_consume('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.add_token(kind, LiteralValue::Null);
            }
            '<' => {
                let kind = if self.try_consume('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(kind, LiteralValue::Null);
            }
            '>' => {
                let kind = if self.try_consume('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(kind, LiteralValue::Null);
            }
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.number_after_decimal_point();
                } else {
                    return Err(self.fault("missing digit after decimal point"));
                }
            }
            '/' => {
                if self.try_consume('/') {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash, LiteralValue::Null);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.add_token(TokenType::Newline, LiteralValue::Null),
            '"' => return self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            _ => return Err(self.fault("unexpected character")),
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), SyntaxFault> {
        while self.peek().is_some_and(|c| c != '"') {
            self.advance();
        }
        if self.peek().is_none() {
            return Err(self.fault("unterminated string"));
        }
        self.advance();
        let quoted = self.current_lexeme();
        let contents = &quoted[1..quoted.len() - 1];
        self.add_token(TokenType::String, LiteralValue::String(contents.to_owned()));
        Ok(())
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            let next_is_digit = lookahead
                .peek()
                .is_some_and(|(_, c)| c.is_ascii_digit());
            if next_is_digit {
                self.advance();
                return self.number_after_decimal_point();
            }
        }
        self.emit_number();
    }

    fn number_after_decimal_point(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.emit_number();
    }

    fn emit_number(&mut self) {
        let value: f64 = self
            .current_lexeme()
            .parse()
            .expect("numeric lexeme must parse as f64");
        self.add_token(TokenType::Number, LiteralValue::Number(value));
    }

    fn identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        let lexeme = self.current_lexeme();
        match keyword(lexeme) {
            Some(TokenType::True) => self.add_token(TokenType::True, LiteralValue::Bool(true)),
            Some(TokenType::False) => self.add_token(TokenType::False, LiteralValue::Bool(false)),
            Some(TokenType::Nil) => self.add_token(TokenType::Nil, LiteralValue::Null),
            Some(kind) => self.add_token(kind, LiteralValue::Null),
            None => self.add_token(TokenType::Identifier, LiteralValue::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenType> {
        Lexer::new(source)
            .scan()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_input_yields_only_eof() {
        assert_eq!(kinds(""), vec![TokenType::EndOfFile]);
    }

    #[test]
    fn whitespace_only_yields_only_eof() {
        assert_eq!(kinds(" \t\r"), vec![TokenType::EndOfFile]);
    }

    #[test]
    fn newline_is_its_own_token() {
        assert_eq!(
            kinds("\n"),
            vec![TokenType::Newline, TokenType::EndOfFile]
        );
    }

    #[test]
    fn line_comment_is_ignored() {
        assert_eq!(kinds("// hello\n"), vec![TokenType::Newline, TokenType::EndOfFile]);
    }

    #[test]
    fn two_character_operators_are_preferred() {
        assert_eq!(
            kinds("!= == >= <="),
            vec![
                TokenType::BangEqual,
                TokenType::EqualEqual,
                TokenType::GreaterEqual,
                TokenType::LessEqual,
                TokenType::EndOfFile
            ]
        );
    }

    #[test]
    fn single_character_fallback_when_no_equals_follows() {
        assert_eq!(
            kinds("! = > <"),
            vec![
                TokenType::Bang,
                TokenType::Equal,
                TokenType::Greater,
                TokenType::Less,
                TokenType::EndOfFile
            ]
        );
    }

    #[test]
    fn number_literal() {
        let tokens = Lexer::new("149.84").scan().unwrap();
        assert_eq!(tokens[0].kind, TokenType::Number);
        assert_eq!(tokens[0].literal, LiteralValue::Number(149.84));
    }

    #[test]
    fn leading_dot_number() {
        let tokens = Lexer::new(".5").scan().unwrap();
        assert_eq!(tokens[0].kind, TokenType::Number);
        assert_eq!(tokens[0].literal, LiteralValue::Number(0.5));
    }

    #[test]
    fn dot_without_digit_is_a_fault() {
        let err = Lexer::new(".h").scan().unwrap_err();
        assert_eq!(err.faults.len(), 1);
        assert_eq!(err.faults[0].message, "missing digit after decimal point");
    }

    #[test]
    fn unterminated_string_is_a_fault() {
        let err = Lexer::new("\"abc").scan().unwrap_err();
        assert_eq!(err.faults[0].message, "unterminated string");
    }

    #[test]
    fn unexpected_character_is_a_fault() {
        let err = Lexer::new("$").scan().unwrap_err();
        assert_eq!(err.faults[0].message, "unexpected character");
    }

    #[test]
    fn errors_are_aggregated_across_the_whole_scan() {
        let err = Lexer::new("$ @ #").scan().unwrap_err();
        assert_eq!(err.faults.len(), 3);
    }

    #[test]
    fn string_contents_exclude_delimiters() {
        let tokens = Lexer::new("\"hi\"").scan().unwrap();
        assert_eq!(tokens[0].literal, LiteralValue::String("hi".to_owned()));
    }

    #[test]
    fn keywords_are_recognized() {
        assert_eq!(
            kinds("and or if else true false null print var while"),
            vec![
                TokenType::And,
                TokenType::Or,
                TokenType::If,
                TokenType::Else,
                TokenType::True,
                TokenType::False,
                TokenType::Nil,
                TokenType::Print,
                TokenType::Var,
                TokenType::While,
                TokenType::EndOfFile
            ]
        );
    }

    #[test]
    fn identifier_not_matching_a_keyword() {
        let tokens = Lexer::new("printer").scan().unwrap();
        assert_eq!(tokens[0].kind, TokenType::Identifier);
        assert_eq!(tokens[0].lexeme, "printer");
    }

    #[test]
    fn non_ascii_letters_are_not_identifier_characters() {
        let err = Lexer::new("\u{3bb}").scan().unwrap_err();
        assert_eq!(err.faults[0].message, "unexpected character");
    }

    #[test]
    fn positions_are_monotone_and_bounded() {
        let source = "var x = 1\nprint x";
        let tokens = Lexer::new(source).scan().unwrap();
        let mut last_offset = 0;
        for token in &tokens {
            assert!(token.position.offset >= last_offset);
            assert!(token.position.offset + token.position.length <= source.len());
            last_offset = token.position.offset;
        }
    }
}
