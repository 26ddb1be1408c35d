use tracing::{debug, trace};

use crate::diagnostics::{Diagnostics, Reporter, Silent};
use crate::error::{Diagnostic, ScanError};

pub use keywords::keyword;
pub use token::{Literal, Token, TokenKind};

mod keywords;
pub mod token;

/// Result of scanning one source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<'source> {
    pub tokens: Vec<Token<'source>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Scan<'_> {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scans `source` in one pass, collecting diagnostics without echoing them.
pub fn scan(source: &[u8]) -> Scan<'_> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'source, R = Silent> {
    source: &'source [u8],
    start: usize,
    current: usize,
    line: usize,
    diagnostics: Diagnostics<R>,
    finished: bool,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source [u8]) -> Self {
        Self::with_reporter(source, Silent)
    }
}

impl<'source, R: Reporter> Scanner<'source, R> {
    pub fn with_reporter(source: &'source [u8], reporter: R) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            diagnostics: Diagnostics::new(reporter),
            finished: false,
        }
    }

    pub fn scan_tokens(mut self) -> Scan<'source> {
        let tokens: Vec<_> = self.by_ref().collect();
        let diagnostics = self.finish();
        debug!(tokens = tokens.len(), errors = diagnostics.len(), "scan complete");
        Scan { tokens, diagnostics }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.count()
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.finish()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source[self.current];
        self.current += 1;
        byte
    }

    /// Consumes one lexeme, returning its token if it produces one.
    fn scan_token(&mut self) -> Option<Token<'source>> {
        self.start = self.current;
        let byte = self.advance();
        match byte {
            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b'-' => self.make_token(TokenKind::Minus),
            b'+' => self.make_token(TokenKind::Plus),
            b';' => self.make_token(TokenKind::Semicolon),
            b'*' => self.make_token(TokenKind::Star),
            b'!' => match self.is_match(b'=') {
                true => self.make_token(TokenKind::BangEqual),
                false => self.make_token(TokenKind::Bang),
            },
            b'=' => match self.is_match(b'=') {
                true => self.make_token(TokenKind::EqualEqual),
                false => self.make_token(TokenKind::Equal),
            },
            b'<' => match self.is_match(b'=') {
                true => self.make_token(TokenKind::LessEqual),
                false => self.make_token(TokenKind::Less),
            },
            b'>' => match self.is_match(b'=') {
                true => self.make_token(TokenKind::GreaterEqual),
                false => self.make_token(TokenKind::Greater),
            },
            b'/' => match self.is_match(b'/') {
                true => {
                    self.skip_comment();
                    None
                }
                false => self.make_token(TokenKind::Slash),
            },
            b' ' | b'\r' | b'\t' => None,
            b'\n' => {
                self.line += 1;
                None
            }
            b'"' => self.make_string_token(),
            b if is_digit(b) => self.make_number_token(),
            b if is_alpha(b) => self.make_identifier_token(),
            b => {
                self.diagnostics.error(self.line, ScanError::UnexpectedCharacter(b));
                None
            }
        }
    }

    fn lexeme(&self) -> &'source [u8] {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Option<Token<'source>> {
        self.make_literal_token(kind, Literal::Absent)
    }

    fn make_literal_token(
        &self,
        kind: TokenKind,
        literal: Literal<'source>,
    ) -> Option<Token<'source>> {
        let token = Token::new(kind, self.lexeme(), literal, self.line);
        trace!(kind = %token.kind, line = token.line, "token");
        Some(token)
    }

    fn make_string_token(&mut self) -> Option<Token<'source>> {
        while self.peek() != Some(b'"') && !self.is_at_end() {
            if self.advance() == b'\n' {
                self.line += 1
            }
        }
        if self.is_at_end() {
            self.diagnostics.error(self.line, ScanError::UnterminatedString);
            return None;
        }
        self.current += 1;
        let contents = &self.source[self.start + 1..self.current - 1];
        self.make_literal_token(TokenKind::String, Literal::String(contents))
    }

    fn make_number_token(&mut self) -> Option<Token<'source>> {
        self.skip_digits();
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(is_digit) {
            self.current += 1;
            self.skip_digits();
        }
        // digits with at most one interior dot always parse
        let number = std::str::from_utf8(self.lexeme())
            .ok()
            .and_then(|text| text.parse().ok())
            .unwrap_or(f64::NAN);
        self.make_literal_token(TokenKind::Number, Literal::Number(number))
    }

    fn make_identifier_token(&mut self) -> Option<Token<'source>> {
        while self.peek().is_some_and(|byte| is_digit(byte) || is_alpha(byte)) {
            self.current += 1;
        }
        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn is_match(&mut self, byte: u8) -> bool {
        if self.peek() != Some(byte) {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.get(self.current + 1).copied()
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1
        }
    }

    // stops before the newline so the dispatch loop counts it
    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|byte| byte != b'\n') {
            self.current += 1
        }
    }
}

impl<'source, R: Reporter> Iterator for Scanner<'source, R> {
    type Item = Token<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.is_at_end() {
            if let Some(token) = self.scan_token() {
                return Some(token);
            }
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        self.start = self.current;
        self.make_token(TokenKind::Eof)
    }
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}
