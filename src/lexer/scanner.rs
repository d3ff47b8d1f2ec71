use super::token::{Token, TokenKind};
use crate::error::{Error, Result};
use crate::runtime::Number;

/// Pull-based scanner for arithmetic expressions
///
/// Each call to [`Scanner::next_token`] skips whitespace and produces exactly
/// one token. Once the input is exhausted every further call returns `End`.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens, ending with exactly one `End` token
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_end();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Produces the next token from the source
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return Ok(Token::new(TokenKind::End, self.current));
        }

        let c = self.advance();
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            c if c.is_ascii_digit() => self.scan_number()?,
            _ => {
                return Err(Error::LexicalError {
                    ch: c,
                    position: self.start,
                });
            }
        };

        Ok(Token::new(kind, self.start))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    /// Digits with at most one `.`; the first digit is already consumed
    fn scan_number(&mut self) -> Result<TokenKind> {
        let mut is_float = false;
        loop {
            let c = self.peek();
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !is_float {
                is_float = true;
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let invalid = || Error::InvalidNumber {
            literal: text.clone(),
            position: self.start,
        };

        let value = if is_float {
            let f = text.parse::<f64>().map_err(|_| invalid())?;
            // Out of range in either direction: overflow to inf, or a nonzero
            // literal that underflows to zero
            let underflow = f == 0.0 && text.chars().any(|c| matches!(c, '1'..='9'));
            if !f.is_finite() || underflow {
                return Err(invalid());
            }
            Number::Float(f)
        } else {
            Number::Int(text.parse::<i64>().map_err(|_| invalid())?)
        };

        Ok(TokenKind::Number(value))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }
}
