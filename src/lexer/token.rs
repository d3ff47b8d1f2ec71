use serde::{Deserialize, Serialize};

use crate::runtime::Number;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Character offset where the token starts (0-indexed)
    pub position: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Token { kind, position }
    }

    /// Literal value, present only for number tokens
    pub fn value(&self) -> Option<Number> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true for the terminal END token
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(
                f,
                "Token({}, {}, pos={})",
                self.kind.name(),
                value,
                self.position
            ),
            None => write!(f, "Token({}, pos={})", self.kind.name(), self.position),
        }
    }
}

/// All token types of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Numeric literal (integer or float)
    Number(Number),
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// End of input marker
    End,
}

impl TokenKind {
    /// Upper-case kind name used in token listings
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::End => "END",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}
