//! Error types for the exprc pipeline

use thiserror::Error;

/// Errors raised by any compilation phase
///
/// Every error is terminal for the compilation that raised it; no phase
/// recovers from or downgrades another phase's error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Character that starts no lexeme
    ///
    /// **Triggered by:** anything other than digits, `.`, whitespace or `+ - * / ( )`
    /// **Example:** `3 @ 2`
    #[error("Lexical error at position {position}: unexpected character '{ch}'")]
    LexicalError {
        /// Offending character
        ch: char,
        /// Character offset in the source
        position: usize,
    },

    /// Numeric literal that cannot be represented
    ///
    /// **Triggered by:** integer literals outside the i64 range
    #[error("Lexical error at position {position}: invalid number literal '{literal}'")]
    InvalidNumber {
        /// Literal text as written
        literal: String,
        /// Character offset in the source
        position: usize,
    },

    // Parse errors
    /// Unexpected token during parsing
    ///
    /// **Triggered by:** a token that does not fit the grammar, or trailing input
    /// **Example:** `3 + * 2`, `(1 + 2) 3`
    #[error("Syntax error at position {position}: {message}")]
    SyntaxError {
        /// Character offset of the offending token
        position: usize,
        /// Error description
        message: String,
    },

    /// Input ended while the grammar still required a token
    ///
    /// **Example:** `(1 + 2`, `4 *`, the empty string
    #[error("Unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEof {
        /// Character offset of the end of input
        position: usize,
        /// Description of what the parser needed
        expected: String,
    },

    // Semantic errors
    /// Statically detected invalid operation
    ///
    /// **Triggered by:** dividing by a literal zero, e.g. `5 / 0`
    #[error("Semantic error: {message}")]
    SemanticError {
        /// Error description
        message: String,
    },

    // Arithmetic errors
    /// Division by zero discovered while folding or evaluating
    ///
    /// **Example:** `5 / (2 - 2)`
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the i64 range
    #[error("Integer overflow: {lhs} {op} {rhs}")]
    IntegerOverflow {
        /// Operator symbol
        op: String,
        /// Left operand
        lhs: i64,
        /// Right operand
        rhs: i64,
    },

    // Resource errors
    /// Expression nested deeper than the configured limit
    #[error("Expression nesting exceeds limit of {limit}")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
    },

    /// Batch compilation could not build its worker pool
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

/// Pipeline phase an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    /// Raised by the lexer
    Lexical,
    /// Raised by the parser
    Syntax,
    /// Raised by the semantic checker
    Semantic,
    /// Raised by the optimizer or the evaluator
    Arithmetic,
    /// Raised by resource limits or the batch executor
    Resource,
}

impl Error {
    /// Create a syntax error at a source offset
    pub fn syntax(position: usize, msg: impl Into<String>) -> Self {
        Error::SyntaxError {
            position,
            message: msg.into(),
        }
    }

    /// Create a semantic error with a message
    pub fn semantic(msg: impl Into<String>) -> Self {
        Error::SemanticError {
            message: msg.into(),
        }
    }

    /// Classify the error by the phase that raised it
    pub fn phase(&self) -> ErrorPhase {
        match self {
            Error::LexicalError { .. } | Error::InvalidNumber { .. } => ErrorPhase::Lexical,
            Error::SyntaxError { .. } | Error::UnexpectedEof { .. } => ErrorPhase::Syntax,
            Error::SemanticError { .. } => ErrorPhase::Semantic,
            Error::DivisionByZero | Error::IntegerOverflow { .. } => ErrorPhase::Arithmetic,
            Error::NestingTooDeep { .. } | Error::ThreadPoolError(_) => ErrorPhase::Resource,
        }
    }

    /// Source offset the error points at, when it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::LexicalError { position, .. }
            | Error::InvalidNumber { position, .. }
            | Error::SyntaxError { position, .. }
            | Error::UnexpectedEof { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type for exprc operations
pub type Result<T> = std::result::Result<T, Error>;
