//! Lexical analysis for exprc
//!
//! Converts source text into tokens one lexeme at a time.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
