//! exprc Parser Module
//!
//! Parses the token stream into an Abstract Syntax Tree (AST) by recursive
//! descent over a three-level precedence grammar.

mod ast;
mod expr_parser;

pub use ast::{AstNode, BinaryOp};
pub use expr_parser::{Parser, DEFAULT_MAX_DEPTH};
