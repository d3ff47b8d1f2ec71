//! # Exprc - A Small Arithmetic Expression Compiler
//!
//! A complete compiler pipeline for arithmetic expressions over integers and
//! floats: tokens, a syntax tree, three-address code, constant folding, an
//! assembly-style listing, and a tree-walking interpreter that computes the
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use exprc::runtime::Number;
//!
//! # fn main() -> exprc::Result<()> {
//! let result = exprc::compile("(2 + 3) * 4")?;
//!
//! assert_eq!(result.result, Number::Int(20));
//! assert_eq!(result.ast.to_string(), "BinOp(BinOp(2, +, 3), *, 4)");
//! # Ok(())
//! # }
//! ```
//!
//! ### Running the phases by hand
//!
//! ```rust
//! use exprc::{Evaluator, IrGenerator, Optimizer, Parser, Scanner};
//!
//! # fn main() -> exprc::Result<()> {
//! let tokens = Scanner::new("1 + 2 * 3").scan_tokens()?;
//! let ast = Parser::new(tokens).parse()?;
//!
//! let program = IrGenerator::new().generate(&ast);
//! assert_eq!(program.instructions[3].to_string(), "t3 = t1 * t2");
//!
//! let folded = Optimizer::new(1).optimize(&program.instructions)?;
//! assert_eq!(folded[4].to_string(), "t4 = 7");
//!
//! assert_eq!(Evaluator::new().evaluate(&ast)?.to_string(), "7");
//! # Ok(())
//! # }
//! ```
//!
//! ## Grammar
//!
//! ```text
//! expr   := term ( ('+' | '-') term )*
//! term   := factor ( ('*' | '/') factor )*
//! factor := NUMBER | '(' expr ')' | '-' factor
//! ```
//!
//! Operators are left associative. Unary minus is rewritten to `0 - factor`.
//!
//! ## Architecture
//!
//! ```text
//! Source → Scanner → Tokens → Parser → AST → SemanticChecker
//!                                       │         │
//!                                       │         └→ IrGenerator → Optimizer → AsmCodegen
//!                                       └→ Evaluator → Number
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Parser`] - Parses tokens into an [`AstNode`]
//! - [`SemanticChecker`] - Rejects division by a literal zero
//! - [`IrGenerator`] - Lowers the AST to three-address code
//! - [`Optimizer`] - Constant folding
//! - [`AsmCodegen`] - Assembly-style text listing
//! - [`Evaluator`] - Computes the value of the AST
//! - [`parallel::compile_all`] - Batch compilation on a thread pool
//!
//! ## Numbers
//!
//! Integer arithmetic stays integral and reports overflow; any float operand
//! makes the result a float. Division always yields a float. The evaluator and
//! the constant folder share one arithmetic routine ([`Number::apply`]), so
//! the folded program and the interpreter always agree.
//!
//! ## Error Handling
//!
//! Every phase reports through [`Error`]; the first error aborts the
//! compilation.
//!
//! ```rust
//! use exprc::error::ErrorPhase;
//!
//! let err = exprc::compile("5 / (2 - 2)").unwrap_err();
//! assert_eq!(err.to_string(), "Division by zero");
//! assert_eq!(err.phase(), ErrorPhase::Arithmetic);
//! ```
//!
//! ## Logging
//!
//! Phase boundaries emit `tracing` events at debug level, and the folder
//! emits one trace event per folded instruction. No subscriber is installed.

#![allow(clippy::only_used_in_recursion)] // False positive for recursive helper functions

/// Version of the exprc compiler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parallel;
pub mod parser;
pub mod runtime;
pub mod semantic;

// Re-export main types
pub use compiler::{
    AsmCodegen, CompilationResult, CompileOptions, Compiler, IrGenerator, Operand, Optimizer,
    TacInstruction, TacProgram, Temp,
};
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{AstNode, BinaryOp, Parser};
pub use runtime::{Evaluator, Number};
pub use semantic::SemanticChecker;

/// Compile an expression with default options
///
/// Shorthand for `Compiler::new(CompileOptions::default()).compile(source)`.
pub fn compile(source: &str) -> Result<CompilationResult> {
    Compiler::new(CompileOptions::default()).compile(source)
}
