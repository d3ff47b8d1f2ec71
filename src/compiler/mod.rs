//! # Expression Compiler
//!
//! Drives an arithmetic expression through every phase and collects the
//! artifacts each one produces.
//!
//! ## Architecture
//!
//! ```text
//! Source → Tokens → AST → Semantic Check → TAC → Fold → Assembly
//!                    └──────────────→ Evaluate ──────────→ Result
//! ```
//!
//! ## Usage
//!
//! ```
//! use exprc::compiler::{CompileOptions, Compiler};
//!
//! let compiler = Compiler::new(CompileOptions::default());
//! let result = compiler.compile("(2 + 3) * 4").unwrap();
//! assert_eq!(result.result.to_string(), "20");
//! ```

pub mod asm_codegen;
pub mod debug;
pub mod ir;
pub mod optimizer;

pub use asm_codegen::{AsmCodegen, AsmInstruction, AsmOpcode};
pub use debug::{format_tac, format_tokens, render_report};
pub use ir::{IrGenerator, Operand, TacInstruction, TacProgram, Temp};
pub use optimizer::Optimizer;

use crate::lexer::{Scanner, Token};
use crate::parser::{AstNode, Parser, DEFAULT_MAX_DEPTH};
use crate::runtime::{Evaluator, Number};
use crate::semantic::SemanticChecker;
use crate::Result;
use serde::Serialize;

/// Compilation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Optimization level (0 disables folding)
    pub opt_level: u8,
    /// Maximum nesting depth accepted by the parser
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            opt_level: 1,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Artifacts of one successful compilation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilationResult {
    /// Every token up to and including END
    pub tokens: Vec<Token>,
    /// Parsed expression tree
    pub ast: AstNode,
    /// TAC as generated
    pub tac: Vec<TacInstruction>,
    /// TAC after optimization
    pub optimized_tac: Vec<TacInstruction>,
    /// Assembly listing of the optimized TAC
    pub assembly: String,
    /// Value of the expression
    pub result: Number,
}

impl CompilationResult {
    /// Structured JSON form of every artifact
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Arithmetic expression compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a new compiler with options
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Options this compiler was created with
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile one expression
    ///
    /// The first failing phase aborts the compilation; no partial artifacts
    /// are returned.
    pub fn compile(&self, source: &str) -> Result<CompilationResult> {
        // Phase 1: Lex
        let tokens = Scanner::new(source).scan_tokens()?;
        tracing::debug!(count = tokens.len(), "lexed tokens");

        // Phase 2: Parse (also enforces max_depth)
        let ast = Parser::new(tokens.clone())
            .with_max_depth(self.options.max_depth)
            .parse()?;
        tracing::debug!(depth = ast.depth(), literals = ast.literal_count(), "parsed expression");

        // Phase 3: Semantic check
        SemanticChecker::new().check(&ast)?;

        // Phase 4: Lower to TAC
        let program = IrGenerator::new().generate(&ast);
        tracing::debug!(
            instructions = program.len(),
            result = %program.result,
            "generated TAC"
        );

        // Phase 5: Optimize
        let optimized_tac = Optimizer::new(self.options.opt_level).optimize(&program.instructions)?;
        tracing::debug!(
            level = self.options.opt_level,
            instructions = optimized_tac.len(),
            "optimized TAC"
        );

        // Phase 6: Assembly
        let assembly = AsmCodegen::new().generate(&optimized_tac);

        // Phase 7: Evaluate
        let result = Evaluator::new().evaluate(&ast)?;
        tracing::debug!(%result, "evaluated expression");

        Ok(CompilationResult {
            tokens,
            ast,
            tac: program.instructions,
            optimized_tac,
            assembly,
            result,
        })
    }
}
