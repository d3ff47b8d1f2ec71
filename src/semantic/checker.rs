//! # Semantic Checker
//!
//! Rejects statically invalid trees before any IR is generated. The only rule
//! today is division by a literal zero. The check is purely syntactic: a
//! divisor that only becomes zero after folding (`5 / (2 - 2)`) passes here
//! and is reported by the optimizer or the evaluator instead.

use crate::error::{Error, Result};
use crate::parser::{AstNode, BinaryOp};

/// Semantic checker for expression trees
#[derive(Debug, Default)]
pub struct SemanticChecker;

impl SemanticChecker {
    /// Creates a new semantic checker
    pub fn new() -> Self {
        SemanticChecker
    }

    /// Checks a tree, children before parents, stopping at the first error
    pub fn check(&self, node: &AstNode) -> Result<()> {
        match node {
            AstNode::Number(_) => Ok(()),
            AstNode::BinaryOp { op, left, right } => {
                self.check(left)?;
                self.check(right)?;

                if *op == BinaryOp::Div {
                    if let AstNode::Number(divisor) = right.as_ref() {
                        if divisor.is_zero() {
                            return Err(Error::semantic("division by zero"));
                        }
                    }
                }

                Ok(())
            }
        }
    }
}
