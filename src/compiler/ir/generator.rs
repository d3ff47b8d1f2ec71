//! IR Generator - lowers the expression tree to TAC
//!
//! Post-order walk: a literal becomes a move into a fresh temporary; a binary
//! node lowers its left child, then its right child, then emits one
//! instruction combining the two temporaries. Every literal gets its own move,
//! equal sub-expressions are never shared.

use super::instruction::{Operand, TacInstruction, Temp};
use super::program::TacProgram;
use crate::parser::AstNode;

/// IR Generator - transforms the AST into TAC
///
/// The temporary counter lives in the instance, so concurrent compilations
/// using separate generators never interfere.
#[derive(Debug, Default)]
pub struct IrGenerator {
    /// Next available temporary id
    next_temp: u32,
    /// Generated instructions
    instructions: Vec<TacInstruction>,
}

impl IrGenerator {
    /// Create a new IR generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate TAC for a whole tree, numbering temporaries from `t0`
    pub fn generate(&mut self, ast: &AstNode) -> TacProgram {
        self.next_temp = 0;
        self.instructions.clear();

        let result = self.lower(ast);

        TacProgram {
            instructions: std::mem::take(&mut self.instructions),
            result,
        }
    }

    fn lower(&mut self, node: &AstNode) -> Temp {
        match node {
            AstNode::Number(n) => {
                let dst = self.alloc_temp();
                self.emit(TacInstruction::Move(dst, Operand::Const(*n)));
                dst
            }
            AstNode::BinaryOp { op, left, right } => {
                let lhs = self.lower(left);
                let rhs = self.lower(right);
                let dst = self.alloc_temp();
                self.emit(TacInstruction::Binary(
                    *op,
                    dst,
                    Operand::Temp(lhs),
                    Operand::Temp(rhs),
                ));
                dst
            }
        }
    }

    fn alloc_temp(&mut self) -> Temp {
        let temp = Temp(self.next_temp);
        self.next_temp += 1;
        temp
    }

    fn emit(&mut self, instr: TacInstruction) {
        self.instructions.push(instr);
    }
}
