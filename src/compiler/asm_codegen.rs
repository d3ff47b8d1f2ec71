//! Assembly listing generation
//!
//! Translates TAC into a simplified two-operand assembly text:
//!
//! ```text
//! t0 = 1           ->  MOV t0, 1
//! t3 = t1 * t2     ->  MOV t3, t1
//!                      MUL t3, t2
//! ```
//!
//! Temporaries stand in for registers; there is no allocation.

use super::ir::{Operand, TacInstruction, Temp};
use crate::parser::BinaryOp;
use std::fmt;

/// Arithmetic opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsmOpcode {
    /// dst = dst + src
    Add,
    /// dst = dst - src
    Sub,
    /// dst = dst * src
    Mul,
    /// dst = dst / src (true division)
    Div,
}

impl AsmOpcode {
    /// Upper-case mnemonic as printed in the listing
    pub fn mnemonic(&self) -> &'static str {
        match self {
            AsmOpcode::Add => "ADD",
            AsmOpcode::Sub => "SUB",
            AsmOpcode::Mul => "MUL",
            AsmOpcode::Div => "DIV",
        }
    }
}

impl From<BinaryOp> for AsmOpcode {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => AsmOpcode::Add,
            BinaryOp::Sub => AsmOpcode::Sub,
            BinaryOp::Mul => AsmOpcode::Mul,
            BinaryOp::Div => AsmOpcode::Div,
        }
    }
}

/// One line of the assembly listing
#[derive(Debug, Clone, PartialEq)]
pub enum AsmInstruction {
    /// MOV dst, src
    Mov(Temp, Operand),
    /// <OP> dst, src  (dst = dst op src)
    Alu(AsmOpcode, Temp, Operand),
}

impl fmt::Display for AsmInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmInstruction::Mov(dst, src) => write!(f, "MOV {}, {}", dst, src),
            AsmInstruction::Alu(opcode, dst, src) => {
                write!(f, "{} {}, {}", opcode.mnemonic(), dst, src)
            }
        }
    }
}

/// Assembly code generator
#[derive(Debug, Default)]
pub struct AsmCodegen {
    /// Generated instructions
    instructions: Vec<AsmInstruction>,
}

impl AsmCodegen {
    /// Create a new code generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the listing for a TAC sequence, one instruction per line
    pub fn generate(&mut self, tac: &[TacInstruction]) -> String {
        self.instructions.clear();

        for instr in tac {
            match instr {
                TacInstruction::Move(dst, src) => {
                    self.emit(AsmInstruction::Mov(*dst, *src));
                }
                TacInstruction::Binary(op, dst, lhs, rhs) => {
                    self.emit(AsmInstruction::Mov(*dst, *lhs));
                    self.emit(AsmInstruction::Alu((*op).into(), *dst, *rhs));
                }
            }
        }

        self.instructions
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Instructions produced by the last call to [`generate`](Self::generate)
    pub fn instructions(&self) -> &[AsmInstruction] {
        &self.instructions
    }

    fn emit(&mut self, instr: AsmInstruction) {
        self.instructions.push(instr);
    }
}
