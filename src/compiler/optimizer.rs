//! # TAC Optimizer
//!
//! Optimization passes for the three-address code:
//! - Constant folding (with propagation through temporaries known to hold
//!   literals)
//!
//! Level 0 disables every pass. Levels above 1 currently run the same passes
//! as level 1.

use super::ir::{Operand, TacInstruction, Temp};
use crate::runtime::Number;
use crate::Result;
use std::collections::HashMap;

/// Optimizer with configurable optimization level
#[derive(Debug, Clone, Copy)]
pub struct Optimizer {
    level: u8,
}

impl Optimizer {
    /// Create a new optimizer with the specified optimization level
    pub fn new(level: u8) -> Self {
        Self { level }
    }

    /// Run all enabled passes and return the rewritten sequence
    ///
    /// The input is left untouched. Division by zero discovered while folding
    /// is reported as [`crate::Error::DivisionByZero`], the same error the
    /// evaluator raises.
    pub fn optimize(&self, instructions: &[TacInstruction]) -> Result<Vec<TacInstruction>> {
        let mut output = instructions.to_vec();

        if self.level >= 1 {
            self.constant_folding(&mut output)?;
        }

        Ok(output)
    }

    /// Constant folding - evaluate constant expressions at compile time
    fn constant_folding(&self, instructions: &mut [TacInstruction]) -> Result<()> {
        let mut constants: HashMap<Temp, Number> = HashMap::new();
        let mut folded = 0usize;

        for instr in instructions.iter_mut() {
            match instr {
                TacInstruction::Move(dst, src) => {
                    if let Some(value) = resolve(&constants, src) {
                        *src = Operand::Const(value);
                        constants.insert(*dst, value);
                    }
                }

                TacInstruction::Binary(op, dst, lhs, rhs) => {
                    let (op, dst) = (*op, *dst);
                    if let (Some(l), Some(r)) = (resolve(&constants, lhs), resolve(&constants, rhs))
                    {
                        let value = Number::apply(op, l, r)?;
                        tracing::trace!(
                            result = %dst,
                            op = %op,
                            lhs = %l,
                            rhs = %r,
                            value = %value,
                            "folded constant expression"
                        );
                        *instr = TacInstruction::Move(dst, Operand::Const(value));
                        constants.insert(dst, value);
                        folded += 1;
                    }
                }
            }
        }

        tracing::debug!(folded, "constant folding complete");
        Ok(())
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Literal value of an operand, if it is one or names a known constant
fn resolve(constants: &HashMap<Temp, Number>, operand: &Operand) -> Option<Number> {
    match operand {
        Operand::Const(n) => Some(*n),
        Operand::Temp(t) => constants.get(t).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ir::IrGenerator;
    use crate::lexer::Scanner;
    use crate::parser::{AstNode, BinaryOp, Parser};
    use crate::runtime::Evaluator;
    use crate::Error;

    fn parse(source: &str) -> AstNode {
        let tokens = Scanner::new(source).scan_tokens().unwrap();
        Parser::new(tokens).parse().unwrap()
    }

    fn lower(source: &str) -> Vec<TacInstruction> {
        IrGenerator::new().generate(&parse(source)).instructions
    }

    #[test]
    fn test_fold_binary_of_literals() {
        let input = vec![TacInstruction::Binary(
            BinaryOp::Add,
            Temp(0),
            Operand::Const(Number::Int(2)),
            Operand::Const(Number::Int(3)),
        )];
        let output = Optimizer::new(1).optimize(&input).unwrap();
        assert_eq!(
            output,
            vec![TacInstruction::Move(Temp(0), Operand::Const(Number::Int(5)))]
        );
    }

    #[test]
    fn test_fold_through_temporaries() {
        let output = Optimizer::new(1).optimize(&lower("1+2*3")).unwrap();

        assert_eq!(output.len(), 5);
        assert!(output.iter().all(|i| i.is_const_move()));
        assert_eq!(
            output.last(),
            Some(&TacInstruction::Move(Temp(4), Operand::Const(Number::Int(7))))
        );
    }

    #[test]
    fn test_unknown_operand_passes_through() {
        let input = vec![
            TacInstruction::Binary(
                BinaryOp::Mul,
                Temp(1),
                Operand::Temp(Temp(0)),
                Operand::Const(Number::Int(2)),
            ),
            TacInstruction::Move(Temp(2), Operand::Temp(Temp(1))),
        ];
        let output = Optimizer::new(1).optimize(&input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_move_from_known_temp_becomes_literal() {
        let input = vec![
            TacInstruction::Move(Temp(0), Operand::Const(Number::Float(1.5))),
            TacInstruction::Move(Temp(1), Operand::Temp(Temp(0))),
        ];
        let output = Optimizer::new(1).optimize(&input).unwrap();
        assert_eq!(
            output[1],
            TacInstruction::Move(Temp(1), Operand::Const(Number::Float(1.5)))
        );
    }

    #[test]
    fn test_level_zero_is_identity() {
        let input = lower("(1 + 2) * 3");
        let output = Optimizer::new(0).optimize(&input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = lower("4 / 2");
        let snapshot = input.clone();
        let _ = Optimizer::new(1).optimize(&input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_idempotent() {
        let optimizer = Optimizer::new(1);
        let once = optimizer.optimize(&lower("(1.5 + 2) * -3 / 4 - 10")).unwrap();
        let twice = optimizer.optimize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_division_by_folded_zero() {
        let result = Optimizer::new(1).optimize(&lower("5 / (2 - 2)"));
        assert_eq!(result, Err(Error::DivisionByZero));
    }

    #[test]
    fn test_division_by_zero_untouched_at_level_zero() {
        let input = lower("5 / (2 - 2)");
        assert!(Optimizer::new(0).optimize(&input).is_ok());
    }

    #[test]
    fn test_agrees_with_evaluator() {
        for source in ["2+3*4", "(2+3)*4", "1-2-3", "7/2", "-(2.5*2)", "3*(1.25-0.25)/-4"] {
            let ast = parse(source);
            let expected = Evaluator::new().evaluate(&ast).unwrap();
            let folded = Optimizer::new(1)
                .optimize(&IrGenerator::new().generate(&ast).instructions)
                .unwrap();
            assert_eq!(
                folded.last().and_then(|i| i.arg1().as_const()),
                Some(expected),
                "mismatch for {source}"
            );
        }
    }
}
