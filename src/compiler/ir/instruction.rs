//! IR instruction definitions

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use crate::parser::BinaryOp;
use crate::runtime::Number;

/// Compiler-generated temporary, printed as `t<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temp(pub u32);

impl fmt::Display for Temp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl Serialize for Temp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Instruction argument: a literal or an earlier instruction's result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Literal numeric value
    Const(Number),
    /// Reference to a temporary
    Temp(Temp),
}

impl Operand {
    /// The literal value, if this operand is one
    pub fn as_const(&self) -> Option<Number> {
        match self {
            Operand::Const(n) => Some(*n),
            Operand::Temp(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Const(n) => write!(f, "{}", n),
            Operand::Temp(t) => write!(f, "{}", t),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Const(n) => n.serialize(serializer),
            Operand::Temp(t) => t.serialize(serializer),
        }
    }
}

/// TAC instruction
#[derive(Debug, Clone, PartialEq)]
pub enum TacInstruction {
    /// Move: result = arg1
    Move(Temp, Operand),
    /// Binary operation: result = arg1 op arg2
    Binary(BinaryOp, Temp, Operand, Operand),
}

impl TacInstruction {
    /// Temporary written by this instruction
    pub fn result(&self) -> Temp {
        match self {
            TacInstruction::Move(dst, _) | TacInstruction::Binary(_, dst, _, _) => *dst,
        }
    }

    /// Operator, absent for a move
    pub fn op(&self) -> Option<BinaryOp> {
        match self {
            TacInstruction::Move(..) => None,
            TacInstruction::Binary(op, ..) => Some(*op),
        }
    }

    /// First argument
    pub fn arg1(&self) -> Operand {
        match self {
            TacInstruction::Move(_, src) | TacInstruction::Binary(_, _, src, _) => *src,
        }
    }

    /// Second argument, absent for a move
    pub fn arg2(&self) -> Option<Operand> {
        match self {
            TacInstruction::Move(..) => None,
            TacInstruction::Binary(_, _, _, rhs) => Some(*rhs),
        }
    }

    /// Returns true for a move of a literal
    pub fn is_const_move(&self) -> bool {
        matches!(self, TacInstruction::Move(_, Operand::Const(_)))
    }
}

impl fmt::Display for TacInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TacInstruction::Move(dst, src) => write!(f, "{} = {}", dst, src),
            TacInstruction::Binary(op, dst, lhs, rhs) => {
                write!(f, "{} = {} {} {}", dst, lhs, op, rhs)
            }
        }
    }
}

// Serialized as a flat (result, op?, arg1, arg2?) record
impl Serialize for TacInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TacInstruction", 4)?;
        state.serialize_field("result", &self.result())?;
        state.serialize_field("op", &self.op().map(|op| op.symbol()))?;
        state.serialize_field("arg1", &self.arg1())?;
        state.serialize_field("arg2", &self.arg2())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mov = TacInstruction::Move(Temp(0), Operand::Const(Number::Int(1)));
        assert_eq!(mov.result(), Temp(0));
        assert_eq!(mov.op(), None);
        assert_eq!(mov.arg2(), None);
        assert!(mov.is_const_move());

        let add = TacInstruction::Binary(
            BinaryOp::Add,
            Temp(2),
            Operand::Temp(Temp(0)),
            Operand::Temp(Temp(1)),
        );
        assert_eq!(add.op(), Some(BinaryOp::Add));
        assert_eq!(add.arg1(), Operand::Temp(Temp(0)));
        assert_eq!(add.arg2(), Some(Operand::Temp(Temp(1))));
        assert!(!add.is_const_move());
    }

    #[test]
    fn test_display() {
        let mul = TacInstruction::Binary(
            BinaryOp::Mul,
            Temp(3),
            Operand::Temp(Temp(1)),
            Operand::Const(Number::Float(0.5)),
        );
        assert_eq!(mul.to_string(), "t3 = t1 * 0.5");
    }

    #[test]
    fn test_serialize_record() {
        let mov = TacInstruction::Move(Temp(4), Operand::Const(Number::Int(7)));
        let json = serde_json::to_value(&mov).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"result": "t4", "op": null, "arg1": 7, "arg2": null})
        );

        let sub = TacInstruction::Binary(
            BinaryOp::Sub,
            Temp(2),
            Operand::Temp(Temp(0)),
            Operand::Temp(Temp(1)),
        );
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"result": "t2", "op": "-", "arg1": "t0", "arg2": "t1"})
        );
    }
}
