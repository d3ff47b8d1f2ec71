use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::BinaryOp;

/// Numeric value flowing through every phase
///
/// Literals keep their integer/float distinction from the lexer onwards;
/// arithmetic promotes to float only when a float operand is involved or the
/// operator is division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
}

impl Number {
    /// Returns true for `0` and `0.0` (and `-0.0`)
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => *n == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    /// Returns true if the value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Widen to f64
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }

    /// Combine two numbers with a binary operator
    ///
    /// This is the single arithmetic routine shared by the evaluator and the
    /// constant folder, so both always produce identical values.
    pub fn apply(op: BinaryOp, lhs: Number, rhs: Number) -> Result<Number> {
        match op {
            BinaryOp::Add => match (lhs, rhs) {
                (Number::Int(l), Number::Int(r)) => l
                    .checked_add(r)
                    .map(Number::Int)
                    .ok_or_else(|| overflow(op, l, r)),
                (l, r) => Ok(Number::Float(l.as_f64() + r.as_f64())),
            },

            BinaryOp::Sub => match (lhs, rhs) {
                (Number::Int(l), Number::Int(r)) => l
                    .checked_sub(r)
                    .map(Number::Int)
                    .ok_or_else(|| overflow(op, l, r)),
                (l, r) => Ok(Number::Float(l.as_f64() - r.as_f64())),
            },

            BinaryOp::Mul => match (lhs, rhs) {
                (Number::Int(l), Number::Int(r)) => l
                    .checked_mul(r)
                    .map(Number::Int)
                    .ok_or_else(|| overflow(op, l, r)),
                (l, r) => Ok(Number::Float(l.as_f64() * r.as_f64())),
            },

            // Division is always true division
            BinaryOp::Div => {
                if rhs.is_zero() {
                    Err(Error::DivisionByZero)
                } else {
                    Ok(Number::Float(lhs.as_f64() / rhs.as_f64()))
                }
            }
        }
    }
}

fn overflow(op: BinaryOp, lhs: i64, rhs: i64) -> Error {
    Error::IntegerOverflow {
        op: op.symbol().to_string(),
        lhs,
        rhs,
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps the fractional part: 2.0, not 2
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        assert_eq!(
            Number::apply(BinaryOp::Add, Number::Int(2), Number::Int(3)).unwrap(),
            Number::Int(5)
        );
        assert_eq!(
            Number::apply(BinaryOp::Sub, Number::Int(2), Number::Int(3)).unwrap(),
            Number::Int(-1)
        );
        assert_eq!(
            Number::apply(BinaryOp::Mul, Number::Int(4), Number::Int(3)).unwrap(),
            Number::Int(12)
        );
    }

    #[test]
    fn test_float_operand_promotes() {
        assert_eq!(
            Number::apply(BinaryOp::Mul, Number::Float(2.5), Number::Int(4)).unwrap(),
            Number::Float(10.0)
        );
        assert_eq!(
            Number::apply(BinaryOp::Add, Number::Int(1), Number::Float(0.5)).unwrap(),
            Number::Float(1.5)
        );
    }

    #[test]
    fn test_division_is_true_division() {
        assert_eq!(
            Number::apply(BinaryOp::Div, Number::Int(6), Number::Int(3)).unwrap(),
            Number::Float(2.0)
        );
        assert_eq!(
            Number::apply(BinaryOp::Div, Number::Int(7), Number::Int(2)).unwrap(),
            Number::Float(3.5)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Number::apply(BinaryOp::Div, Number::Int(5), Number::Int(0)),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            Number::apply(BinaryOp::Div, Number::Int(5), Number::Float(0.0)),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_overflow() {
        let err = Number::apply(BinaryOp::Add, Number::Int(i64::MAX), Number::Int(1)).unwrap_err();
        assert!(matches!(err, Error::IntegerOverflow { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
    }
}
