use super::value::Number;
use crate::error::Result;
use crate::parser::AstNode;

/// Tree-walking evaluator
///
/// Independent of the TAC path; division by an evaluated zero is always
/// reported here, whatever the static checker saw.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates a tree, left operand before right
    pub fn evaluate(&self, node: &AstNode) -> Result<Number> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::BinaryOp { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Number::apply(*op, left, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::lexer::Scanner;
    use crate::parser::Parser;

    fn eval(source: &str) -> Result<Number> {
        let tokens = Scanner::new(source).scan_tokens()?;
        let ast = Parser::new(tokens).parse()?;
        Evaluator::new().evaluate(&ast)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2+3*4").unwrap(), Number::Int(14));
        assert_eq!(eval("(2+3)*4").unwrap(), Number::Int(20));
        assert_eq!(eval("1-2-3").unwrap(), Number::Int(-4));
        assert_eq!(eval("2.5 * 4 + 1.5").unwrap(), Number::Float(11.5));
        assert_eq!(eval("100 / (2 + 3) - 5").unwrap(), Number::Float(15.0));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-(4-2)*(3+1)").unwrap(), Number::Int(-8));
        assert_eq!(eval("-2.5").unwrap(), Number::Float(-2.5));
    }

    #[test]
    fn test_dynamic_division_by_zero() {
        assert_eq!(eval("5/(2-2)"), Err(Error::DivisionByZero));
        assert_eq!(eval("1/(0.5-0.5)"), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_left_error_wins() {
        // Left is evaluated first, so its error surfaces even if right also fails
        let err = eval("(1/(1-1)) + 9223372036854775807 * 2").unwrap_err();
        assert_eq!(err, Error::DivisionByZero);
    }
}
