use serde::{Deserialize, Serialize};
use std::fmt;

use crate::runtime::Number;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
}

impl BinaryOp {
    /// Source symbol of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree
///
/// Every node exclusively owns its children, so trees are built bottom-up and
/// cannot share sub-trees or form cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AstNode {
    /// Numeric literal
    Number(Number),
    /// Binary operation
    BinaryOp {
        /// Operator
        op: BinaryOp,
        /// Left operand
        left: Box<AstNode>,
        /// Right operand
        right: Box<AstNode>,
    },
}

impl AstNode {
    /// Literal node
    pub fn number(value: impl Into<Number>) -> Self {
        AstNode::Number(value.into())
    }

    /// Binary node over two fully built children
    pub fn binary(op: BinaryOp, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Height of the tree (a lone literal has depth 1)
    ///
    /// Walks with an explicit stack rather than recursing.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            if let AstNode::BinaryOp { left, right, .. } = node {
                stack.push((left.as_ref(), depth + 1));
                stack.push((right.as_ref(), depth + 1));
            }
        }

        max
    }

    /// Number of literal leaves in the tree
    pub fn literal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                AstNode::Number(_) => count += 1,
                AstNode::BinaryOp { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }

        count
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AstNode::Number(n) => write!(f, "{}", n),
            AstNode::BinaryOp { op, left, right } => {
                write!(f, "BinOp({}, {}, {})", left, op, right)
            }
        }
    }
}
