//! TAC program definition

use serde::Serialize;

use super::instruction::{TacInstruction, Temp};

/// Lowered expression: instructions in emission order plus the temporary
/// holding the overall result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacProgram {
    /// All instructions in linear order
    pub instructions: Vec<TacInstruction>,
    /// Temporary produced by the root of the tree
    pub result: Temp,
}

impl TacProgram {
    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
