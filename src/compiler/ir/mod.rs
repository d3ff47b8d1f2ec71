//! # Three-Address Code (TAC) IR
//!
//! The expression tree is lowered to a linear sequence of three-address
//! instructions, each writing one fresh temporary.
//!
//! ## Module Structure
//!
//! ```text
//! ir/
//! ├── mod.rs          # This file - module definition and re-exports
//! ├── instruction.rs  # Temp, Operand, TacInstruction
//! ├── program.rs      # TacProgram (instruction list + result temporary)
//! └── generator.rs    # IrGenerator (post-order AST lowering)
//! ```

mod generator;
mod instruction;
mod program;

pub use generator::IrGenerator;
pub use instruction::{Operand, TacInstruction, Temp};
pub use program::TacProgram;
