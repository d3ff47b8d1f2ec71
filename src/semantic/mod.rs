//! Static semantic checks over the expression tree

mod checker;

pub use checker::SemanticChecker;
