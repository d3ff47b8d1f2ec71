//! Direct interpretation of expression trees

mod evaluator;
mod value;

pub use evaluator::Evaluator;
pub use value::Number;
