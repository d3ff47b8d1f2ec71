//! Parallel compilation support
//!
//! Compiles many independent expressions concurrently.

mod executor;

pub use executor::{compile_all, ParallelConfig};
