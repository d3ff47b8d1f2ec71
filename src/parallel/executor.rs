//! Batch compiler
//!
//! Uses Rayon for work-stealing parallelism with a configurable thread count.
//! Every source gets its own `Compiler` phases, so compilations share nothing.

use crate::compiler::{CompilationResult, CompileOptions, Compiler};
use crate::error::{Error, Result};
use rayon::prelude::*;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

/// Compile a batch of sources in parallel
///
/// # Returns
/// * `Ok(results)` - one entry per source, in input order; each entry holds
///   that source's artifacts or the error that aborted it
/// * `Err(Error::ThreadPoolError)` - the worker pool could not be built
///
/// # Example
/// ```
/// use exprc::compiler::CompileOptions;
/// use exprc::parallel::{compile_all, ParallelConfig};
///
/// let results = compile_all(
///     &["1 + 1", "2 * (3 - 1)", "4 / 0"],
///     &CompileOptions::default(),
///     &ParallelConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert!(results[2].is_err());
/// ```
pub fn compile_all<S>(
    sources: &[S],
    options: &CompileOptions,
    config: &ParallelConfig,
) -> Result<Vec<Result<CompilationResult>>>
where
    S: AsRef<str> + Sync,
{
    // Empty batch fast path
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    let compiler = Compiler::new(*options);

    // Single source - no pool needed
    if sources.len() == 1 {
        return Ok(vec![compiler.compile(sources[0].as_ref())]);
    }

    let threads = config.max_parallelism.clamp(1, sources.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::ThreadPoolError(format!("Failed to create thread pool: {}", e)))?;

    tracing::debug!(sources = sources.len(), threads, "compiling batch");

    let results: Vec<Result<CompilationResult>> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| compiler.compile(source.as_ref()))
            .collect()
    });

    let failed = results.iter().filter(|r| r.is_err()).count();
    tracing::debug!(
        succeeded = results.len() - failed,
        failed,
        "batch complete"
    );

    Ok(results)
}
