pub mod aggregate;
pub mod error;
pub mod extract;
pub mod invoker;
pub mod source;

#[cfg(test)]
mod testutil;

pub use aggregate::{Aggregator, mean, run_suite};
pub use error::{BenchError, TrialError};
pub use extract::{AtTimePattern, TimingExtractor};
pub use invoker::ProcessInvoker;
pub use source::{ExecutableTimingSource, TimingSource};
