use rdt_bench_abstract::ProtocolId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single invoke-and-extract cycle.
#[derive(Debug, Error)]
pub enum TrialError {
    #[error("executable not found at {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("failed to launch {}", .path.display())]
    ProcessLaunchFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no `at time <ms>` annotation in simulator output")]
    TimingNotFound,

    #[error("timing token `{token}` is not a number")]
    InvalidTiming { token: String },
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("trial count must be at least 1")]
    NoTrials,

    #[error("[{protocol}] trial {trial}/{trials} failed")]
    Trial {
        protocol: ProtocolId,
        trial: usize,
        trials: usize,
        #[source]
        source: TrialError,
    },

    #[error("failed to write report")]
    Report(#[from] io::Error),
}

impl BenchError {
    /// The underlying trial failure, if this run died inside a trial.
    pub fn trial_error(&self) -> Option<&TrialError> {
        match self {
            BenchError::Trial { source, .. } => Some(source),
            _ => None,
        }
    }
}
