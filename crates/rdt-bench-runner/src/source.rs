use rdt_bench_abstract::ProtocolId;
use std::path::PathBuf;
use tracing::debug;

use crate::error::TrialError;
use crate::extract::{AtTimePattern, TimingExtractor};
use crate::invoker::ProcessInvoker;

/// Anything that can produce one completion-time sample per call.
pub trait TimingSource {
    fn measure(&mut self, protocol: &ProtocolId, args: &[String]) -> Result<f64, TrialError>;
}

/// Runs the protocol executable and scrapes its stdout with `E`.
#[derive(Debug, Clone)]
pub struct ExecutableTimingSource<E = AtTimePattern> {
    invoker: ProcessInvoker,
    extractor: E,
}

impl ExecutableTimingSource<AtTimePattern> {
    pub fn new(binaries_dir: impl Into<PathBuf>) -> Self {
        Self::with_extractor(ProcessInvoker::new(binaries_dir), AtTimePattern::new())
    }
}

impl<E: TimingExtractor> ExecutableTimingSource<E> {
    pub fn with_extractor(invoker: ProcessInvoker, extractor: E) -> Self {
        Self { invoker, extractor }
    }

    pub fn invoker(&self) -> &ProcessInvoker {
        &self.invoker
    }
}

impl<E: TimingExtractor> TimingSource for ExecutableTimingSource<E> {
    fn measure(&mut self, protocol: &ProtocolId, args: &[String]) -> Result<f64, TrialError> {
        let output = self.invoker.invoke(protocol, args)?;
        let token = self.extractor.extract(&output)?;
        debug!("{} reported completion at {}", protocol, token);
        token.parse::<f64>().map_err(|_| TrialError::InvalidTiming {
            token: token.to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{ExecutableTimingSource, TimingSource};
    use crate::TrialError;
    use crate::extract::TimingExtractor;
    use crate::invoker::ProcessInvoker;
    use crate::testutil::ScratchDir;
    use rdt_bench_abstract::{ProtocolId, SimulationConfig};

    #[test]
    fn measures_simulator_style_output() {
        let dir = ScratchDir::new("source-ok");
        dir.script(
            "selectiveRepeat",
            "echo '-----  Selective Repeat Network Simulator Version 1.1 --------'\n\
             echo \"the number of messages to simulate: $1\"\n\
             echo ' Simulator terminated at time 1043.250000'\n\
             echo ' after sending 10 msgs from layer5'",
        );

        let mut source = ExecutableTimingSource::new(dir.path());
        let args = SimulationConfig::default().to_args();
        let ms = source
            .measure(&ProtocolId::new("selectiveRepeat"), &args)
            .unwrap();
        assert_eq!(ms, 1043.25);
    }

    #[test]
    fn silent_crash_is_timing_not_found() {
        let dir = ScratchDir::new("source-crash");
        dir.script("goBackN", "echo 'Segmentation fault' >&2; exit 139");

        let mut source = ExecutableTimingSource::new(dir.path());
        let err = source.measure(&ProtocolId::new("goBackN"), &[]).unwrap_err();
        assert!(matches!(err, TrialError::TimingNotFound));
    }

    struct RawToken;

    impl TimingExtractor for RawToken {
        fn extract<'a>(&self, output: &'a str) -> Result<&'a str, TrialError> {
            Ok(output.trim())
        }
    }

    #[test]
    fn unparsable_token_is_invalid_timing() {
        let dir = ScratchDir::new("source-invalid");
        dir.script("altBit", "echo soon");

        let mut source =
            ExecutableTimingSource::with_extractor(ProcessInvoker::new(dir.path()), RawToken);
        let err = source.measure(&ProtocolId::new("altBit"), &[]).unwrap_err();
        match err {
            TrialError::InvalidTiming { token } => assert_eq!(token, "soon"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
