use rdt_bench_abstract::{AveragingMode, BenchReport, BenchSuite, ProtocolSummary};
use std::io::Write;
use tracing::{debug, info};

use crate::error::BenchError;
use crate::source::{ExecutableTimingSource, TimingSource};

/// Arithmetic mean. Empty input yields NaN.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Runs every protocol of a suite `trials` times, strictly one process at a
/// time, and reports a mean per protocol.
pub struct Aggregator<'a> {
    suite: &'a BenchSuite,
}

impl<'a> Aggregator<'a> {
    pub fn new(suite: &'a BenchSuite) -> Self {
        Self { suite }
    }

    /// Drive all trials through `source`, writing one report line to `out`
    /// as soon as each protocol finishes.
    ///
    /// The first failing trial aborts the run; protocols that did not
    /// complete get no line.
    pub fn run(
        &self,
        source: &mut dyn TimingSource,
        out: &mut dyn Write,
    ) -> Result<Vec<ProtocolSummary>, BenchError> {
        let trials = self.suite.trials;
        if trials == 0 {
            return Err(BenchError::NoTrials);
        }

        let args = self.suite.simulation.to_args();
        let mut samples: Vec<f64> = Vec::with_capacity(trials * self.suite.protocols.len());
        let mut summaries = Vec::with_capacity(self.suite.protocols.len());

        for protocol in &self.suite.protocols {
            info!("Benchmarking {} ({} trials)", protocol, trials);
            if self.suite.averaging == AveragingMode::PerProtocol {
                samples.clear();
            }

            for trial in 1..=trials {
                let ms = source
                    .measure(protocol, &args)
                    .map_err(|source| BenchError::Trial {
                        protocol: protocol.clone(),
                        trial,
                        trials,
                        source,
                    })?;
                debug!("{} trial {}/{}: {}ms", protocol, trial, trials, ms);
                samples.push(ms);
            }

            let summary = ProtocolSummary {
                protocol: protocol.clone(),
                mean_ms: mean(&samples),
                samples: samples.len(),
            };
            writeln!(out, "{}", summary.report_line())?;
            out.flush()?;
            info!(
                "{} done: mean {}ms over {} samples",
                protocol, summary.mean_ms, summary.samples
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }
}

/// Benchmark the suite's protocols against the real executables.
pub fn run_suite(suite: &BenchSuite, out: &mut dyn Write) -> Result<BenchReport, BenchError> {
    let mut source = ExecutableTimingSource::new(suite.binaries_dir.clone());
    let summaries = Aggregator::new(suite).run(&mut source, out)?;
    Ok(BenchReport {
        suite: suite.clone(),
        summaries,
    })
}
