use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Level, info};

use rdt_bench_abstract::{AveragingMode, BenchReport, BenchSuite, BenchSuiteOverride, ProtocolId};
use rdt_bench_runner::run_suite;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare completion times of reliable-transfer protocol simulators"
)]
struct Args {
    /// TOML suite file. Flags below override its values.
    #[arg(long)]
    suite: Option<PathBuf>,

    /// Directory holding one executable per protocol.
    #[arg(long)]
    binaries_dir: Option<PathBuf>,

    /// Protocol executable to benchmark; repeat to build the set in report order.
    #[arg(long = "protocol", value_name = "NAME")]
    protocols: Vec<String>,

    /// Trials per protocol.
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    #[arg(long, value_enum)]
    averaging: Option<Averaging>,

    /// Number of messages the sender must deliver.
    #[arg(long)]
    messages: Option<u32>,

    /// Packet loss probability.
    #[arg(long)]
    loss: Option<f64>,

    /// Packet corruption probability.
    #[arg(long)]
    corrupt: Option<f64>,

    /// Average time between messages from the sender's application layer.
    #[arg(long)]
    interval: Option<f64>,

    /// Simulator trace level.
    #[arg(long)]
    debug_level: Option<u32>,

    /// Write the run's summaries as JSON.
    #[arg(long)]
    report_out: Option<PathBuf>,

    /// Log every trial.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Averaging {
    /// Mean over each protocol's own trials.
    PerProtocol,
    /// Running mean over all samples taken so far.
    Cumulative,
}

impl From<Averaging> for AveragingMode {
    fn from(value: Averaging) -> Self {
        match value {
            Averaging::PerProtocol => AveragingMode::PerProtocol,
            Averaging::Cumulative => AveragingMode::Cumulative,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("rdt-bench starting…");

    let suite = args.build_suite()?;
    info!(
        "Suite: {} protocol(s) x {} trial(s) from {} with args {:?}",
        suite.protocols.len(),
        suite.trials,
        suite.binaries_dir.display(),
        suite.simulation.to_args()
    );

    let mut stdout = io::stdout().lock();
    let report = run_suite(&suite, &mut stdout)?;

    if let Some(path) = &args.report_out {
        write_report(path, &report)?;
    }

    Ok(())
}

impl Args {
    fn build_suite(&self) -> Result<BenchSuite> {
        let mut suite = BenchSuite::default();
        if let Some(path) = &self.suite {
            load_suite(path)?.apply_to(&mut suite);
        }
        self.cli_override().apply_to(&mut suite);
        Ok(suite)
    }

    fn cli_override(&self) -> BenchSuiteOverride {
        let mut over = BenchSuiteOverride {
            binaries_dir: self.binaries_dir.clone(),
            protocols: None,
            trials: self.trials,
            averaging: self.averaging.map(AveragingMode::from),
            ..Default::default()
        };
        if !self.protocols.is_empty() {
            over.protocols = Some(
                self.protocols
                    .iter()
                    .map(|p| ProtocolId::new(p.as_str()))
                    .collect(),
            );
        }
        over.simulation.message_count = self.messages;
        over.simulation.loss_probability = self.loss;
        over.simulation.corruption_probability = self.corrupt;
        over.simulation.interval = self.interval;
        over.simulation.debug_level = self.debug_level;
        over
    }
}

// Logs go to stderr; stdout carries only the report lines.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn load_suite(path: &Path) -> Result<BenchSuiteOverride> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suite file {}", path.display()))?;
    let over: BenchSuiteOverride =
        toml::from_str(&content).context("Failed to parse suite file")?;
    Ok(over)
}

fn write_report(path: &Path, report: &BenchReport) -> Result<()> {
    let data = serde_json::to_vec_pretty(report).context("Failed to serialize benchmark report")?;
    fs::write(path, &data)
        .with_context(|| format!("Failed to write report file {}", path.display()))?;
    Ok(())
}
