pub mod config;
pub mod protocol;
pub mod report;
pub mod suite;

pub use config::SimulationConfig;
pub use protocol::ProtocolId;
pub use report::{BenchReport, ProtocolSummary};
pub use suite::{AveragingMode, BenchSuite, BenchSuiteOverride, SimulationConfigOverride};
