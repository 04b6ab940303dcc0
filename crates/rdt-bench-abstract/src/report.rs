use serde::Serialize;

use crate::protocol::ProtocolId;
use crate::suite::BenchSuite;

/// Mean completion time of one protocol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolSummary {
    pub protocol: ProtocolId,
    pub mean_ms: f64,
    /// Number of samples behind `mean_ms`. Exceeds the trial count in
    /// cumulative mode.
    pub samples: usize,
}

impl ProtocolSummary {
    /// Console form: `[goBackN]: 1234.5ms`.
    pub fn report_line(&self) -> String {
        // Debug keeps a trailing `.0` on integral values.
        format!("[{}]: {:?}ms", self.protocol, self.mean_ms)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub suite: BenchSuite,
    pub summaries: Vec<ProtocolSummary>,
}
