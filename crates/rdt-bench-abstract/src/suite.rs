use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::SimulationConfig;
use crate::protocol::ProtocolId;

/// How samples are pooled when a protocol's mean is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AveragingMode {
    /// Samples are reset at each protocol boundary.
    #[default]
    PerProtocol,
    /// Running mean over every sample taken so far in the run, so later
    /// protocols include the samples of earlier ones.
    Cumulative,
}

/// Everything one harness run needs. Built once at startup, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSuite {
    pub binaries_dir: PathBuf,
    pub protocols: Vec<ProtocolId>,
    pub trials: usize,
    pub averaging: AveragingMode,
    pub simulation: SimulationConfig,
}

impl Default for BenchSuite {
    fn default() -> Self {
        Self {
            binaries_dir: PathBuf::from("../Compile"),
            protocols: ProtocolId::defaults(),
            trials: 10,
            averaging: AveragingMode::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

/// Partial suite as read from a TOML file. Missing keys keep the defaults.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct BenchSuiteOverride {
    pub binaries_dir: Option<PathBuf>,
    pub protocols: Option<Vec<ProtocolId>>,
    pub trials: Option<usize>,
    pub averaging: Option<AveragingMode>,
    #[serde(default)]
    pub simulation: SimulationConfigOverride,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfigOverride {
    pub message_count: Option<u32>,
    pub loss_probability: Option<f64>,
    pub corruption_probability: Option<f64>,
    pub interval: Option<f64>,
    pub debug_level: Option<u32>,
}

impl BenchSuiteOverride {
    pub fn apply_to(&self, suite: &mut BenchSuite) {
        if let Some(v) = &self.binaries_dir {
            suite.binaries_dir = v.clone();
        }
        if let Some(v) = &self.protocols {
            suite.protocols = v.clone();
        }
        if let Some(v) = self.trials {
            suite.trials = v;
        }
        if let Some(v) = self.averaging {
            suite.averaging = v;
        }
        self.simulation.apply_to(&mut suite.simulation);
    }
}

impl SimulationConfigOverride {
    pub fn apply_to(&self, config: &mut SimulationConfig) {
        if let Some(v) = self.message_count {
            config.message_count = v;
        }
        if let Some(v) = self.loss_probability {
            config.loss_probability = v;
        }
        if let Some(v) = self.corruption_probability {
            config.corruption_probability = v;
        }
        if let Some(v) = self.interval {
            config.interval = v;
        }
        if let Some(v) = self.debug_level {
            config.debug_level = v;
        }
    }
}
