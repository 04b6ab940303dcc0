use serde::{Deserialize, Serialize};

/// Network conditions handed to every protocol executable.
///
/// Field order is the positional-argument order the simulators expect:
/// `num_sim prob_loss prob_corrupt interval debug_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub message_count: u32,
    pub loss_probability: f64,
    pub corruption_probability: f64,
    pub interval: f64,
    pub debug_level: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            message_count: 10,
            loss_probability: 0.0,
            corruption_probability: 0.0,
            interval: 10.0,
            debug_level: 0,
        }
    }
}

impl SimulationConfig {
    /// Render the five positional arguments. Values are passed through
    /// unchecked, so a probability of `1.5` reaches the simulator as-is.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.message_count.to_string(),
            self.loss_probability.to_string(),
            self.corruption_probability.to_string(),
            self.interval.to_string(),
            self.debug_level.to_string(),
        ]
    }
}
