use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a pre-built protocol simulator. Doubles as the executable's
/// file name inside the binaries directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolId(String);

impl ProtocolId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Alternating bit, Go-Back-N and Selective Repeat, in report order.
    pub fn defaults() -> Vec<ProtocolId> {
        ["altBit", "goBackN", "selectiveRepeat"]
            .into_iter()
            .map(ProtocolId::new)
            .collect()
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProtocolId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
