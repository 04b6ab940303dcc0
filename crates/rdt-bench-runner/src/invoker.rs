use rdt_bench_abstract::ProtocolId;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::error::TrialError;

/// Runs protocol executables found in a single binaries directory.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    binaries_dir: PathBuf,
}

impl ProcessInvoker {
    pub fn new(binaries_dir: impl Into<PathBuf>) -> Self {
        Self {
            binaries_dir: binaries_dir.into(),
        }
    }

    pub fn binaries_dir(&self) -> &Path {
        &self.binaries_dir
    }

    pub fn executable_path(&self, protocol: &ProtocolId) -> PathBuf {
        self.binaries_dir.join(protocol.as_str())
    }

    /// Run `protocol` with `args` and return its whole stdout.
    ///
    /// Blocks until the child exits; there is no timeout. A non-zero exit
    /// status is logged but the output is still returned, so a crashed
    /// simulator surfaces later as a missing timing annotation.
    pub fn invoke(&self, protocol: &ProtocolId, args: &[String]) -> Result<String, TrialError> {
        let path = self.executable_path(protocol);
        if !path.is_file() {
            return Err(TrialError::ExecutableNotFound(path));
        }

        // `output()` waits for exit and drains both pipes, so the child is
        // reaped on every return path.
        let output = Command::new(&path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TrialError::ProcessLaunchFailure {
                path: path.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!("{} exited with {}", path.display(), output.status);
        }
        if !output.stderr.is_empty() {
            debug!(
                "{} stderr: {}",
                protocol,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
