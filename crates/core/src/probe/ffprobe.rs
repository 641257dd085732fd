//! FFprobe-based prober implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use super::config::ProberConfig;
use super::error::ProbeError;
use super::traits::Prober;
use super::types::ProbeOutput;

/// Prober that shells out to the ffprobe binary.
pub struct FfprobeProber {
    config: ProberConfig,
}

impl FfprobeProber {
    /// Creates a new prober with the given configuration.
    pub fn new(config: ProberConfig) -> Self {
        Self { config }
    }

    /// Creates a prober with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ProberConfig::default())
    }

    fn parse_output(output: &str) -> Result<ProbeOutput, ProbeError> {
        serde_json::from_str(output)
            .map_err(|e| ProbeError::parse_error(format!("invalid ffprobe JSON: {}", e)))
    }
}

#[async_trait]
impl Prober for FfprobeProber {
    fn name(&self) -> &str {
        "ffprobe"
    }

    async fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut command = Command::new(&self.config.ffprobe_path);
        command
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .stdin(Stdio::null())
            // Dropping the output future on timeout must kill the child.
            .kill_on_drop(true);

        let result = timeout(
            Duration::from_secs(self.config.timeout_secs),
            command.output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(ProbeError::FfprobeNotFound {
                        path: self.config.ffprobe_path.clone(),
                    });
                }
                return Err(ProbeError::Io(e));
            }
            Err(_) => {
                return Err(ProbeError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !output.status.success() {
            return Err(ProbeError::probe_failed(format!(
                "ffprobe exited with code {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::parse_output(&stdout)
    }

    async fn validate(&self) -> Result<(), ProbeError> {
        let result = Command::new(&self.config.ffprobe_path)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await;

        match result {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(ProbeError::probe_failed(format!(
                "ffprobe -version exited with code {:?}",
                output.status.code()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ProbeError::FfprobeNotFound {
                    path: self.config.ffprobe_path.clone(),
                })
            }
            Err(e) => Err(ProbeError::Io(e)),
        }
    }
}
