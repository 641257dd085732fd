//! Mock prober for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::probe::{ProbeError, ProbeOutput, Prober};

/// Mock implementation of the Prober trait.
///
/// Provides controllable behavior for testing:
/// - Pre-configured probe documents per path
/// - Simulated probe failures per path
/// - A call log for assertions
#[derive(Debug, Default, Clone)]
pub struct MockProber {
    results: Arc<Mutex<HashMap<PathBuf, ProbeOutput>>>,
    failures: Arc<Mutex<HashSet<PathBuf>>>,
    probed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockProber {
    /// Create a new mock prober with no configured results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probe document returned for a specific path.
    pub fn set_probe_result(&self, path: impl AsRef<Path>, output: ProbeOutput) {
        self.results
            .lock()
            .expect("mock lock")
            .insert(path.as_ref().to_path_buf(), output);
    }

    /// Make probing a specific path fail.
    pub fn set_probe_failure(&self, path: impl AsRef<Path>) {
        self.failures
            .lock()
            .expect("mock lock")
            .insert(path.as_ref().to_path_buf());
    }

    /// Paths probed so far, in call order.
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probed.lock().expect("mock lock").clone()
    }

    /// Number of probe calls made.
    pub fn probe_count(&self) -> usize {
        self.probed.lock().expect("mock lock").len()
    }
}

#[async_trait]
impl Prober for MockProber {
    fn name(&self) -> &str {
        "mock"
    }

    async fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError> {
        self.probed
            .lock()
            .expect("mock lock")
            .push(path.to_path_buf());

        if self.failures.lock().expect("mock lock").contains(path) {
            return Err(ProbeError::probe_failed("mock failure"));
        }

        match self.results.lock().expect("mock lock").get(path) {
            Some(output) => Ok(output.clone()),
            None => Err(ProbeError::InputNotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    async fn validate(&self) -> Result<(), ProbeError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_configured_result_is_returned() {
        let prober = MockProber::new();
        prober.set_probe_result("/m/a.mkv", fixtures::probe_output("h264", &["aac"]));

        let output = prober.probe(Path::new("/m/a.mkv")).await.unwrap();
        assert_eq!(output.streams.len(), 2);
        assert_eq!(prober.probe_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_and_unknown_paths() {
        let prober = MockProber::new();
        prober.set_probe_failure("/m/bad.mkv");

        let failed = prober.probe(Path::new("/m/bad.mkv")).await;
        assert!(matches!(failed, Err(ProbeError::ProbeFailed { .. })));

        let unknown = prober.probe(Path::new("/m/unknown.mkv")).await;
        assert!(matches!(unknown, Err(ProbeError::InputNotFound { .. })));
    }
}
