//! Trait definitions for the probe module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ProbeError;
use super::types::ProbeOutput;

/// A prober that can inspect media files without decoding them.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns the name of this prober implementation.
    fn name(&self) -> &str;

    /// Probes a media file and returns the raw structured output.
    ///
    /// A single failed probe is reported immediately; implementations must
    /// not retry.
    async fn probe(&self, path: &Path) -> Result<ProbeOutput, ProbeError>;

    /// Validates that the prober is properly configured and ready.
    async fn validate(&self) -> Result<(), ProbeError>;
}
