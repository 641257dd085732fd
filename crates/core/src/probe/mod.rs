//! Probe module for inspecting media files.
//!
//! This module provides the `Prober` trait and the ffprobe-backed
//! implementation used to extract container and stream metadata from video
//! files without decoding payload data.
//!
//! # Features
//!
//! - Structured (JSON) ffprobe invocation with a bounded timeout
//! - Raw output deserialized into typed records at the boundary
//! - No automatic retries: a failed probe is reported upward immediately
//!
//! # Example
//!
//! ```ignore
//! use mediascope_core::probe::{FfprobeProber, Prober};
//!
//! let prober = FfprobeProber::with_defaults();
//!
//! // Validate ffprobe is available
//! prober.validate().await?;
//!
//! // Probe a media file
//! let raw = prober.probe(Path::new("/media/movie.mkv")).await?;
//! println!("{} streams", raw.streams.len());
//! ```

mod config;
mod error;
mod ffprobe;
mod traits;
mod types;

pub use config::ProberConfig;
pub use error::ProbeError;
pub use ffprobe::FfprobeProber;
pub use traits::Prober;
pub use types::{ProbeDisposition, ProbeFormat, ProbeOutput, ProbeStream, ProbeTags};
