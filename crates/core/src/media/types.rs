//! Canonical media metadata types.
//!
//! These are produced by [`normalize`](super::normalize) from a raw probe
//! document. All display fields are pre-formatted strings so downstream
//! consumers never touch loosely typed probe data.

use serde::Serialize;

use crate::compat::CompatibilityVerdict;

/// Normalized metadata for a single video file.
///
/// Immutable once produced; rebuilt fresh on every probe.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    /// Playback duration as "HH:MM:SS".
    pub duration: Option<String>,
    /// Human-readable file size (binary units, one decimal).
    pub size: Option<String>,
    /// Overall container bitrate, e.g. "6363 kbps".
    pub bitrate: Option<String>,
    /// Container name, uppercased (e.g. "MATROSKA,WEBM").
    pub container: Option<String>,
    /// Summary of the (first) video stream.
    pub video: VideoStreamInfo,
    /// Audio tracks in probe-stream order.
    pub audio_tracks: Vec<AudioTrack>,
    /// Subtitle tracks: embedded first, then externally discovered files.
    pub subtitle_tracks: Vec<SubtitleTrack>,
    /// Compatibility verdict, filled in by the classifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityVerdict>,
}

/// Summary of a file's video stream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoStreamInfo {
    /// Codec name, uppercased. None when the file has no video stream.
    pub codec: Option<String>,
    /// "{width}×{height}" plus a coarse category, e.g. "1920×1080 (1080p)".
    pub resolution: Option<String>,
    /// Frame rate, e.g. "29.97 fps".
    pub framerate: Option<String>,
    /// Video stream bitrate, e.g. "5000 kbps".
    pub bitrate: Option<String>,
    /// Encoder profile (e.g. "High").
    pub profile: Option<String>,
    /// Pixel format (e.g. "yuv420p").
    pub pixel_format: Option<String>,
    /// Display aspect ratio (e.g. "16:9").
    pub aspect_ratio: Option<String>,
    /// Whether the codec is on the configured problematic list.
    pub is_problematic: bool,
}

/// One audio track of a probed file.
#[derive(Debug, Clone, Serialize)]
pub struct AudioTrack {
    /// Stream position within the probed file.
    pub index: usize,
    /// Codec name, uppercased ("UNKNOWN" when not reported).
    pub codec: String,
    /// Channel count, when reported.
    pub channels: Option<u32>,
    /// Channel layout label, inferred from the count when not reported.
    pub channel_layout: Option<String>,
    /// Sample rate, e.g. "48.0 kHz".
    pub sample_rate: Option<String>,
    /// Track bitrate, e.g. "640 kbps".
    pub bitrate: Option<String>,
    /// Language tag ("Unknown" when not tagged).
    pub language: String,
    /// Track title (empty when not tagged).
    pub title: String,
    /// Whether the default disposition flag is set.
    pub is_default: bool,
    /// Whether the codec is on the configured problematic list.
    pub is_problematic: bool,
}

/// One subtitle track, embedded or discovered as a sibling file.
#[derive(Debug, Clone, Serialize)]
pub struct SubtitleTrack {
    /// Stream position within the probed file; None for external files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Codec or file format, uppercased (e.g. "SUBRIP", "SRT").
    pub codec: String,
    /// Language tag ("Unknown" when not tagged or not inferred).
    pub language: String,
    /// Track title, or the filename for external subtitles.
    pub title: String,
    /// Whether the forced disposition flag is set.
    pub forced: bool,
    /// Whether the default disposition flag is set.
    pub default: bool,
    /// True when supplied as a sibling file rather than embedded.
    pub external: bool,
}
