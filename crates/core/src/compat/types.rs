//! Types for codec-compatibility classification.

use serde::{Deserialize, Serialize};

/// Audio codecs flagged problematic when no configuration exists yet.
pub const DEFAULT_PROBLEMATIC_AUDIO: [&str; 6] =
    ["dts", "dts-hd", "truehd", "flac", "pcm_s16le", "pcm_s24le"];

/// Versioned codec-compatibility configuration.
///
/// Owned by the caller and passed into each classification as an immutable
/// snapshot; the core never reads shared mutable state for this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub problematic_codecs: ProblematicCodecs,
    #[serde(default = "default_version")]
    pub version: String,
}

/// Problematic codec name sets. Membership is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblematicCodecs {
    #[serde(default = "default_audio_codecs")]
    pub audio: Vec<String>,
    #[serde(default)]
    pub video: Vec<String>,
}

fn default_audio_codecs() -> Vec<String> {
    DEFAULT_PROBLEMATIC_AUDIO
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ProblematicCodecs {
    fn default() -> Self {
        Self {
            audio: default_audio_codecs(),
            video: Vec::new(),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            problematic_codecs: ProblematicCodecs::default(),
            version: default_version(),
        }
    }
}

impl CodecConfig {
    /// Case-insensitive exact membership test against the audio list.
    pub fn is_audio_problematic(&self, codec: &str) -> bool {
        contains_ignore_case(&self.problematic_codecs.audio, codec)
    }

    /// Case-insensitive exact membership test against the video list.
    pub fn is_video_problematic(&self, codec: &str) -> bool {
        contains_ignore_case(&self.problematic_codecs.video, codec)
    }
}

fn contains_ignore_case(list: &[String], codec: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(codec))
}

/// Per-file compatibility verdict derived from a [`VideoInfo`](crate::media::VideoInfo)
/// and a [`CodecConfig`] snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityVerdict {
    /// Whether the primary audio track's codec is problematic.
    pub primary_audio_problematic: bool,
    /// The primary audio track's codec name, when one exists.
    pub primary_audio_codec: Option<String>,
    /// Whether the video codec is problematic.
    pub video_problematic: bool,
    /// The video codec name, when a video stream exists.
    pub video_codec: Option<String>,
    /// True when either flag above is set.
    pub needs_remux: bool,
    /// How many audio tracks carry a problematic codec.
    pub problematic_track_count: usize,
    /// Total number of audio tracks.
    pub total_audio_tracks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.problematic_codecs.audio.len(), 6);
        assert!(config.problematic_codecs.video.is_empty());
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let config = CodecConfig {
            problematic_codecs: ProblematicCodecs {
                audio: vec!["DTS".to_string()],
                video: vec!["mpeg2video".to_string()],
            },
            version: "1.0".to_string(),
        };
        assert!(config.is_audio_problematic("dts"));
        assert!(config.is_audio_problematic("DTS"));
        assert!(config.is_video_problematic("MPEG2VIDEO"));
        assert!(!config.is_audio_problematic("aac"));
    }

    #[test]
    fn test_membership_is_exact_not_substring() {
        let config = CodecConfig::default();
        assert!(config.is_audio_problematic("dts"));
        assert!(!config.is_audio_problematic("dts-es"));
        assert!(!config.is_audio_problematic("dt"));
    }

    #[test]
    fn test_missing_subkeys_fill_from_defaults() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.version, "1.0");
        assert!(config.is_audio_problematic("truehd"));

        let config: CodecConfig =
            serde_json::from_str(r#"{"problematic_codecs": {"video": ["av1"]}}"#).unwrap();
        assert!(config.is_video_problematic("av1"));
        // audio list filled from defaults, not left empty
        assert!(config.is_audio_problematic("dts"));
    }

    #[test]
    fn test_explicit_empty_list_stays_empty() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"problematic_codecs": {"audio": [], "video": []}}"#).unwrap();
        assert!(!config.is_audio_problematic("dts"));
    }

    #[test]
    fn test_round_trip() {
        let config = CodecConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
