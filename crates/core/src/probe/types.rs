//! Raw ffprobe output types.
//!
//! These mirror the JSON document ffprobe emits with `-show_format
//! -show_streams`. FFprobe reports most numeric fields as strings, so
//! everything here is optional and stringly typed; the media module converts
//! this into the strongly typed [`VideoInfo`](crate::media::VideoInfo)
//! record immediately after probing.

use serde::Deserialize;

/// Parsed ffprobe document: container-level format plus per-stream entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: Option<ProbeFormat>,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// Container-level metadata (`-show_format`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    /// Duration in seconds, as a decimal string (e.g. "5400.123000").
    pub duration: Option<String>,
    /// File size in bytes, as a string.
    pub size: Option<String>,
    /// Overall bitrate in bits per second, as a string.
    pub bit_rate: Option<String>,
    /// Container name, possibly comma-separated (e.g. "matroska,webm").
    pub format_name: Option<String>,
}

/// A single stream entry (`-show_streams`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    /// One of "video", "audio", "subtitle" (others are ignored).
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,

    // Video fields
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Frame rate as a rational "num/den" string (e.g. "30000/1001").
    pub r_frame_rate: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub display_aspect_ratio: Option<String>,

    // Audio fields
    pub channels: Option<u32>,
    pub channel_layout: Option<String>,
    /// Sample rate in Hz, as a string.
    pub sample_rate: Option<String>,

    /// Stream bitrate in bits per second, as a string.
    pub bit_rate: Option<String>,

    #[serde(default)]
    pub tags: ProbeTags,
    #[serde(default)]
    pub disposition: ProbeDisposition,
}

/// Stream tags (language, title).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeTags {
    pub language: Option<String>,
    pub title: Option<String>,
}

/// Stream disposition flags. FFprobe reports these as 0/1 integers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeDisposition {
    #[serde(default, rename = "default")]
    pub is_default: u32,
    #[serde(default)]
    pub forced: u32,
}

impl ProbeStream {
    /// Whether this stream's default disposition flag is set.
    pub fn is_default(&self) -> bool {
        self.disposition.is_default == 1
    }

    /// Whether this stream's forced disposition flag is set.
    pub fn is_forced(&self) -> bool {
        self.disposition.forced == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "streams": [
                {
                    "codec_type": "video",
                    "codec_name": "h264",
                    "width": 1920,
                    "height": 1080,
                    "r_frame_rate": "30000/1001",
                    "bit_rate": "4500000",
                    "profile": "High",
                    "pix_fmt": "yuv420p",
                    "display_aspect_ratio": "16:9",
                    "disposition": {"default": 1, "forced": 0}
                },
                {
                    "codec_type": "audio",
                    "codec_name": "dts",
                    "channels": 6,
                    "channel_layout": "5.1(side)",
                    "sample_rate": "48000",
                    "bit_rate": "1536000",
                    "tags": {"language": "eng", "title": "Surround"},
                    "disposition": {"default": 1}
                }
            ],
            "format": {
                "format_name": "matroska,webm",
                "duration": "5400.050000",
                "size": "4294967296",
                "bit_rate": "6363000"
            }
        }"#;

        let probe: ProbeOutput = serde_json::from_str(json).unwrap();
        assert_eq!(probe.streams.len(), 2);

        let format = probe.format.unwrap();
        assert_eq!(format.format_name.as_deref(), Some("matroska,webm"));
        assert_eq!(format.duration.as_deref(), Some("5400.050000"));

        let video = &probe.streams[0];
        assert_eq!(video.codec_name.as_deref(), Some("h264"));
        assert_eq!(video.width, Some(1920));
        assert!(video.is_default());

        let audio = &probe.streams[1];
        assert_eq!(audio.channels, Some(6));
        assert_eq!(audio.tags.language.as_deref(), Some("eng"));
    }

    #[test]
    fn test_parse_minimal_document() {
        // FFprobe omits fields freely; everything must tolerate absence.
        let probe: ProbeOutput = serde_json::from_str(r#"{"streams": [{}]}"#).unwrap();
        assert!(probe.format.is_none());
        assert_eq!(probe.streams.len(), 1);
        assert!(!probe.streams[0].is_default());
        assert!(!probe.streams[0].is_forced());
    }
}
