//! Testing utilities and mock implementations.
//!
//! This module provides a mock `Prober` and probe-output fixtures, allowing
//! analysis and API tests to run without ffmpeg installed.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediascope_core::testing::{fixtures, MockProber};
//!
//! let prober = MockProber::new();
//! prober.set_probe_result("/media/movie.mkv", fixtures::probe_output("h264", &["aac"]));
//! prober.set_probe_failure("/media/broken.avi");
//!
//! // Use in a LibraryAnalyzer or AppState...
//! ```

mod mock_prober;

pub use mock_prober::MockProber;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::probe::{ProbeDisposition, ProbeFormat, ProbeOutput, ProbeStream, ProbeTags};

    /// Builds a probe document with one video stream and the given audio
    /// codecs, the first audio track carrying the default disposition.
    pub fn probe_output(video_codec: &str, audio_codecs: &[&str]) -> ProbeOutput {
        let mut streams = vec![video_stream(video_codec)];
        for (i, codec) in audio_codecs.iter().enumerate() {
            streams.push(audio_stream(codec, i == 0));
        }
        ProbeOutput {
            format: Some(format_block()),
            streams,
        }
    }

    /// A typical format block: 2h duration, 4 GiB, 6.3 Mbps, matroska.
    pub fn format_block() -> ProbeFormat {
        ProbeFormat {
            duration: Some("7200.500000".to_string()),
            size: Some("4294967296".to_string()),
            bit_rate: Some("6363000".to_string()),
            format_name: Some("matroska,webm".to_string()),
        }
    }

    /// A 1080p video stream with the given codec.
    pub fn video_stream(codec: &str) -> ProbeStream {
        ProbeStream {
            codec_type: Some("video".to_string()),
            codec_name: Some(codec.to_string()),
            width: Some(1920),
            height: Some(1080),
            r_frame_rate: Some("24000/1001".to_string()),
            bit_rate: Some("5000000".to_string()),
            profile: Some("High".to_string()),
            pix_fmt: Some("yuv420p".to_string()),
            display_aspect_ratio: Some("16:9".to_string()),
            ..Default::default()
        }
    }

    /// A 5.1 English audio stream with the given codec.
    pub fn audio_stream(codec: &str, default: bool) -> ProbeStream {
        ProbeStream {
            codec_type: Some("audio".to_string()),
            codec_name: Some(codec.to_string()),
            channels: Some(6),
            channel_layout: Some("5.1(side)".to_string()),
            sample_rate: Some("48000".to_string()),
            bit_rate: Some("640000".to_string()),
            tags: ProbeTags {
                language: Some("eng".to_string()),
                title: None,
            },
            disposition: ProbeDisposition {
                is_default: u32::from(default),
                forced: 0,
            },
            ..Default::default()
        }
    }

    /// An embedded subtitle stream.
    pub fn subtitle_stream(codec: &str, language: &str) -> ProbeStream {
        ProbeStream {
            codec_type: Some("subtitle".to_string()),
            codec_name: Some(codec.to_string()),
            tags: ProbeTags {
                language: Some(language.to_string()),
                title: None,
            },
            ..Default::default()
        }
    }
}
