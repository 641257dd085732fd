//! Probe-output normalization.
//!
//! Converts a raw ffprobe document into the canonical [`VideoInfo`] record.
//! Field-level parse failures degrade to absent values; only a completely
//! unparseable probe document fails, and that is reported by the probe layer
//! before this code runs.

use std::path::Path;

use crate::probe::{ProbeOutput, ProbeStream};

use super::format::{
    format_bitrate, format_duration, format_resolution, format_sample_rate, format_size,
    infer_channel_layout, parse_framerate,
};
use super::subtitles::discover_external_subtitles;
use super::types::{AudioTrack, SubtitleTrack, VideoInfo, VideoStreamInfo};

/// Builds a [`VideoInfo`] from a probe document.
///
/// `path` is the probed file's location, used only for external subtitle
/// discovery. The compatibility verdict is left unset; see
/// [`crate::compat::annotate`].
pub fn normalize(probe: &ProbeOutput, path: &Path) -> VideoInfo {
    let mut info = VideoInfo {
        duration: None,
        size: None,
        bitrate: None,
        container: None,
        video: VideoStreamInfo::default(),
        audio_tracks: Vec::new(),
        subtitle_tracks: Vec::new(),
        compatibility: None,
    };

    if let Some(format) = &probe.format {
        info.duration = parse_str::<f64>(&format.duration).map(format_duration);
        info.size = parse_str::<u64>(&format.size).map(format_size);
        info.bitrate = parse_str::<u64>(&format.bit_rate).map(format_bitrate);
        info.container = format.format_name.as_ref().map(|n| n.to_uppercase());
    }

    let mut saw_video = false;
    for (index, stream) in probe.streams.iter().enumerate() {
        match stream.codec_type.as_deref() {
            // Only the first video stream is summarized.
            Some("video") if !saw_video => {
                info.video = normalize_video_stream(stream);
                saw_video = true;
            }
            Some("audio") => info.audio_tracks.push(normalize_audio_stream(stream, index)),
            Some("subtitle") => {
                info.subtitle_tracks
                    .push(normalize_subtitle_stream(stream, index));
            }
            _ => {}
        }
    }

    info.subtitle_tracks
        .extend(discover_external_subtitles(path));

    info
}

fn normalize_video_stream(stream: &ProbeStream) -> VideoStreamInfo {
    VideoStreamInfo {
        codec: Some(display_codec(stream)),
        resolution: match (stream.width, stream.height) {
            (Some(w), Some(h)) => Some(format_resolution(w, h)),
            _ => None,
        },
        framerate: stream
            .r_frame_rate
            .as_deref()
            .and_then(parse_framerate),
        bitrate: parse_str::<u64>(&stream.bit_rate).map(format_bitrate),
        profile: stream.profile.clone(),
        pixel_format: stream.pix_fmt.clone(),
        aspect_ratio: stream.display_aspect_ratio.clone(),
        is_problematic: false,
    }
}

fn normalize_audio_stream(stream: &ProbeStream, index: usize) -> AudioTrack {
    let channel_layout = stream
        .channel_layout
        .clone()
        .or_else(|| stream.channels.map(infer_channel_layout));

    AudioTrack {
        index,
        codec: display_codec(stream),
        channels: stream.channels,
        channel_layout,
        sample_rate: parse_str::<u64>(&stream.sample_rate).map(format_sample_rate),
        bitrate: parse_str::<u64>(&stream.bit_rate).map(format_bitrate),
        language: stream
            .tags
            .language
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        title: stream.tags.title.clone().unwrap_or_default(),
        is_default: stream.is_default(),
        is_problematic: false,
    }
}

fn normalize_subtitle_stream(stream: &ProbeStream, index: usize) -> SubtitleTrack {
    SubtitleTrack {
        index: Some(index),
        codec: display_codec(stream),
        language: stream
            .tags
            .language
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        title: stream.tags.title.clone().unwrap_or_default(),
        forced: stream.is_forced(),
        default: stream.is_default(),
        external: false,
    }
}

fn display_codec(stream: &ProbeStream) -> String {
    stream
        .codec_name
        .as_deref()
        .unwrap_or("Unknown")
        .to_uppercase()
}

fn parse_str<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
    value.as_ref().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeFormat;
    use crate::testing::fixtures;

    #[test]
    fn test_normalize_full_document() {
        let probe = ProbeOutput {
            format: Some(ProbeFormat {
                duration: Some("5400.900000".to_string()),
                size: Some("1073741824".to_string()),
                bit_rate: Some("6363000".to_string()),
                format_name: Some("matroska,webm".to_string()),
            }),
            streams: vec![
                fixtures::video_stream("h264"),
                fixtures::audio_stream("dts", true),
                fixtures::subtitle_stream("subrip", "eng"),
            ],
        };

        let info = normalize(&probe, Path::new("/media/movie.mkv"));

        assert_eq!(info.duration.as_deref(), Some("01:30:00"));
        assert_eq!(info.size.as_deref(), Some("1.0 GB"));
        assert_eq!(info.bitrate.as_deref(), Some("6363 kbps"));
        assert_eq!(info.container.as_deref(), Some("MATROSKA,WEBM"));

        assert_eq!(info.video.codec.as_deref(), Some("H264"));
        assert_eq!(info.video.resolution.as_deref(), Some("1920×1080 (1080p)"));
        assert_eq!(info.video.framerate.as_deref(), Some("23.98 fps"));
        assert_eq!(info.video.profile.as_deref(), Some("High"));

        assert_eq!(info.audio_tracks.len(), 1);
        let audio = &info.audio_tracks[0];
        assert_eq!(audio.index, 1);
        assert_eq!(audio.codec, "DTS");
        assert_eq!(audio.channel_layout.as_deref(), Some("5.1(side)"));
        assert_eq!(audio.sample_rate.as_deref(), Some("48.0 kHz"));
        assert_eq!(audio.language, "eng");
        assert!(audio.is_default);

        assert_eq!(info.subtitle_tracks.len(), 1);
        let sub = &info.subtitle_tracks[0];
        assert_eq!(sub.index, Some(2));
        assert_eq!(sub.codec, "SUBRIP");
        assert!(!sub.external);
    }

    #[test]
    fn test_normalize_empty_document_degrades_gracefully() {
        let probe = ProbeOutput::default();
        let info = normalize(&probe, Path::new("/media/movie.mkv"));

        assert!(info.duration.is_none());
        assert!(info.size.is_none());
        assert!(info.container.is_none());
        assert!(info.video.codec.is_none());
        assert!(info.audio_tracks.is_empty());
        assert!(info.subtitle_tracks.is_empty());
        assert!(info.compatibility.is_none());
    }

    #[test]
    fn test_normalize_malformed_numbers_become_absent() {
        let probe = ProbeOutput {
            format: Some(ProbeFormat {
                duration: Some("not-a-float".to_string()),
                size: Some("n/a".to_string()),
                bit_rate: None,
                format_name: None,
            }),
            streams: vec![],
        };
        let info = normalize(&probe, Path::new("/media/movie.mkv"));
        assert!(info.duration.is_none());
        assert!(info.size.is_none());
        assert!(info.bitrate.is_none());
    }

    #[test]
    fn test_channel_layout_inferred_when_missing() {
        let mut stream = fixtures::audio_stream("aac", true);
        stream.channel_layout = None;
        stream.channels = Some(2);
        let probe = ProbeOutput {
            format: None,
            streams: vec![stream],
        };

        let info = normalize(&probe, Path::new("/media/movie.mkv"));
        assert_eq!(
            info.audio_tracks[0].channel_layout.as_deref(),
            Some("Stereo")
        );
    }

    #[test]
    fn test_missing_codec_name_reports_unknown() {
        let mut stream = fixtures::audio_stream("aac", false);
        stream.codec_name = None;
        let probe = ProbeOutput {
            format: None,
            streams: vec![stream],
        };

        let info = normalize(&probe, Path::new("/media/movie.mkv"));
        assert_eq!(info.audio_tracks[0].codec, "UNKNOWN");
    }

    #[test]
    fn test_only_first_video_stream_summarized() {
        let probe = ProbeOutput {
            format: None,
            streams: vec![
                fixtures::video_stream("h264"),
                fixtures::video_stream("mjpeg"),
            ],
        };
        let info = normalize(&probe, Path::new("/media/movie.mkv"));
        assert_eq!(info.video.codec.as_deref(), Some("H264"));
    }

    #[test]
    fn test_audio_track_index_is_stream_position() {
        let probe = ProbeOutput {
            format: None,
            streams: vec![
                fixtures::video_stream("h264"),
                fixtures::audio_stream("aac", false),
                fixtures::audio_stream("ac3", false),
            ],
        };
        let info = normalize(&probe, Path::new("/media/movie.mkv"));
        assert_eq!(info.audio_tracks[0].index, 1);
        assert_eq!(info.audio_tracks[1].index, 2);
    }
}
