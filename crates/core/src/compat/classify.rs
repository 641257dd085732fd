//! Codec-compatibility classification.

use crate::media::{AudioTrack, VideoInfo};

use super::types::{CodecConfig, CompatibilityVerdict};

/// Selects the primary audio track: the first default-flagged track, else
/// the first track in probe-stream order.
pub fn primary_audio_track(tracks: &[AudioTrack]) -> Option<&AudioTrack> {
    tracks
        .iter()
        .find(|track| track.is_default)
        .or_else(|| tracks.first())
}

/// Computes the compatibility verdict for a normalized file against a codec
/// configuration snapshot.
///
/// With zero audio tracks there is no primary track and audio is treated as
/// not problematic.
pub fn classify(info: &VideoInfo, config: &CodecConfig) -> CompatibilityVerdict {
    let primary = primary_audio_track(&info.audio_tracks);

    let primary_audio_problematic = primary
        .map(|track| config.is_audio_problematic(&track.codec))
        .unwrap_or(false);

    let video_problematic = info
        .video
        .codec
        .as_deref()
        .map(|codec| config.is_video_problematic(codec))
        .unwrap_or(false);

    CompatibilityVerdict {
        primary_audio_problematic,
        primary_audio_codec: primary.map(|track| track.codec.clone()),
        video_problematic,
        video_codec: info.video.codec.clone(),
        needs_remux: primary_audio_problematic || video_problematic,
        problematic_track_count: info
            .audio_tracks
            .iter()
            .filter(|track| config.is_audio_problematic(&track.codec))
            .count(),
        total_audio_tracks: info.audio_tracks.len(),
    }
}

/// Flags each track against the configuration and attaches the verdict,
/// producing the fully classified record served to callers.
pub fn annotate(info: &mut VideoInfo, config: &CodecConfig) {
    if let Some(codec) = info.video.codec.as_deref() {
        info.video.is_problematic = config.is_video_problematic(codec);
    }
    for track in &mut info.audio_tracks {
        track.is_problematic = config.is_audio_problematic(&track.codec);
    }
    info.compatibility = Some(classify(info, config));
}
