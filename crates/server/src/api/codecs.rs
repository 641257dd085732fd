//! Codec-compatibility configuration handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use mediascope_core::CodecConfig;

use super::{error_response, ErrorResponse};
use crate::state::AppState;

/// Audio codecs commonly seen in media libraries, offered to configuration
/// UIs as suggestions.
const COMMON_AUDIO_CODECS: [&str; 12] = [
    "aac", "ac3", "eac3", "dts", "dts-hd", "truehd", "flac", "mp3", "pcm_s16le", "pcm_s24le",
    "opus", "vorbis",
];

const COMMON_VIDEO_CODECS: [&str; 8] = [
    "h264", "h265", "hevc", "av1", "vp8", "vp9", "mpeg2", "mpeg4",
];

#[derive(Debug, Serialize)]
pub struct AvailableCodecs {
    pub audio: Vec<&'static str>,
    pub video: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/codec-config
pub async fn get_codec_config(State(state): State<Arc<AppState>>) -> Json<CodecConfig> {
    Json((*state.codec_config().await).clone())
}

/// POST /api/codec-config
///
/// Validates, persists, and atomically swaps in a new configuration.
/// Missing subkeys are filled from defaults during deserialization.
pub async fn update_codec_config(
    State(state): State<Arc<AppState>>,
    Json(new_config): Json<CodecConfig>,
) -> Result<Json<UpdateResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.codec_store().save(&new_config).map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to save configuration: {}", e),
        )
    })?;

    info!(
        "Codec configuration updated: {} audio, {} video entries",
        new_config.problematic_codecs.audio.len(),
        new_config.problematic_codecs.video.len()
    );
    state.set_codec_config(new_config).await;

    Ok(Json(UpdateResponse {
        success: true,
        message: "Configuration updated successfully".to_string(),
    }))
}

/// GET /api/available-codecs
pub async fn available_codecs() -> Json<AvailableCodecs> {
    Json(AvailableCodecs {
        audio: COMMON_AUDIO_CODECS.to_vec(),
        video: COMMON_VIDEO_CODECS.to_vec(),
    })
}
