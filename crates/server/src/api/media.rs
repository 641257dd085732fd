//! Per-file metadata extraction handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use mediascope_core::{annotate, normalize, VideoInfo};

use super::{error_response, ErrorResponse};
use crate::metrics::{PROBES_TOTAL, PROBE_FAILURES_TOTAL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VideoInfoParams {
    pub path: Option<String>,
}

/// GET /api/video-info
///
/// Probes a single file and returns its normalized, classified metadata.
pub async fn video_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoInfoParams>,
) -> Result<Json<VideoInfo>, (StatusCode, Json<ErrorResponse>)> {
    let Some(path) = params.path else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "No file path provided",
        ));
    };

    let full_path = state
        .media_root()
        .resolve(&path)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid path"))?;

    if !full_path.exists() {
        return Err(error_response(StatusCode::NOT_FOUND, "File not found"));
    }

    PROBES_TOTAL.inc();
    let probe = match state.prober().probe(&full_path).await {
        Ok(probe) => probe,
        Err(e) => {
            PROBE_FAILURES_TOTAL.inc();
            warn!("Probe failed for {:?}: {}", full_path, e);
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not extract video information",
            ));
        }
    };

    let mut info = normalize(&probe, &full_path);
    let codec_config = state.codec_config().await;
    annotate(&mut info, &codec_config);

    Ok(Json(info))
}
