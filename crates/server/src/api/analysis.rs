//! Bulk analysis handlers: one-shot statistics and the SSE progress stream.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::Stream;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::error;

use mediascope_core::{AnalysisEvent, AnalyzeOptions, BulkStats, CancelFlag};

use super::{error_response, ErrorResponse};
use crate::metrics::BULK_ANALYSES_TOTAL;
use crate::state::AppState;

/// When sampling without an explicit cap, analyze at most this many files.
const SAMPLE_MAX_FILES: usize = 50;

#[derive(Debug, Deserialize)]
pub struct BulkAnalysisParams {
    pub max_files: Option<usize>,
    #[serde(default)]
    pub sample: bool,
}

impl BulkAnalysisParams {
    fn options(&self) -> AnalyzeOptions {
        let max_files = match (self.max_files, self.sample) {
            (Some(max), _) => Some(max),
            (None, true) => Some(SAMPLE_MAX_FILES),
            (None, false) => None,
        };
        AnalyzeOptions { max_files }
    }
}

/// GET /api/bulk-analysis
///
/// Runs a full (or capped) library analysis and returns the statistics in
/// one response.
pub async fn bulk_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BulkAnalysisParams>,
) -> Result<Json<BulkStats>, (StatusCode, Json<ErrorResponse>)> {
    BULK_ANALYSES_TOTAL.inc();

    let codec_config = state.codec_config().await;
    let stats = state
        .analyzer()
        .analyze(
            state.media_root(),
            &codec_config,
            &params.options(),
            &CancelFlag::new(),
        )
        .await
        .map_err(|e| {
            error!("Bulk analysis failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Bulk analysis failed: {}", e),
            )
        })?;

    Ok(Json(stats))
}

/// GET /api/bulk-analysis/progress
///
/// Streams analysis progress as Server-Sent Events, one JSON event per
/// message: starting, per-file progress, then a terminal complete or error
/// event. Dropping the connection cancels the run at the next file boundary.
pub async fn bulk_analysis_progress(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    BULK_ANALYSES_TOTAL.inc();

    let (tx, rx) = mpsc::channel::<AnalysisEvent>(16);

    let analyzer = state.analyzer().clone();
    let media_root = state.media_root().clone();
    let codec_config = state.codec_config().await;
    tokio::spawn(async move {
        // The run reports its outcome through the event channel; a closed
        // receiver surfaces here as a cancellation, which needs no logging.
        let _ = analyzer
            .analyze_with_progress(
                &media_root,
                &codec_config,
                &AnalyzeOptions::default(),
                &CancelFlag::new(),
                tx,
            )
            .await;
    });

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        let event = rx.recv().await?;
        let payload = serde_json::to_string(&event).unwrap_or_else(|e| {
            error!("Failed to serialize progress event: {}", e);
            r#"{"status":"error","message":"event serialization failed"}"#.to_string()
        });
        Some((Ok::<_, Infallible>(Event::default().data(payload)), rx))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_defaults_to_fifty_files() {
        let params = BulkAnalysisParams {
            max_files: None,
            sample: true,
        };
        assert_eq!(params.options().max_files, Some(50));
    }

    #[test]
    fn test_explicit_cap_wins_over_sample() {
        let params = BulkAnalysisParams {
            max_files: Some(10),
            sample: true,
        };
        assert_eq!(params.options().max_files, Some(10));
    }

    #[test]
    fn test_no_cap_by_default() {
        let params = BulkAnalysisParams {
            max_files: None,
            sample: false,
        };
        assert_eq!(params.options().max_files, None);
    }
}
