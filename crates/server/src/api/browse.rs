//! Directory browsing handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use mediascope_core::{scan_directory, ScanItem};

use super::{error_response, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    /// Path relative to the media root; empty for the root itself.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub path: String,
    pub breadcrumb: Vec<Breadcrumb>,
    pub items: Vec<ScanItem>,
}

/// One segment of the navigation trail back to the media root.
#[derive(Debug, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// GET /api/browse
///
/// Lists the immediate children of a directory under the media root.
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<BrowseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let full_path = state
        .media_root()
        .resolve(&params.path)
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid path"))?;

    if !full_path.exists() {
        return Err(error_response(StatusCode::NOT_FOUND, "Path not found"));
    }

    let items = scan_directory(&full_path)
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(BrowseResponse {
        breadcrumb: build_breadcrumb(&params.path),
        path: params.path,
        items,
    }))
}

fn build_breadcrumb(path: &str) -> Vec<Breadcrumb> {
    let mut breadcrumb = Vec::new();
    let mut current = String::new();
    for part in path.split('/').filter(|p| !p.is_empty()) {
        current.push('/');
        current.push_str(part);
        breadcrumb.push(Breadcrumb {
            name: part.to_string(),
            path: current.clone(),
        });
    }
    breadcrumb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_accumulates_paths() {
        let crumbs = build_breadcrumb("movies/action/2024");
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0].name, "movies");
        assert_eq!(crumbs[0].path, "/movies");
        assert_eq!(crumbs[2].path, "/movies/action/2024");
    }

    #[test]
    fn test_breadcrumb_empty_for_root() {
        assert!(build_breadcrumb("").is_empty());
        assert!(build_breadcrumb("/").is_empty());
    }
}
