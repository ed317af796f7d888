// API handlers for the web server

use super::{IndexPage, SharedState, error::ApiError, models::*};
use axum::{
    Json,
    extract::{Path, Request, State},
    http::header,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

static BUNDLED_INDEX_HTML: &str = include_str!("../../static/index.html");

// --- GET /screenshots ---
// Lists image files in the screenshot directory with their sizes
pub async fn list_screenshots(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ScreenshotInfo>>, ApiError> {
    let screenshots = tokio::task::spawn_blocking(move || {
        state
            .store
            .list()
            .into_iter()
            .map(|filename| {
                let size = state.store.size_of(&filename);
                ScreenshotInfo { filename, size }
            })
            .collect::<Vec<_>>()
    })
    .await?;

    debug!("Returning {} screenshots", screenshots.len());
    Ok(Json(screenshots))
}

// --- DELETE /screenshots/{filename} ---
// Deletes one file and adds its size to the stats.
// Presence is checked separately from size, so an empty file is deleted rather than reported missing.
pub async fn delete_screenshot(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    debug!("Delete request: filename={}", filename);

    let task_state = state.clone();
    let task_filename = filename.clone();
    let deleted_size = tokio::task::spawn_blocking(move || {
        let size = task_state
            .store
            .stat(&task_filename)
            .ok_or_else(|| ApiError::FileNotFound(task_filename.clone()))?;

        if task_state.store.delete(&task_filename) {
            Ok(size)
        } else {
            Err(ApiError::DeletionFailed(task_filename))
        }
    })
    .await??;

    let total = state.stats.add_saved(deleted_size);
    info!(
        "Deleted {} ({} bytes), total saved: {} bytes",
        filename, deleted_size, total
    );

    Ok(Json(DeleteResponse {
        success: true,
        deleted_size,
    }))
}

// --- POST /screenshots/batch-delete ---
// Deletes several files; never fails as a whole, failures are reported per file
pub async fn batch_delete_screenshots(
    State(state): State<SharedState>,
    Json(payload): Json<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(
        "Batch delete request: {} file(s), request_id={}",
        payload.filenames.len(),
        request_id
    );

    let task_state = state.clone();
    let (deleted_size, failed_files) = tokio::task::spawn_blocking(move || {
        let mut deleted_size = 0u64;
        let mut failed_files = Vec::new();

        for filename in payload.filenames {
            match task_state.store.stat(&filename) {
                Some(size) if task_state.store.delete(&filename) => deleted_size += size,
                _ => failed_files.push(filename),
            }
        }

        (deleted_size, failed_files)
    })
    .await?;

    let total = state.stats.add_saved(deleted_size);
    if !failed_files.is_empty() {
        warn!(
            "Batch delete request_id={}: {} file(s) failed: {:?}",
            request_id,
            failed_files.len(),
            failed_files
        );
    }
    info!(
        "Batch delete request_id={}: freed {} bytes, total saved: {} bytes",
        request_id, deleted_size, total
    );

    Ok(Json(BatchDeleteResponse {
        success: true,
        deleted_size,
        failed_files,
    }))
}

// --- GET /stats ---
pub async fn get_stats(State(state): State<SharedState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_saved_space: state.stats.current_total(),
    })
}

// --- POST /shutdown ---
// Responds immediately; the process stops after the lifecycle grace period
pub async fn shutdown(State(state): State<SharedState>) -> Json<ShutdownResponse> {
    if !state.lifecycle.request_shutdown() {
        debug!("Shutdown already in progress");
    }

    Json(ShutdownResponse {
        message: "Shutting down...".to_string(),
    })
}

// --- GET / ---
// Serves the front-end entry page
pub async fn serve_index(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let html: Vec<u8> = match &state.index_page {
        IndexPage::Bundled => BUNDLED_INDEX_HTML.as_bytes().to_vec(),
        IndexPage::File(path) => tokio::fs::read(path).await.map_err(|e| {
            warn!("Cannot read index page {}: {}", path.display(), e);
            ApiError::NotFound("Index page not found".to_string())
        })?,
    };

    Ok((
        [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
        html,
    )
        .into_response())
}

// --- GET /images/{filename} ---
// Serves raw bytes of a regular file in the screenshot directory, content type from the extension
pub async fn serve_image(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let task_filename = filename.clone();
    let path = tokio::task::spawn_blocking(move || state.store.file_path(&task_filename))
        .await?
        .ok_or(ApiError::FileNotFound(filename))?;

    let response = match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    };

    Ok(response.into_response())
}
