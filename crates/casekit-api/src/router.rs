//! HTTP wrapper over the comment store gateway.
//!
//! Two routes, mirroring the store contract: listing a post's comments
//! and deleting a comment by id. Path parameters are taken as-is with
//! no validation beyond presence. Every store failure collapses into a
//! generic 500 with the cause logged, never surfaced to the client.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::domain::DeleteOutcome;
use crate::server::AppState;

pub fn get_router() -> Router<Arc<AppState>> {
    Router::new().route("/:id", get(list_comments).delete(delete_comment))
}

/// `GET /:post_id` — 200 with a JSON array of the post's comments
async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Response {
    match state.store.list_for_post(&post_id).await {
        Ok(comments) => (StatusCode::OK, Json(comments)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, post_id = %post_id, "failed to list comments");
            internal_error()
        }
    }
}

/// `DELETE /:comment_id` — 204 with an empty body
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
) -> Response {
    match state.store.delete(&comment_id).await {
        Ok(DeleteOutcome::Deleted) => StatusCode::NO_CONTENT.into_response(),
        Ok(DeleteOutcome::NotFound) => {
            // Deletion is idempotent: absence reports the same 204 as
            // an actual removal.
            tracing::debug!(comment_id = %comment_id, "delete requested for unknown comment");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, comment_id = %comment_id, "failed to delete comment");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal server error" })),
    )
        .into_response()
}
