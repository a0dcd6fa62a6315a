//! Comment store gateway and its in-memory reference implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Comment, DeleteOutcome, StoreError};

/// Gateway to wherever comments live.
///
/// Listing returns every comment of a post with its author enrichment
/// already applied; deletion reports whether the comment existed.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, StoreError>;
    async fn delete(&self, comment_id: &str) -> Result<DeleteOutcome, StoreError>;
}

/// In-memory store used by tests and the demo server
#[derive(Default)]
pub struct InMemoryCommentStore {
    comments: RwLock<HashMap<String, Comment>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, comment: Comment) {
        self.comments
            .write()
            .await
            .insert(comment.id.clone(), comment);
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, StoreError> {
        let comments = self.comments.read().await;
        let mut matched: Vec<Comment> = comments
            .values()
            .filter(|comment| comment.post == post_id)
            .cloned()
            .collect();
        // Deterministic listing order
        matched.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matched)
    }

    async fn delete(&self, comment_id: &str) -> Result<DeleteOutcome, StoreError> {
        match self.comments.write().await.remove(comment_id) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}
