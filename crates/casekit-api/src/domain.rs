//! Domain types for the comment gateway.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A comment attached to a post, enriched with its author's display
/// name at retrieval time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post: String,
    pub body: String,
    pub author: Author,
}

/// The subset of author data the gateway exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
}

/// Outcome of a delete call. The store distinguishes removal from
/// absence; what the HTTP layer does with the distinction is its own
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Failures the underlying document store can report
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("comment store failure: {0}")]
    Backend(String),
}
