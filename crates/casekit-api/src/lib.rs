//! Comment gateway: a document store seam for post comments plus the
//! thin HTTP wrapper around it.
//!
//! The gateway is independent of the casekit conversion core in both
//! directions. The store trait is the seam: handlers stay thin and the
//! backing document store is swappable in tests.

pub mod domain;
pub mod router;
pub mod server;
pub mod store;

pub use crate::{
    domain::{Author, Comment, DeleteOutcome, StoreError},
    router::get_router,
    server::{AppState, Server},
    store::{CommentStore, InMemoryCommentStore},
};
