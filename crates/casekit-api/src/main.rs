//! Comment gateway entrypoint.

use std::sync::Arc;

use casekit_api::{InMemoryCommentStore, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let address =
        std::env::var("CASEKIT_API_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let server = Server::new(Arc::new(InMemoryCommentStore::new()), address);
    server.run().await
}
