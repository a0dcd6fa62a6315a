//! Server wiring for the comment gateway.

use std::sync::Arc;

use anyhow::Result as AnyhowResult;
use axum::Router;
use tokio::net::TcpListener;

use crate::router;
use crate::store::CommentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
}

#[derive(Clone)]
pub struct Server {
    pub state: Arc<AppState>,
    pub address: String,
}

impl Server {
    pub fn new(store: Arc<dyn CommentStore>, address: impl Into<String>) -> Self {
        Self {
            state: Arc::new(AppState { store }),
            address: address.into(),
        }
    }

    pub async fn run(&self) -> AnyhowResult<()> {
        let app: Router<()> = router::get_router().with_state(self.state.clone());

        tracing::info!("Comment gateway listening on {}", self.address);

        let tcp_listener = TcpListener::bind(&self.address).await?;

        axum::serve(tcp_listener, app.into_make_service())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    }
}
