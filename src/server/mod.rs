pub mod handlers;
mod types;

use crate::anonymizer::Anonymizer;
use crate::config::Config;
use crate::ner::BertTagger;
use crate::Result;
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Load the NER model once; it is shared by all requests and read-only
    // for the lifetime of the process.
    let tagger = BertTagger::spawn().await?;

    let app_state = handlers::AppState {
        anonymizer: Arc::new(Anonymizer::new(Arc::new(tagger))),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router. The browser frontend is served from a
/// different origin, hence the permissive CORS layer.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/anonymize", post(handlers::anonymize))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
