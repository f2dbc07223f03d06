use axum::Router;
use redactor::{
    anonymizer::Anonymizer,
    ner::EntityTagger,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

/// Builds the application router around the given tagger
pub fn test_app(tagger: impl EntityTagger + 'static) -> Router {
    let state = AppState {
        anonymizer: Arc::new(Anonymizer::new(Arc::new(tagger))),
    };
    server::router(state)
}
