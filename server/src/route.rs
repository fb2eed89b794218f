mod book;
mod index;

pub use self::{book::*, index::*};

use crate::handler::AppModule;
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(module: AppModule, public_dir: impl AsRef<Path>) -> Router {
    Router::<AppModule>::new()
        .route_index()
        .route_book()
        .fallback_static(public_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(module)
}
