use crate::handler::AppModule;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

const GREETING: &str = "Welcome to Coderschool!";
const PATH_NOT_FOUND: &str = "Path not found";

pub trait IndexRouter {
    fn route_index(self) -> Self;
    /// Unmatched paths are looked up in `public_dir` before answering 404.
    fn fallback_static(self, public_dir: impl AsRef<Path>) -> Self;
}

impl IndexRouter for Router<AppModule> {
    fn route_index(self) -> Self {
        self.route(
            "/",
            get(|| async { (StatusCode::OK, GREETING) }).fallback(path_not_found),
        )
    }

    fn fallback_static(self, public_dir: impl AsRef<Path>) -> Self {
        let not_found = path_not_found.into_service();
        self.fallback_service(
            ServeDir::new(public_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(not_found),
        )
    }
}

/// Also answers known paths requested with a method they do not serve.
pub(crate) async fn path_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, PATH_NOT_FOUND)
}
