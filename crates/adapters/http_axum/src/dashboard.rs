//! Static page server for the admin page.
//!
//! `/` answers with the raw contents of `index.html` from the dashboard
//! directory, read from disk on every request and sent without validators,
//! so conditional and range headers never shorten the answer. Every other
//! path that no API route claims is looked up in the same directory, which
//! holds the compiled client bundle (WASM and JS glue).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

/// Name of the admin page markup file inside the dashboard directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the sub-router serving the admin page from `dir`.
pub fn routes<S>(dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = dir.join(INDEX_FILE);
    Router::new()
        .route("/", get(move || index_page(index.clone())))
        .fallback_service(ServeDir::new(dir))
}

async fn index_page(path: PathBuf) -> Response {
    match tokio::fs::read_to_string(&path).await {
        Ok(markup) => Html(markup).into_response(),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "admin page missing");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "unable to read admin page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
