/// Router assembly
use crate::{api, state::AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `/api/assets/*path` and `/api/health` are the only API routes; every
/// other request falls back to the built web page directory (with an
/// index.html fallback for the page itself) or 404 when none is present.
pub fn create_router(app_state: AppState, web_dir: PathBuf) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/assets/*path", get(api::assets::get_asset));

    let web_fallback = move |req: Request<Body>| {
        let web_dir = web_dir.clone();
        async move {
            // Try to serve the file directly
            let path = req.uri().path().trim_start_matches('/');
            let file_path = web_dir.join(path);

            if file_path.exists() && file_path.is_file() {
                // Serve the actual file
                match ServeDir::new(&web_dir).oneshot(req).await {
                    Ok(res) => res.into_response(),
                    Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                }
            } else {
                // Fallback: serve index.html
                let index_path = web_dir.join("index.html");
                if index_path.exists() {
                    match tokio::fs::read(&index_path).await {
                        Ok(contents) => Response::builder()
                            .status(StatusCode::OK)
                            .header("content-type", "text/html; charset=utf-8")
                            .body(Body::from(contents))
                            .map_or_else(
                                |_| StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                                IntoResponse::into_response,
                            ),
                        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                    }
                } else {
                    // No web page available, return 404
                    StatusCode::NOT_FOUND.into_response()
                }
            }
        }
    };

    Router::new()
        .nest("/api", api_routes)
        .fallback(web_fallback)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
