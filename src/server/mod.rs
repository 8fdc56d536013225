mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Extension, Json},
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use crate::api::API;
use crate::server::handlers::places;

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn app<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/health", get(health))
        .route("/places", get(places::list).post(places::create))
        .route(
            "/places/:id",
            get(places::find).put(places::update).delete(places::delete),
        )
        .layer(middleware::from_fn(log_requests))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let app = app(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn log_requests(req: Request<Body>, next: Next<Body>) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(%method, path, status = response.status().as_u16(), "request completed");

    response
}
