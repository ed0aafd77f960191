use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::services::ServeDir;

use crate::api::rest::handlers;
use crate::infra::uploads::ImageStore;
use crate::Service;

/// Build the module router: the REST surface plus static serving of the
/// uploads directory.
pub fn router(service: Arc<Service>, store: Arc<ImageStore>) -> Router {
    let uploads = ServeDir::new(store.dir());

    Router::new()
        .route(
            "/points",
            post(handlers::create_point).get(handlers::list_points),
        )
        .route("/points/{id}", get(handlers::point_detail))
        .route("/items", get(handlers::list_items))
        .nest_service("/uploads", uploads)
        .layer(Extension(service))
        .layer(Extension(store))
}
