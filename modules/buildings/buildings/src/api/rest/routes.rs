use crate::api::rest::handlers;
use crate::api::rest::views::ViewRenderer;
use crate::domain::service::Service;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;

pub fn register_routes(
    mut router: Router,
    service: Arc<Service>,
    views: Arc<dyn ViewRenderer>,
) -> Router {
    router = router
        .route("/", get(handlers::list_buildings))
        .route(
            "/create",
            get(handlers::create_form).post(handlers::create_building),
        )
        .route("/view/{id}", get(handlers::view_building))
        .route(
            "/update/{id}",
            get(handlers::update_form).post(handlers::update_building),
        )
        .route("/delete/{id}", get(handlers::delete_building));

    router = router.layer(Extension(service)).layer(Extension(views));

    router
}
