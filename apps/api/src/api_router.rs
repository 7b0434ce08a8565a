mod cors;


use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::collection::{
    COLLECTION_ROUTE, editor_fetch_collection_handler, fetch_collection_handler,
    preflight_handler,
};
use crate::state::AppState;
use crate::{error, handlers};

pub fn build_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            COLLECTION_ROUTE,
            get(fetch_collection_handler)
                .post(editor_fetch_collection_handler)
                .options(preflight_handler),
        )
        .fallback(handlers::fallback::not_found_handler)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer())
        .with_state(app_state);

    cors::apply_response_envelope(router)
}
