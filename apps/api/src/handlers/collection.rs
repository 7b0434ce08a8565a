use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use tintcalc_application::RequestParams;
use tintcalc_core::AppError;
use tracing::{debug, error, info, warn};

use crate::dto::{CollectionProjectionResponse, collection_query_from_raw, editor_request_body};
use crate::error::ApiResult;
use crate::state::AppState;


pub const COLLECTION_ROUTE: &str = "/api/fetch-collection";

/// Query-only invocation used for manual and debug calls.
pub async fn fetch_collection_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> ApiResult<CollectionProjectionResponse> {
    let params = RequestParams::from_query(collection_query_from_raw(raw_query.as_deref()))
        .inspect_err(|error| debug!(error = %error, "rejected collection query"))?;

    resolve_collection(&state, params).await
}

/// Invocation from the editor's dropdown proxy, with the site in the body.
pub async fn editor_fetch_collection_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    body: Bytes,
) -> ApiResult<CollectionProjectionResponse> {
    let params = RequestParams::from_editor_request(
        collection_query_from_raw(raw_query.as_deref()),
        &editor_request_body(&body),
        state.default_collection_name.as_str(),
    )
    .inspect_err(|error| debug!(error = %error, "rejected editor collection request"))?;

    resolve_collection(&state, params).await
}

pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

async fn resolve_collection(
    state: &AppState,
    params: RequestParams,
) -> ApiResult<CollectionProjectionResponse> {
    match state.collection_service.resolve(&params).await {
        Ok(projection) => {
            debug!(
                site_name = %params.site(),
                collection_name = %params.collection(),
                output = %params.output(),
                "collection projected"
            );
            Ok(CollectionProjectionResponse(projection))
        }
        Err(app_error) => {
            match &app_error {
                AppError::Configuration(message) => {
                    error!(error = %message, "collection request rejected by configuration");
                }
                AppError::NotFound(message) => info!(
                    site_name = %params.site(),
                    collection_name = %params.collection(),
                    output = %params.output(),
                    error = %message,
                    "collection projection not found"
                ),
                other => warn!(
                    site_name = %params.site(),
                    collection_name = %params.collection(),
                    error = %other,
                    "upstream collection request failed"
                ),
            }
            Err(app_error.into())
        }
    }
}
