use std::sync::Arc;

use tintcalc_application::CollectionService;
use tintcalc_core::{AppError, AppResult};
use tintcalc_infrastructure::{DudaCollectionClient, EnvCredentialProvider};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(config: &ApiConfig) -> AppResult<AppState> {
    let http_client = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let collection_source = Arc::new(DudaCollectionClient::new(
        http_client,
        config.upstream_base_url.as_str(),
    )?);
    let credential_provider = Arc::new(EnvCredentialProvider::default());

    Ok(AppState {
        collection_service: CollectionService::new(
            credential_provider,
            collection_source,
            config.window_selection_miss,
        ),
        default_collection_name: config.default_collection_name.clone(),
    })
}
