use std::sync::Arc;

use tintcalc_core::{AppError, AppResult};
use tintcalc_domain::{Collection, OutputMode};

use crate::{CollectionSource, CredentialProvider, RequestParams};

use super::config::WindowSelectionMissPolicy;
use super::projection::CollectionProjection;

/// Application service for collection fetch and projection.
#[derive(Clone)]
pub struct CollectionService {
    credential_provider: Arc<dyn CredentialProvider>,
    collection_source: Arc<dyn CollectionSource>,
    window_selection_miss: WindowSelectionMissPolicy,
}

impl CollectionService {
    /// Creates a new collection service.
    #[must_use]
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        collection_source: Arc<dyn CollectionSource>,
        window_selection_miss: WindowSelectionMissPolicy,
    ) -> Self {
        Self {
            credential_provider,
            collection_source,
            window_selection_miss,
        }
    }

    /// Fetches and projects the collection described by `params`.
    pub async fn resolve(&self, params: &RequestParams) -> AppResult<CollectionProjection> {
        let collection = self
            .fetch_collection(params.site().as_str(), params.collection().as_str())
            .await?;

        self.project(collection, params.output(), params.filter())
    }

    /// Fetches one collection and normalizes its payload.
    ///
    /// Credentials are checked before the upstream is contacted. Every
    /// failure reported by the source surfaces as [`AppError::Upstream`].
    pub async fn fetch_collection(
        &self,
        site_name: &str,
        collection_name: &str,
    ) -> AppResult<Collection> {
        let credentials = self
            .credential_provider
            .upstream_credentials()
            .ok_or_else(|| {
                AppError::Configuration("upstream API credentials are not configured".to_owned())
            })?;

        let payload = self
            .collection_source
            .get_collection(&credentials, site_name, collection_name)
            .await
            .map_err(|error| match error {
                AppError::Upstream(message) => AppError::Upstream(message),
                other => AppError::Upstream(other.to_string()),
            })?;

        Ok(Collection::from_payload(payload))
    }

    /// Projects an already fetched collection.
    pub fn project(
        &self,
        collection: Collection,
        output: OutputMode,
        filter: Option<&str>,
    ) -> AppResult<CollectionProjection> {
        CollectionProjection::project(collection, output, filter, self.window_selection_miss)
    }
}
