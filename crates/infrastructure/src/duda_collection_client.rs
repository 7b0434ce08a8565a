use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tintcalc_application::{CollectionSource, UpstreamCredentials};
use tintcalc_core::{AppError, AppResult};
use tracing::debug;
use url::Url;

/// HTTP client for the Duda partner collections API.
#[derive(Debug, Clone)]
pub struct DudaCollectionClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl DudaCollectionClient {
    /// Creates a client against `base_url`, e.g. `https://api.duda.co`.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            AppError::Configuration(format!("invalid upstream base URL '{base_url}': {error}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Configuration(format!(
                "upstream base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn collection_url(&self, site_name: &str, collection_name: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Configuration(format!(
                    "upstream base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "api",
                "sites",
                "multiscreen",
                site_name,
                "collection",
                collection_name,
            ]);

        Ok(url)
    }
}

#[async_trait]
impl CollectionSource for DudaCollectionClient {
    async fn get_collection(
        &self,
        credentials: &UpstreamCredentials,
        site_name: &str,
        collection_name: &str,
    ) -> AppResult<Value> {
        let url = self.collection_url(site_name, collection_name)?;
        debug!(%url, "requesting upstream collection");

        let response = self
            .http_client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| {
                AppError::Upstream(format!("collection request transport error: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<response body unavailable>".to_owned());
            return Err(AppError::Upstream(format!(
                "collection request failed with status {status}: {body}"
            )));
        }

        response.json::<Value>().await.map_err(|error| {
            AppError::Upstream(format!("collection response is not valid JSON: {error}"))
        })
    }
}
