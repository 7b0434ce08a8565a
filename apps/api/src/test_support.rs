use std::sync::Arc;

use serde_json::{Value, json};
use tintcalc_application::{
    CollectionService, CollectionSource, CredentialProvider, DEFAULT_COLLECTION_NAME,
    UpstreamCredentials, WindowSelectionMissPolicy,
};
use tintcalc_infrastructure::InMemoryCollectionSource;

use crate::state::AppState;

pub const SITE_NAME: &str = "site-1";

pub struct StaticCredentialProvider {
    credentials: Option<UpstreamCredentials>,
}

impl CredentialProvider for StaticCredentialProvider {
    fn upstream_credentials(&self) -> Option<UpstreamCredentials> {
        self.credentials.clone()
    }
}

pub fn catalog_payload() -> Value {
    json!({
        "name": "CarCatalog",
        "fields": [{
            "name": "WindowParts",
            "type": "multi_select",
            "multi_select_options": ["Front", "Rear"]
        }],
        "values": [{
            "id": "1",
            "data": {
                "RenderName": "Sedan A",
                "Image": "http://x/a.png",
                "WindowParts": ["Front"]
            }
        }]
    })
}

pub fn catalog_source() -> Arc<InMemoryCollectionSource> {
    Arc::new(InMemoryCollectionSource::new().with_collection(
        SITE_NAME,
        DEFAULT_COLLECTION_NAME,
        catalog_payload(),
    ))
}

pub fn app_state_with(
    source: Arc<dyn CollectionSource>,
    credentials: Option<UpstreamCredentials>,
    window_selection_miss: WindowSelectionMissPolicy,
) -> AppState {
    AppState {
        collection_service: CollectionService::new(
            Arc::new(StaticCredentialProvider { credentials }),
            source,
            window_selection_miss,
        ),
        default_collection_name: DEFAULT_COLLECTION_NAME.to_owned(),
    }
}

pub fn partner_credentials() -> Option<UpstreamCredentials> {
    Some(UpstreamCredentials::new("partner", "secret"))
}

pub fn catalog_app_state() -> AppState {
    app_state_with(
        catalog_source(),
        partner_credentials(),
        WindowSelectionMissPolicy::default(),
    )
}
