use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use tintcalc_core::{AppError, AppResult};
use tintcalc_domain::{Collection, OptionEntry, OutputMode};

use crate::{
    CollectionProjection, CollectionRequestQuery, CollectionService, CollectionSource,
    CredentialProvider, RequestParams, UpstreamCredentials, WindowSelectionMissPolicy,
};

struct StaticCredentialProvider {
    credentials: Option<UpstreamCredentials>,
}

impl CredentialProvider for StaticCredentialProvider {
    fn upstream_credentials(&self) -> Option<UpstreamCredentials> {
        self.credentials.clone()
    }
}

struct FakeCollectionSource {
    response: Mutex<Option<AppResult<Value>>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeCollectionSource {
    fn returning(response: AppResult<Value>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl CollectionSource for FakeCollectionSource {
    async fn get_collection(
        &self,
        credentials: &UpstreamCredentials,
        site_name: &str,
        collection_name: &str,
    ) -> AppResult<Value> {
        self.calls.lock().await.push((
            credentials.username().to_owned(),
            site_name.to_owned(),
            collection_name.to_owned(),
        ));

        self.response
            .lock()
            .await
            .take()
            .unwrap_or_else(|| Err(AppError::Internal("fake source exhausted".to_owned())))
    }
}

fn catalog_payload() -> Value {
    json!({
        "fields": [{
            "name": "WindowParts",
            "type": "multi_select",
            "multi_select_options": ["Front", "Rear"]
        }],
        "values": [{
            "data": {
                "RenderName": "Sedan A",
                "Image": "http://x/a.png",
                "WindowParts": ["Front"]
            }
        }]
    })
}

fn build_service(
    credentials: Option<UpstreamCredentials>,
    source: Arc<FakeCollectionSource>,
    miss_policy: WindowSelectionMissPolicy,
) -> CollectionService {
    CollectionService::new(
        Arc::new(StaticCredentialProvider { credentials }),
        source,
        miss_policy,
    )
}

fn partner_credentials() -> Option<UpstreamCredentials> {
    Some(UpstreamCredentials::new("partner", "secret"))
}

fn params(output: &str, render_name: Option<&str>) -> RequestParams {
    RequestParams::from_query(CollectionRequestQuery {
        site_name: Some("site-1".to_owned()),
        collection_name: Some("CarCatalog".to_owned()),
        output: Some(output.to_owned()),
        render_name: render_name.map(str::to_owned),
    })
    .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn missing_credentials_fail_before_upstream_call() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(None, source.clone(), WindowSelectionMissPolicy::EmptyList);

    let result = service.fetch_collection("site-1", "CarCatalog").await;

    assert!(matches!(result, Err(AppError::Configuration(_))));
    assert!(source.calls().await.is_empty());
}

#[tokio::test]
async fn fetch_passes_credentials_and_identifiers_to_source() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(
        partner_credentials(),
        source.clone(),
        WindowSelectionMissPolicy::EmptyList,
    );

    let collection = service
        .fetch_collection("site-1", "CarCatalog")
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(collection.values().count(), 1);
    assert_eq!(
        source.calls().await,
        vec![(
            "partner".to_owned(),
            "site-1".to_owned(),
            "CarCatalog".to_owned()
        )]
    );
}

#[tokio::test]
async fn fetch_normalizes_malformed_payload() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(
        json!({ "fields": null, "values": "none" }),
    )));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let collection = service
        .fetch_collection("site-1", "CarCatalog")
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(collection.fields().count(), 0);
    assert_eq!(collection.values().count(), 0);
}

#[tokio::test]
async fn upstream_failure_keeps_original_message() {
    let source = Arc::new(FakeCollectionSource::returning(Err(AppError::Upstream(
        "status 401 Unauthorized".to_owned(),
    ))));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let result = service.fetch_collection("site-1", "CarCatalog").await;

    assert!(matches!(
        result,
        Err(AppError::Upstream(message)) if message == "status 401 Unauthorized"
    ));
}

#[tokio::test]
async fn any_source_failure_is_reported_as_upstream_failure() {
    let source = Arc::new(FakeCollectionSource::returning(Err(AppError::NotFound(
        "collection 'Ghost' does not exist".to_owned(),
    ))));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let result = service.fetch_collection("site-1", "Ghost").await;

    assert!(matches!(
        result,
        Err(AppError::Upstream(message)) if message.contains("collection 'Ghost' does not exist")
    ));
}

#[tokio::test]
async fn resolve_projects_car_selection() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let projection = service
        .resolve(&params("carselection", None))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(
        projection,
        CollectionProjection::Options(vec![OptionEntry::new("http://x/a.png", "Sedan A")])
    );
}

#[tokio::test]
async fn resolve_projects_selected_window_parts() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let projection = service
        .resolve(&params("windowselection", Some("Sedan A")))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(
        projection,
        CollectionProjection::MultiSelectOptions(vec!["Front".to_owned()])
    );
}

#[tokio::test]
async fn resolve_projects_declared_window_parts_without_filter() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let projection = service
        .resolve(&params("windowselection", None))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(
        projection,
        CollectionProjection::MultiSelectOptions(vec!["Front".to_owned(), "Rear".to_owned()])
    );
}

#[tokio::test]
async fn resolve_passes_general_collection_through() {
    let source = Arc::new(FakeCollectionSource::returning(Ok(catalog_payload())));
    let service = build_service(
        partner_credentials(),
        source,
        WindowSelectionMissPolicy::EmptyList,
    );

    let projection = service
        .resolve(&params("general", None))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(
        projection,
        CollectionProjection::Raw(Collection::from_payload(catalog_payload()))
    );
}

#[test]
fn window_selection_miss_is_empty_by_default() {
    let collection = Collection::from_payload(catalog_payload());

    let projection = CollectionProjection::project(
        collection,
        OutputMode::WindowSelection,
        Some("sedan a"),
        WindowSelectionMissPolicy::default(),
    );

    assert!(matches!(
        projection,
        Ok(CollectionProjection::MultiSelectOptions(options)) if options.is_empty()
    ));
}

#[test]
fn window_selection_miss_can_be_not_found() {
    let collection = Collection::from_payload(catalog_payload());

    let projection = CollectionProjection::project(
        collection,
        OutputMode::WindowSelection,
        Some("Pickup"),
        WindowSelectionMissPolicy::NotFound,
    );

    assert!(matches!(projection, Err(AppError::NotFound(_))));
}

#[test]
fn selected_item_without_window_parts_yields_empty_list() {
    let collection = Collection::from_payload(json!({
        "values": [{ "data": { "RenderName": "Van", "WindowParts": { "front": true } } }]
    }));

    let projection = CollectionProjection::project(
        collection,
        OutputMode::WindowSelection,
        Some("Van"),
        WindowSelectionMissPolicy::NotFound,
    );

    assert!(matches!(
        projection,
        Ok(CollectionProjection::MultiSelectOptions(options)) if options.is_empty()
    ));
}

#[test]
fn window_selection_without_declared_field_is_not_found() {
    for payload in [
        json!({ "fields": [] }),
        json!({ "fields": [{ "name": "WindowParts", "type": "text" }] }),
        json!({ "fields": [{ "name": "WindowParts", "type": "multi_select" }] }),
        json!({
            "fields": [{
                "name": "WindowParts",
                "type": "multi_select",
                "multi_select_options": []
            }]
        }),
    ] {
        let projection = CollectionProjection::project(
            Collection::from_payload(payload),
            OutputMode::WindowSelection,
            None,
            WindowSelectionMissPolicy::EmptyList,
        );

        assert!(matches!(projection, Err(AppError::NotFound(_))));
    }
}

#[test]
fn car_selection_on_empty_collection_is_empty_list() {
    let projection = CollectionProjection::project(
        Collection::default(),
        OutputMode::CarSelection,
        None,
        WindowSelectionMissPolicy::EmptyList,
    );

    assert!(matches!(
        projection,
        Ok(CollectionProjection::Options(options)) if options.is_empty()
    ));
}

#[test]
fn miss_policy_parses_configuration_values() {
    assert_eq!(
        WindowSelectionMissPolicy::parse_transport("Empty").ok(),
        Some(WindowSelectionMissPolicy::EmptyList)
    );
    assert_eq!(
        WindowSelectionMissPolicy::parse_transport("not_found").ok(),
        Some(WindowSelectionMissPolicy::NotFound)
    );
    assert!(matches!(
        WindowSelectionMissPolicy::parse_transport("strict"),
        Err(AppError::Configuration(_))
    ));
}
