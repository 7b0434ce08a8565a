use tintcalc_application::CollectionService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub collection_service: CollectionService,
    pub default_collection_name: String,
}
