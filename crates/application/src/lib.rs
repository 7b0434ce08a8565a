//! Application services and ports.

#![forbid(unsafe_code)]

mod collection_ports;
mod collection_service;
mod request_params;

pub use collection_ports::{CollectionSource, CredentialProvider, UpstreamCredentials};
pub use collection_service::{CollectionProjection, CollectionService, WindowSelectionMissPolicy};
pub use request_params::{CollectionRequestQuery, DEFAULT_COLLECTION_NAME, RequestParams};
