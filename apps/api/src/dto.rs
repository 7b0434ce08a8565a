mod collection;
mod common;

pub use collection::{
    CollectionProjectionResponse, collection_query_from_raw, editor_request_body,
};
pub use common::HealthResponse;
