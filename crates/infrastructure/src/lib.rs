//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod duda_collection_client;
mod env_credential_provider;
mod in_memory_collection_source;

pub use duda_collection_client::DudaCollectionClient;
pub use env_credential_provider::{
    DUDA_API_PASSWORD_ENV, DUDA_API_USERNAME_ENV, EnvCredentialProvider,
};
pub use in_memory_collection_source::InMemoryCollectionSource;
