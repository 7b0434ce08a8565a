use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use serde_json::Value;
use tintcalc_core::AppResult;

/// Account credentials for the upstream collection API.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamCredentials {
    username: String,
    password: String,
}

impl UpstreamCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the API username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the API password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl Debug for UpstreamCredentials {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UpstreamCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Port resolving upstream credentials from process configuration.
pub trait CredentialProvider: Send + Sync {
    /// Returns the configured credentials, or `None` when either is missing.
    fn upstream_credentials(&self) -> Option<UpstreamCredentials>;
}

/// Port for the upstream collection retrieval capability.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Retrieves the raw, unvalidated payload of one collection.
    async fn get_collection(
        &self,
        credentials: &UpstreamCredentials,
        site_name: &str,
        collection_name: &str,
    ) -> AppResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::UpstreamCredentials;

    #[test]
    fn debug_output_redacts_password() {
        let credentials = UpstreamCredentials::new("partner", "s3cret");
        let rendered = format!("{credentials:?}");

        assert!(rendered.contains("partner"));
        assert!(!rendered.contains("s3cret"));
    }
}
