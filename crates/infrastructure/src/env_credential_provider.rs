use std::env;

use tintcalc_application::{CredentialProvider, UpstreamCredentials};

/// Environment variable holding the upstream API username.
pub const DUDA_API_USERNAME_ENV: &str = "DUDA_API_USERNAME";
/// Environment variable holding the upstream API password.
pub const DUDA_API_PASSWORD_ENV: &str = "DUDA_API_PASSWORD";

/// Reads upstream credentials from the process environment on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    username_var: String,
    password_var: String,
}

impl EnvCredentialProvider {
    /// Creates a provider reading the given variable names.
    #[must_use]
    pub fn new(username_var: impl Into<String>, password_var: impl Into<String>) -> Self {
        Self {
            username_var: username_var.into(),
            password_var: password_var.into(),
        }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DUDA_API_USERNAME_ENV, DUDA_API_PASSWORD_ENV)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn upstream_credentials(&self) -> Option<UpstreamCredentials> {
        let username = non_blank_env(self.username_var.as_str())?;
        let password = non_blank_env(self.password_var.as_str())?;

        Some(UpstreamCredentials::new(username, password))
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
