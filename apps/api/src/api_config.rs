use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use tintcalc_application::{DEFAULT_COLLECTION_NAME, WindowSelectionMissPolicy};
use tintcalc_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.duda.co";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub default_collection_name: String,
    pub window_selection_miss: WindowSelectionMissPolicy,
}

impl ApiConfig {
    /// Loads configuration from the process environment.
    ///
    /// Upstream credentials are deliberately not part of it; they are read
    /// per request so a missing secret fails requests, not start-up.
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_host = value("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned());
        let api_port = value("API_PORT")
            .map(|port| {
                port.trim().parse::<u16>().map_err(|error| {
                    AppError::Configuration(format!("invalid API_PORT '{port}': {error}"))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_API_PORT);

        let upstream_base_url = value("DUDA_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_owned());
        url::Url::parse(&upstream_base_url).map_err(|error| {
            AppError::Configuration(format!(
                "invalid DUDA_API_BASE_URL '{upstream_base_url}': {error}"
            ))
        })?;

        let upstream_timeout_secs = value("UPSTREAM_TIMEOUT_SECS")
            .map(|seconds| {
                seconds
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|seconds| *seconds > 0)
                    .ok_or_else(|| {
                        AppError::Configuration(format!(
                            "UPSTREAM_TIMEOUT_SECS must be a positive integer, got '{seconds}'"
                        ))
                    })
            })
            .transpose()?
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        let default_collection_name = value("DEFAULT_COLLECTION_NAME")
            .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_owned());

        let window_selection_miss = value("WINDOW_SELECTION_MISS")
            .map(|policy| WindowSelectionMissPolicy::parse_transport(policy.as_str()))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            api_host,
            api_port,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            default_collection_name,
            window_selection_miss,
        })
    }

    pub fn socket_address(&self) -> AppResult<SocketAddr> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Configuration(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
