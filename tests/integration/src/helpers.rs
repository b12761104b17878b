//! Test helpers for integration tests
//!
//! Spawns a server on an ephemeral port and wraps `reqwest` with the
//! `/api/v1` prefix and bearer-token helpers.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use booking_api::{create_app, create_app_state};
use booking_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Prefix of every versioned route
pub const API_PREFIX: &str = "/api/v1";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Migrations run here, against DATABASE_URL
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0: the OS picks a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Unversioned path, e.g. `/health`
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    fn api(&self, builder: fn(&Client, String) -> RequestBuilder, path: &str, token: Option<&str>) -> RequestBuilder {
        let request = builder(&self.client, format!("{}{API_PREFIX}{path}", self.base_url()));
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET under `/api/v1`, optionally authenticated
    pub async fn api_get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        Ok(self.api(|c, url| c.get(url), path, token).send().await?)
    }

    /// POST a JSON body under `/api/v1`
    pub async fn api_post<T: Serialize>(&self, path: &str, token: Option<&str>, body: &T) -> Result<Response> {
        Ok(self.api(|c, url| c.post(url), path, token).json(body).send().await?)
    }

    /// POST without a body under `/api/v1`
    pub async fn api_post_empty(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.api(|c, url| c.post(url), path, Some(token)).send().await?)
    }

    pub async fn api_patch<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self.api(|c, url| c.patch(url), path, Some(token)).json(body).send().await?)
    }

    pub async fn api_delete(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.api(|c, url| c.delete(url), path, Some(token)).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    // The listener binds its own port; only the config loader needs one
    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    // Tests fire requests faster than any production limit
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
