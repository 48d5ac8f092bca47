//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chirpy_api::{create_app, create_app_state, create_memory_app_state, AppState};
use chirpy_common::AppConfig;
use chirpy_db::MemoryStore;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret used by servers started with [`memory_config`]
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(memory_config("production")?).await
    }

    /// Start an in-memory server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_memory_app_state(config, Arc::new(MemoryStore::new()))?;
        Self::start_with_state(state).await
    }

    /// Start a server against the PostgreSQL database in `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config =
            AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a bodyless POST request
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a bodyless POST request with a bearer token
    pub async fn post_bearer(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_bearer(self.client.post(self.url(path)), token)
            .send()
            .await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::with_bearer(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::with_bearer(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_bearer(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }
}

/// Configuration for an in-memory server on the given platform
pub fn memory_config(platform: &str) -> Result<AppConfig> {
    let platform = platform.to_string();
    AppConfig::from_lookup(|key| match key {
        // Never dialled; the in-memory store is used instead
        "DATABASE_URL" => Some("postgres://localhost/unused".to_string()),
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "PLATFORM" => Some(platform.clone()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if a database is available for the PostgreSQL tests
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
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
