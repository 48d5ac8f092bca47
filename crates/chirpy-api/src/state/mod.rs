//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and the file server hit counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chirpy_common::AppConfig;
use chirpy_service::ServiceContext;

/// Counts requests served under `/app`
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    /// Record one hit
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Set the count back to zero
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    hits: Arc<HitCounter>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            hits: Arc::new(HitCounter::default()),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the file server hit counter
    pub fn hits(&self) -> &HitCounter {
        &self.hits
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("hits", &self.hits.get())
            .finish()
    }
}
