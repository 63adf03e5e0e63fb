pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used items
pub use config::Config;
pub use error::{ProxyError, Result};
pub use models::{ParameterSet, ResponseCache};
pub use services::{CachingProxy, StationService};

/// Wires a fresh cache, the upstream client and the station service into the
/// HTTP router.
pub fn build_app(config: &Config, clock: Arc<dyn utils::Clock>) -> Result<axum::Router> {
    let proxy = CachingProxy::new(
        api::UpstreamClient::new(),
        Arc::new(ResponseCache::new()),
        clock,
        config.cache_ttl(),
    );
    let service = StationService::new(proxy, &config.base_url)?;
    Ok(api::router(Arc::new(service)))
}
