//! Service configuration, read from command-line flags or the environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::error::{ProxyError, Result};

pub const DEFAULT_BASE_URL: &str = "https://environment.data.gov.uk/flood-monitoring";

/// Caching REST proxy for the flood-monitoring API
#[derive(Parser, Debug, Clone)]
#[command(name = "flood_proxy")]
#[command(version)]
pub struct Config {
    /// Base URL of the upstream flood-monitoring API
    #[arg(long, env = "FLOOD_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds a cached upstream response stays fresh
    #[arg(long, env = "FLOOD_CACHE_TTL", default_value_t = 300)]
    pub cache_ttl: u64,

    /// Address to listen on
    #[arg(long, env = "FLOOD_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProxyError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
