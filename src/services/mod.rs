pub mod caching_proxy;
pub mod station_service;

pub use caching_proxy::CachingProxy;
pub use station_service::{normalize_reading_params, StationService};
