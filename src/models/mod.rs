pub mod cache;
pub mod params;

pub use cache::{CacheEntry, CacheKey, ResponseCache};
pub use params::ParameterSet;
