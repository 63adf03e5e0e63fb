pub mod routes;
pub mod upstream;

pub use routes::router;
pub use upstream::UpstreamClient;
