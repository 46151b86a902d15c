pub mod api;
pub mod client;
pub mod metrics;

pub use api::MatchApiClient;
pub use client::MatchClient;
pub use metrics::{ApiMetrics, EndpointMetrics, MetricsCollector, RequestMetrics};
