use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMetrics {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub total_response_time: Duration,
    pub average_response_time: Duration,
    pub last_request_at: Option<DateTime<Utc>>,
    pub requests_by_endpoint: HashMap<String, EndpointMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointMetrics {
    pub request_count: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub total_response_time: Duration,
    pub min_response_time: Duration,
    pub max_response_time: Duration,
    pub last_status_code: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct RequestMetrics {
    pub endpoint: String,
    pub method: String,
    pub status_code: Option<u16>,
    pub response_time: Duration,
    pub success: bool,
    pub error_type: Option<String>,
}

impl EndpointMetrics {
    fn new() -> Self {
        Self {
            request_count: 0,
            success_count: 0,
            error_count: 0,
            total_response_time: Duration::ZERO,
            min_response_time: Duration::MAX,
            max_response_time: Duration::ZERO,
            last_status_code: None,
        }
    }

    fn update(&mut self, metrics: &RequestMetrics) {
        self.request_count += 1;
        self.total_response_time = self.total_response_time.saturating_add(metrics.response_time);
        self.min_response_time = self.min_response_time.min(metrics.response_time);
        self.max_response_time = self.max_response_time.max(metrics.response_time);
        self.last_status_code = metrics.status_code;

        if metrics.success {
            self.success_count += 1;
        } else {
            self.error_count += 1;
        }
    }

    pub fn average_response_time(&self) -> Duration {
        mean_duration(self.total_response_time, self.request_count)
    }

    pub fn success_rate(&self) -> f64 {
        if self.request_count == 0 {
            0.0
        } else {
            self.success_count as f64 / self.request_count as f64
        }
    }
}

fn mean_duration(total: Duration, count: u64) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / u128::from(count);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[derive(Debug)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<ApiMetrics>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(ApiMetrics::default())),
        }
    }

    pub async fn record_request(&self, request_metrics: RequestMetrics) {
        let mut metrics = self.metrics.write().await;

        metrics.total_requests += 1;
        metrics.last_request_at = Some(Utc::now());

        if request_metrics.success {
            metrics.successful_requests += 1;
        } else {
            metrics.failed_requests += 1;
        }

        metrics.total_response_time = metrics
            .total_response_time
            .saturating_add(request_metrics.response_time);
        metrics.average_response_time =
            mean_duration(metrics.total_response_time, metrics.total_requests);

        metrics
            .requests_by_endpoint
            .entry(request_metrics.endpoint.clone())
            .or_insert_with(EndpointMetrics::new)
            .update(&request_metrics);
    }

    pub async fn get_metrics(&self) -> ApiMetrics {
        self.metrics.read().await.clone()
    }

    pub async fn get_endpoint_metrics(&self, endpoint: &str) -> Option<EndpointMetrics> {
        let metrics = self.metrics.read().await;
        metrics.requests_by_endpoint.get(endpoint).cloned()
    }

    pub async fn reset_metrics(&self) {
        let mut metrics = self.metrics.write().await;
        *metrics = ApiMetrics::default();
    }

    pub async fn export_metrics(&self) -> Result<String, serde_json::Error> {
        let metrics = self.get_metrics().await;
        serde_json::to_string_pretty(&metrics)
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(endpoint: &str, millis: u64, success: bool) -> RequestMetrics {
        RequestMetrics {
            endpoint: endpoint.to_string(),
            method: "GET".to_string(),
            status_code: Some(if success { 200 } else { 500 }),
            response_time: Duration::from_millis(millis),
            success,
            error_type: (!success).then(|| "http_status".to_string()),
        }
    }

    #[tokio::test]
    async fn test_metrics_collection() {
        let collector = MetricsCollector::new();

        collector
            .record_request(request("/api/v1/brands", 100, true))
            .await;
        collector
            .record_request(request("/api/v1/brands", 300, false))
            .await;

        let metrics = collector.get_metrics().await;
        assert_eq!(metrics.total_requests, 2);
        assert_eq!(metrics.successful_requests, 1);
        assert_eq!(metrics.failed_requests, 1);
        assert_eq!(metrics.average_response_time, Duration::from_millis(200));
        assert!(metrics.last_request_at.is_some());
    }

    #[tokio::test]
    async fn test_endpoint_metrics() {
        let collector = MetricsCollector::new();
        collector
            .record_request(request("/api/v1/match-influencers", 100, true))
            .await;

        let endpoint = collector
            .get_endpoint_metrics("/api/v1/match-influencers")
            .await
            .unwrap();
        assert_eq!(endpoint.request_count, 1);
        assert_eq!(endpoint.success_rate(), 1.0);
        assert_eq!(endpoint.average_response_time(), Duration::from_millis(100));
        assert_eq!(endpoint.last_status_code, Some(200));

        assert!(collector.get_endpoint_metrics("/api/v1/brands").await.is_none());
    }

    #[test]
    fn test_mean_duration_handles_large_counts() {
        assert_eq!(mean_duration(Duration::ZERO, 0), Duration::ZERO);

        let count = u64::from(u32::MAX) + 10;
        let total = Duration::from_millis(2) * 1_000 * 1_000;
        let expected = Duration::from_nanos((total.as_nanos() / u128::from(count)) as u64);
        assert_eq!(mean_duration(total, count), expected);
        assert!(mean_duration(total, count) < Duration::from_millis(1));
    }

    #[tokio::test]
    async fn test_reset_and_export() {
        let collector = MetricsCollector::new();
        collector
            .record_request(request("/api/v1/brands", 10, true))
            .await;

        let exported = collector.export_metrics().await.unwrap();
        assert!(exported.contains("total_requests"));

        collector.reset_metrics().await;
        assert_eq!(collector.get_metrics().await.total_requests, 0);
    }
}
