use crate::metrics::{ApiMetrics, MetricsCollector, RequestMetrics};
use influmatch_core::{
    AnalysisResult, AppConfig, Brand, CoreError, InfluencerMatch, MatchApiError, PartialProfile,
};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use url::Url;
use uuid::Uuid;

pub const BRANDS_ENDPOINT: &str = "/api/v1/brands";
pub const MATCH_INFLUENCERS_ENDPOINT: &str = "/api/v1/match-influencers";
pub const ANALYZE_MATCH_ENDPOINT: &str = "/api/v1/analyze-match";
pub const INFLUENCER_ANALYSIS_ENDPOINT: &str = "/api/v1/influencer-analysis";
pub const ANALYZE_BRAND_ENDPOINT: &str = "/api/v1/analyze-brand";
pub const ANALYZE_INFLUENCER_ENDPOINT: &str = "/api/v1/analyze-influencer";

#[derive(Debug, Serialize)]
struct BrandRequest<'a> {
    brand_name: &'a str,
}

#[derive(Debug, Serialize)]
struct InfluencerRequest<'a> {
    influencer_name: &'a str,
}

#[derive(Debug, Serialize)]
struct AnalyzeMatchRequest<'a> {
    influencer_name: &'a str,
    brand_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(default)]
    matches: Option<Vec<InfluencerMatch>>,
}

/// Thin HTTP layer over the matching service. One call per operation, no retries.
#[derive(Debug)]
pub struct MatchApiClient {
    http_client: Client,
    base_url: Url,
    metrics: Arc<MetricsCollector>,
    user_agent: String,
}

impl MatchApiClient {
    pub fn new(base_url: &str, user_agent: impl Into<String>) -> Result<Self, CoreError> {
        let user_agent = user_agent.into();
        let base_url = Url::parse(base_url).map_err(|e| CoreError::Internal {
            message: format!("Invalid API base URL {base_url}: {e}"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::Internal {
                message: format!("API base URL cannot carry paths: {base_url}"),
            });
        }

        let http_client = Client::builder().user_agent(&user_agent).build()?;

        Ok(Self {
            http_client,
            base_url,
            metrics: Arc::new(MetricsCollector::new()),
            user_agent,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        Self::new(&config.api_base_url, config.user_agent.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn endpoint_url(&self, endpoint: &str, tail: Option<&str>) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| CoreError::Internal {
                message: format!("API base URL cannot carry paths: {}", self.base_url),
            })?;
            segments
                .pop_if_empty()
                .extend(endpoint.split('/').filter(|s| !s.is_empty()));
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    pub async fn make_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, CoreError> {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();

        let mut request_builder = self
            .http_client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request_builder = request_builder.json(body);
        }

        info!(%request_id, "Matching API request: {} {}", method, endpoint);
        let (result, status_code, error_type) = match request_builder.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    debug!(%request_id, "Request successful: {} for {}", status, endpoint);
                    (Ok(response), Some(status.as_u16()), None)
                } else {
                    error!(
                        %request_id,
                        "Request failed with status: {} for {} {}", status, method, endpoint
                    );
                    let err = CoreError::MatchApi(MatchApiError::HttpStatus {
                        endpoint: endpoint.to_string(),
                        status_code: status.as_u16(),
                    });
                    (Err(err), Some(status.as_u16()), Some("http_status"))
                }
            }
            Err(e) if e.is_timeout() => {
                error!(%request_id, "Request timed out for {} {}: {}", method, endpoint, e);
                (
                    Err(CoreError::MatchApi(MatchApiError::RequestTimeout)),
                    None,
                    Some("timeout"),
                )
            }
            Err(e) => {
                error!(%request_id, "Network error for {} {}: {}", method, endpoint, e);
                (Err(CoreError::Network(e)), None, Some("network_error"))
            }
        };

        self.metrics
            .record_request(RequestMetrics {
                endpoint: endpoint.to_string(),
                method: method.to_string(),
                status_code,
                response_time: start_time.elapsed(),
                success: result.is_ok(),
                error_type: error_type.map(str::to_string),
            })
            .await;

        result
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<T, CoreError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response from {}: {}", endpoint, e);
            CoreError::MatchApi(MatchApiError::InvalidResponse {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            })
        })
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>, CoreError> {
        let url = self.endpoint_url(BRANDS_ENDPOINT, None)?;
        let response = self
            .make_request::<()>(Method::GET, BRANDS_ENDPOINT, url, None)
            .await?;

        let brands: Vec<Brand> = Self::read_json(response, BRANDS_ENDPOINT).await?;
        info!("Retrieved {} brands", brands.len());
        Ok(brands)
    }

    /// Matches in server ranking order. A response without `matches` is an empty result.
    pub async fn match_influencers(
        &self,
        brand_name: &str,
    ) -> Result<Vec<InfluencerMatch>, CoreError> {
        let brand_name = require_name(brand_name, "brand_name")?;
        let url = self.endpoint_url(MATCH_INFLUENCERS_ENDPOINT, None)?;
        let response = self
            .make_request(
                Method::POST,
                MATCH_INFLUENCERS_ENDPOINT,
                url,
                Some(&BrandRequest { brand_name }),
            )
            .await?;

        let parsed: MatchResponse = Self::read_json(response, MATCH_INFLUENCERS_ENDPOINT).await?;
        let matches = match parsed.matches {
            Some(matches) => matches,
            None => {
                warn!("No matches array in response for {}, using empty list", brand_name);
                Vec::new()
            }
        };

        info!("Retrieved {} matches for {}", matches.len(), brand_name);
        Ok(matches)
    }

    pub async fn analyze_match(
        &self,
        influencer_name: &str,
        brand_name: &str,
    ) -> Result<AnalysisResult, CoreError> {
        let influencer_name = require_name(influencer_name, "influencer_name")?;
        let brand_name = require_name(brand_name, "brand_name")?;
        let url = self.endpoint_url(ANALYZE_MATCH_ENDPOINT, None)?;
        let response = self
            .make_request(
                Method::POST,
                ANALYZE_MATCH_ENDPOINT,
                url,
                Some(&AnalyzeMatchRequest {
                    influencer_name,
                    brand_name,
                }),
            )
            .await?;

        let analysis = Self::read_json(response, ANALYZE_MATCH_ENDPOINT).await?;
        debug!("Retrieved analysis for {} x {}", influencer_name, brand_name);
        Ok(analysis)
    }

    pub async fn fetch_influencer_analysis(
        &self,
        influencer_name: &str,
    ) -> Result<PartialProfile, CoreError> {
        let influencer_name = require_name(influencer_name, "influencer_name")?;
        let url = self.endpoint_url(INFLUENCER_ANALYSIS_ENDPOINT, Some(influencer_name))?;
        let response = self
            .make_request::<()>(Method::GET, INFLUENCER_ANALYSIS_ENDPOINT, url, None)
            .await?;

        let profile = Self::read_json(response, INFLUENCER_ANALYSIS_ENDPOINT).await?;
        debug!("Retrieved influencer analysis for {}", influencer_name);
        Ok(profile)
    }

    /// Submits a brand for analysis. The response body is not used.
    pub async fn analyze_brand(&self, brand_name: &str) -> Result<(), CoreError> {
        let brand_name = require_name(brand_name, "brand_name")?;
        let url = self.endpoint_url(ANALYZE_BRAND_ENDPOINT, None)?;
        self.make_request(
            Method::POST,
            ANALYZE_BRAND_ENDPOINT,
            url,
            Some(&BrandRequest { brand_name }),
        )
        .await?;

        info!("Submitted brand {} for analysis", brand_name);
        Ok(())
    }

    /// Submits an influencer for analysis. The response body is not used.
    pub async fn analyze_influencer(&self, influencer_name: &str) -> Result<(), CoreError> {
        let influencer_name = require_name(influencer_name, "influencer_name")?;
        let url = self.endpoint_url(ANALYZE_INFLUENCER_ENDPOINT, None)?;
        self.make_request(
            Method::POST,
            ANALYZE_INFLUENCER_ENDPOINT,
            url,
            Some(&InfluencerRequest { influencer_name }),
        )
        .await?;

        info!("Submitted influencer {} for analysis", influencer_name);
        Ok(())
    }

    pub async fn get_metrics(&self) -> ApiMetrics {
        self.metrics.get_metrics().await
    }

    pub async fn reset_metrics(&self) {
        self.metrics.reset_metrics().await;
    }
}

fn require_name<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
