use crate::api::MatchApiClient;
use influmatch_core::{
    AnalysisResult, AppConfig, Brand, CoreError, ErrorRecovery, ErrorReporter, InfluencerMatch,
    Locale, ProfileData, RecoveryResult,
};

/// The operations the view drives. Failures come back as renderable outcomes
/// (an empty list, a placeholder profile, a notice), never as errors.
pub struct MatchClient {
    api: MatchApiClient,
    reporter: ErrorReporter,
}

impl MatchClient {
    pub fn new(api: MatchApiClient, locale: Locale) -> Self {
        Self {
            api,
            reporter: ErrorReporter::new().with_locale(locale),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        Ok(Self::new(MatchApiClient::from_config(config)?, config.locale))
    }

    pub fn api(&self) -> &MatchApiClient {
        &self.api
    }

    pub fn locale(&self) -> Locale {
        self.reporter.locale()
    }

    pub async fn list_brands(&self) -> RecoveryResult<Vec<Brand>> {
        ErrorRecovery::recover(self.api.list_brands().await, Some(Vec::new()), &self.reporter)
    }

    pub async fn match_influencers(&self, brand_name: &str) -> RecoveryResult<Vec<InfluencerMatch>> {
        ErrorRecovery::recover(
            self.api.match_influencers(brand_name).await,
            Some(Vec::new()),
            &self.reporter,
        )
    }

    pub async fn analyze_match(
        &self,
        influencer_name: &str,
        brand_name: &str,
    ) -> RecoveryResult<AnalysisResult> {
        ErrorRecovery::recover(
            self.api.analyze_match(influencer_name, brand_name).await,
            None,
            &self.reporter,
        )
    }

    /// Profile with every missing field replaced by its placeholder.
    pub async fn fetch_influencer_analysis(
        &self,
        influencer_name: &str,
    ) -> RecoveryResult<ProfileData> {
        let locale = self.locale();
        let result = self
            .api
            .fetch_influencer_analysis(influencer_name)
            .await
            .map(|partial| partial.resolve(locale));

        ErrorRecovery::recover(result, Some(ProfileData::placeholder(locale)), &self.reporter)
    }

    pub async fn analyze_brand(&self, brand_name: &str) -> RecoveryResult<()> {
        ErrorRecovery::recover(self.api.analyze_brand(brand_name).await, None, &self.reporter)
    }

    pub async fn analyze_influencer(&self, influencer_name: &str) -> RecoveryResult<()> {
        ErrorRecovery::recover(
            self.api.analyze_influencer(influencer_name).await,
            None,
            &self.reporter,
        )
    }
}
