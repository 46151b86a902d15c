//! View state for the matcher screen, kept free of any widget code.
//!
//! `MatchView::update` consumes a [`Message`] and returns the requests the
//! shell should start. Every request feeding a piece of state carries a
//! [`Ticket`]; completions whose ticket is no longer the latest for that
//! piece of state are dropped, so a slow answer for an old selection can
//! never replace the answer for the current one.

use crate::{Message, UploadKind};
use influmatch_core::{
    AnalysisResult, Brand, InfluencerMatch, Locale, Notice, ProfileData, RecoveryResult,
    RequestGeneration, Text, Ticket,
};
use tracing::debug;

/// Work the shell must start on behalf of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadBrands {
        ticket: Ticket,
    },
    MatchInfluencers {
        brand_name: String,
        ticket: Ticket,
    },
    AnalyzeMatch {
        influencer_name: String,
        brand_name: String,
        ticket: Ticket,
    },
    LoadProfile {
        influencer_name: String,
        ticket: Ticket,
    },
    AnalyzeBrand {
        brand_name: String,
    },
    AnalyzeInfluencer {
        influencer_name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPanel {
    pub influencer_name: String,
    pub brand_name: String,
    pub loading: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePanel {
    pub influencer_name: String,
    pub loading: bool,
    pub data: Option<ProfileData>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDialog {
    pub kind: Option<UploadKind>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub value_text: String,
    pub fill_percent: f64,
}

/// What the score card for one influencer shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub influencer: String,
    pub category: Option<String>,
    pub score_text: String,
    pub bars: Vec<ScoreBar>,
}

impl ScoreCard {
    pub fn from_match(entry: &InfluencerMatch, locale: Locale) -> Self {
        Self {
            influencer: entry.influencer.clone(),
            category: entry.category.clone(),
            score_text: entry.display_score(),
            bars: entry
                .details
                .axes()
                .iter()
                .map(|axis| ScoreBar {
                    label: axis.dimension.label(locale),
                    value_text: axis.display_value(),
                    fill_percent: axis.fill_percent(),
                })
                .collect(),
        }
    }
}

#[derive(Debug)]
pub struct MatchView {
    locale: Locale,
    brands: Vec<Brand>,
    brands_loading: bool,
    selected_brand: Option<String>,
    matches: Vec<InfluencerMatch>,
    matches_loading: bool,
    current: usize,
    analysis: Option<AnalysisPanel>,
    profile: Option<ProfilePanel>,
    upload: Option<UploadDialog>,
    notice: Option<Notice>,
    brand_requests: RequestGeneration,
    match_requests: RequestGeneration,
    analysis_requests: RequestGeneration,
    profile_requests: RequestGeneration,
}

impl MatchView {
    /// Fresh view with the brand list already requested.
    pub fn new(locale: Locale) -> (Self, Vec<Effect>) {
        let mut view = Self {
            locale,
            brands: Vec::new(),
            brands_loading: false,
            selected_brand: None,
            matches: Vec::new(),
            matches_loading: false,
            current: 0,
            analysis: None,
            profile: None,
            upload: None,
            notice: None,
            brand_requests: RequestGeneration::new(),
            match_requests: RequestGeneration::new(),
            analysis_requests: RequestGeneration::new(),
            profile_requests: RequestGeneration::new(),
        };
        let effect = view.request_brands();
        (view, vec![effect])
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn brand_names(&self) -> Vec<String> {
        self.brands.iter().map(|b| b.name.clone()).collect()
    }

    pub fn brands_loading(&self) -> bool {
        self.brands_loading
    }

    pub fn selected_brand(&self) -> Option<&str> {
        self.selected_brand.as_deref()
    }

    pub fn matches(&self) -> &[InfluencerMatch] {
        &self.matches
    }

    pub fn matches_loading(&self) -> bool {
        self.matches_loading
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_match(&self) -> Option<&InfluencerMatch> {
        self.matches.get(self.current)
    }

    pub fn score_card(&self) -> Option<ScoreCard> {
        self.current_match()
            .map(|entry| ScoreCard::from_match(entry, self.locale))
    }

    pub fn analysis(&self) -> Option<&AnalysisPanel> {
        self.analysis.as_ref()
    }

    pub fn profile(&self) -> Option<&ProfilePanel> {
        self.profile.as_ref()
    }

    pub fn upload(&self) -> Option<&UploadDialog> {
        self.upload.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::BrandsLoaded(ticket, result) => {
                if self.is_stale(&self.brand_requests, ticket, "brand list") {
                    return Vec::new();
                }
                self.brands_loading = false;
                let (brands, notice) = result.into_parts();
                self.brands = brands.unwrap_or_default();
                self.set_notice(notice);
                Vec::new()
            }
            Message::BrandSelected(brand_name) => self.select_brand(brand_name),
            Message::MatchesLoaded(ticket, result) => {
                if self.is_stale(&self.match_requests, ticket, "match list") {
                    return Vec::new();
                }
                self.matches_loading = false;
                let (matches, notice) = result.into_parts();
                self.matches = matches.unwrap_or_default();
                self.current = 0;
                self.close_panels();
                self.set_notice(notice);
                Vec::new()
            }
            Message::NextInfluencer => {
                if !self.matches.is_empty() {
                    self.current = (self.current + 1) % self.matches.len();
                    self.close_panels();
                }
                Vec::new()
            }
            Message::PreviousInfluencer => {
                if !self.matches.is_empty() {
                    let len = self.matches.len();
                    self.current = (self.current + len - 1) % len;
                    self.close_panels();
                }
                Vec::new()
            }
            Message::OpenAnalysis => {
                let influencer = self.current_match().map(|m| m.influencer.clone());
                let brand = self.selected_brand.clone();
                match (influencer, brand) {
                    (Some(influencer_name), Some(brand_name)) => {
                        vec![self.request_analysis(influencer_name, brand_name)]
                    }
                    _ => {
                        self.notice = Some(Notice::from_text(
                            "SELECTION_REQUIRED",
                            Text::SelectBothNotice,
                            self.locale,
                        ));
                        Vec::new()
                    }
                }
            }
            Message::Reanalyze => match self.analysis.take() {
                Some(panel) => vec![self.request_analysis(panel.influencer_name, panel.brand_name)],
                None => Vec::new(),
            },
            Message::AnalysisLoaded(ticket, result) => {
                if self.is_stale(&self.analysis_requests, ticket, "analysis") {
                    return Vec::new();
                }
                if let Some(panel) = self.analysis.as_mut() {
                    panel.loading = false;
                    let (analysis, notice) = result.into_parts();
                    panel.result = analysis;
                    panel.error = notice.clone();
                    self.set_notice(notice);
                }
                Vec::new()
            }
            Message::CloseAnalysis => {
                self.analysis = None;
                self.analysis_requests.invalidate();
                Vec::new()
            }
            Message::OpenProfile => match self.current_match() {
                Some(entry) => {
                    let influencer_name = entry.influencer.clone();
                    // Profile embedded in the match shows at once; the fetch refreshes it
                    let embedded = entry.profile.as_ref().map(|p| p.resolve(self.locale));
                    let ticket = self.profile_requests.issue();
                    self.profile = Some(ProfilePanel {
                        influencer_name: influencer_name.clone(),
                        loading: true,
                        data: embedded,
                    });
                    vec![Effect::LoadProfile {
                        influencer_name,
                        ticket,
                    }]
                }
                None => Vec::new(),
            },
            Message::ProfileLoaded(ticket, result) => {
                if self.is_stale(&self.profile_requests, ticket, "profile") {
                    return Vec::new();
                }
                let locale = self.locale;
                if let Some(panel) = self.profile.as_mut() {
                    panel.loading = false;
                    let fetched = result.is_recovered();
                    let (profile, notice) = result.into_parts();
                    panel.data = match (fetched, profile, panel.data.take()) {
                        (true, Some(profile), _) => Some(profile),
                        (false, _, Some(embedded)) => Some(embedded),
                        (_, profile, _) => {
                            Some(profile.unwrap_or_else(|| ProfileData::placeholder(locale)))
                        }
                    };
                    self.set_notice(notice);
                }
                Vec::new()
            }
            Message::CloseProfile => {
                self.profile = None;
                self.profile_requests.invalidate();
                Vec::new()
            }
            Message::OpenUpload => {
                self.upload = Some(UploadDialog::default());
                Vec::new()
            }
            Message::UploadKindChosen(kind) => {
                if let Some(dialog) = self.upload.as_mut() {
                    dialog.kind = Some(kind);
                }
                Vec::new()
            }
            Message::UploadNameChanged(name) => {
                if let Some(dialog) = self.upload.as_mut() {
                    dialog.name = name;
                }
                Vec::new()
            }
            Message::SubmitUpload => self.submit_upload(),
            Message::CancelUpload => {
                self.upload = None;
                Vec::new()
            }
            Message::UploadFinished(kind, result) => self.finish_upload(kind, result),
            Message::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
        }
    }

    fn select_brand(&mut self, brand_name: String) -> Vec<Effect> {
        if brand_name.trim().is_empty() {
            return Vec::new();
        }
        self.selected_brand = Some(brand_name.clone());
        self.matches.clear();
        self.current = 0;
        self.close_panels();
        vec![self.request_matches(brand_name)]
    }

    fn submit_upload(&mut self) -> Vec<Effect> {
        let Some(dialog) = self.upload.as_ref() else {
            return Vec::new();
        };
        let Some(kind) = dialog.kind else {
            return Vec::new();
        };

        let name = dialog.name.trim().to_string();
        if name.is_empty() {
            self.notice = Some(Notice::from_text(
                "NAME_REQUIRED",
                Text::EmptyNameNotice,
                self.locale,
            ));
            return Vec::new();
        }

        self.upload = None;
        match kind {
            UploadKind::Brand => vec![Effect::AnalyzeBrand { brand_name: name }],
            UploadKind::Influencer => vec![Effect::AnalyzeInfluencer {
                influencer_name: name,
            }],
        }
    }

    fn finish_upload(&mut self, kind: UploadKind, result: RecoveryResult<()>) -> Vec<Effect> {
        let succeeded = result.is_recovered();
        let (_, notice) = result.into_parts();
        self.set_notice(notice);
        if !succeeded {
            return Vec::new();
        }

        match kind {
            UploadKind::Brand => vec![self.request_brands()],
            UploadKind::Influencer => match self.selected_brand.clone() {
                Some(brand_name) => vec![self.request_matches(brand_name)],
                None => Vec::new(),
            },
        }
    }

    fn request_brands(&mut self) -> Effect {
        self.brands_loading = true;
        Effect::LoadBrands {
            ticket: self.brand_requests.issue(),
        }
    }

    fn request_matches(&mut self, brand_name: String) -> Effect {
        self.matches_loading = true;
        Effect::MatchInfluencers {
            brand_name,
            ticket: self.match_requests.issue(),
        }
    }

    fn request_analysis(&mut self, influencer_name: String, brand_name: String) -> Effect {
        let ticket = self.analysis_requests.issue();
        self.analysis = Some(AnalysisPanel {
            influencer_name: influencer_name.clone(),
            brand_name: brand_name.clone(),
            loading: true,
            result: None,
            error: None,
        });
        Effect::AnalyzeMatch {
            influencer_name,
            brand_name,
            ticket,
        }
    }

    fn close_panels(&mut self) {
        self.analysis = None;
        self.profile = None;
        self.analysis_requests.invalidate();
        self.profile_requests.invalidate();
    }

    fn set_notice(&mut self, notice: Option<Notice>) {
        if notice.is_some() {
            self.notice = notice;
        }
    }

    fn is_stale(&self, generation: &RequestGeneration, ticket: Ticket, what: &str) -> bool {
        let stale = !generation.is_current(ticket);
        if stale {
            debug!("Discarding stale {} response (ticket {})", what, ticket.value());
        }
        stale
    }
}
