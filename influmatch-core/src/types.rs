use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::locale::{Locale, Text};

/// Upper bound of every per-dimension score.
pub const FULL_MARK: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerMatch {
    pub influencer: String,
    pub total_score: f64,
    #[serde(default, alias = "scores")]
    pub details: ScoreDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PartialProfile>,
}

impl InfluencerMatch {
    /// Total score with one decimal, e.g. `49.3`.
    pub fn display_score(&self) -> String {
        format!("{:.1}", self.total_score)
    }
}

/// Per-dimension scores, each on a 0-10 scale.
///
/// Older backends send capitalized keys (`Type_of_product`, `Brand_Personality`);
/// those are accepted as aliases of the lowercase schema. A dimension the
/// server left out scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreDetails {
    #[serde(default, alias = "Type_of_product")]
    pub type_of_product: f64,
    #[serde(default, alias = "Target_group")]
    pub target_group: f64,
    #[serde(default, alias = "Positioning")]
    pub positioning: f64,
    #[serde(default, alias = "Brand_Personality")]
    pub brand_personality: f64,
    #[serde(default, alias = "Vision")]
    pub vision: f64,
}

impl ScoreDetails {
    /// Axes in radar order.
    pub fn axes(&self) -> [ScoreAxis; 5] {
        [
            ScoreAxis::new(Dimension::TypeOfProduct, self.type_of_product),
            ScoreAxis::new(Dimension::TargetGroup, self.target_group),
            ScoreAxis::new(Dimension::Positioning, self.positioning),
            ScoreAxis::new(Dimension::BrandPersonality, self.brand_personality),
            ScoreAxis::new(Dimension::Vision, self.vision),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    TypeOfProduct,
    TargetGroup,
    Positioning,
    BrandPersonality,
    Vision,
}

impl Dimension {
    pub fn label(&self, locale: Locale) -> &'static str {
        let text = match self {
            Dimension::TypeOfProduct => Text::ProductTypeAxis,
            Dimension::TargetGroup => Text::TargetGroupAxis,
            Dimension::Positioning => Text::PositioningAxis,
            Dimension::BrandPersonality => Text::PersonalityAxis,
            Dimension::Vision => Text::VisionAxis,
        };
        text.in_locale(locale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAxis {
    pub dimension: Dimension,
    pub value: f64,
}

impl ScoreAxis {
    pub fn new(dimension: Dimension, value: f64) -> Self {
        Self { dimension, value }
    }

    pub fn full_mark(&self) -> f64 {
        FULL_MARK
    }

    /// Bar fill as `value / 10 * 100`, clamped to `0..=100`.
    pub fn fill_percent(&self) -> f64 {
        if !self.value.is_finite() {
            return 0.0;
        }
        (self.value / FULL_MARK * 100.0).clamp(0.0, 100.0)
    }

    pub fn display_value(&self) -> String {
        format!("{:.1}/10", self.value)
    }
}

/// Profile narrative as sent by the server. Any field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialProfile {
    #[serde(default, alias = "Type_of_content")]
    pub type_of_content: Option<String>,
    #[serde(default, alias = "target_Audience")]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub positioning: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
}

impl PartialProfile {
    /// Fill every missing or blank field with its placeholder.
    pub fn resolve(&self, locale: Locale) -> ProfileData {
        let pick = |value: &Option<String>, placeholder: Text| -> String {
            match value {
                Some(text) if !text.trim().is_empty() => text.clone(),
                _ => placeholder.in_locale(locale).to_string(),
            }
        };

        ProfileData {
            type_of_content: pick(&self.type_of_content, Text::ContentPlaceholder),
            target_audience: pick(&self.target_audience, Text::AudiencePlaceholder),
            positioning: pick(&self.positioning, Text::PositioningPlaceholder),
            personality: pick(&self.personality, Text::PersonalityPlaceholder),
            vision: pick(&self.vision, Text::VisionPlaceholder),
        }
    }
}

/// Fully resolved profile; no field is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub type_of_content: String,
    pub target_audience: String,
    pub positioning: String,
    pub personality: String,
    pub vision: String,
}

impl ProfileData {
    pub fn placeholder(locale: Locale) -> Self {
        PartialProfile::default().resolve(locale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub influencer_strengths: String,
    pub content_style: String,
    pub brand_compatibility: String,
    pub campaign_suitability: String,
    pub strategic_recommendations: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
