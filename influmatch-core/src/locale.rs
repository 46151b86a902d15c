//! Display language for notices, placeholders and score labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "th" => Ok(Locale::Th),
            other => Err(ConfigError::InvalidValue {
                field: "locale".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Fixed user-facing strings. Every lookup returns a non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    ContentPlaceholder,
    AudiencePlaceholder,
    PositioningPlaceholder,
    PersonalityPlaceholder,
    VisionPlaceholder,
    ProductTypeAxis,
    TargetGroupAxis,
    PositioningAxis,
    PersonalityAxis,
    VisionAxis,
    NetworkNotice,
    TimeoutNotice,
    ServerNotice,
    InvalidResponseNotice,
    InvalidInputNotice,
    ConfigNotice,
    UnexpectedNotice,
    SelectBothNotice,
    EmptyNameNotice,
    AppTitle,
    LoadingBrands,
    SelectBrand,
    OpenUpload,
    Dismiss,
    FindingMatches,
    PickBrandPrompt,
    NoMatches,
    MatchScore,
    AnalyzeMatch,
    ShowProfile,
    UploadTitle,
    BrandKind,
    InfluencerKind,
    NameField,
    Submit,
    Cancel,
    Close,
    Analyzing,
    AnalyzeAgain,
    NoAnalysis,
    StrengthsHeading,
    ContentStyleHeading,
    CompatibilityHeading,
    CampaignHeading,
    RecommendationsHeading,
    ContentHeading,
    AudienceHeading,
    LoadingProfile,
}

impl Text {
    pub fn in_locale(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.english(),
            Locale::Th => self.thai(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Text::ContentPlaceholder => "Content not available",
            Text::AudiencePlaceholder => "Audience not specified",
            Text::PositioningPlaceholder => "Positioning not specified",
            Text::PersonalityPlaceholder => "Personality not specified",
            Text::VisionPlaceholder => "Vision not specified",
            Text::ProductTypeAxis => "Product Type",
            Text::TargetGroupAxis => "Target Group",
            Text::PositioningAxis => "Positioning",
            Text::PersonalityAxis => "Personality",
            Text::VisionAxis => "Vision",
            Text::NetworkNotice => {
                "Could not reach the matching service. Please check your connection."
            }
            Text::TimeoutNotice => "The matching service took too long to respond.",
            Text::ServerNotice => "The matching service returned an error. Please try again.",
            Text::InvalidResponseNotice => "The matching service sent an unexpected response.",
            Text::InvalidInputNotice => "Invalid input provided. Please check and try again.",
            Text::ConfigNotice => "Configuration error. Please check your settings.",
            Text::UnexpectedNotice => "An unexpected error occurred. Please try again later.",
            Text::SelectBothNotice => "Please select both an influencer and a brand.",
            Text::EmptyNameNotice => "Please enter a name.",
            Text::AppTitle => "Influencer Matcher",
            Text::LoadingBrands => "Loading brands...",
            Text::SelectBrand => "Select a brand",
            Text::OpenUpload => "Add brand or influencer",
            Text::Dismiss => "Dismiss",
            Text::FindingMatches => "Finding matching influencers...",
            Text::PickBrandPrompt => "Pick a brand to see matching influencers",
            Text::NoMatches => "No matching influencers found",
            Text::MatchScore => "Match score",
            Text::AnalyzeMatch => "Analyze match",
            Text::ShowProfile => "Profile",
            Text::UploadTitle => "Add for analysis",
            Text::BrandKind => "Brand",
            Text::InfluencerKind => "Influencer",
            Text::NameField => "Name",
            Text::Submit => "Submit",
            Text::Cancel => "Cancel",
            Text::Close => "Close",
            Text::Analyzing => "Analyzing...",
            Text::AnalyzeAgain => "Analyze again",
            Text::NoAnalysis => "No analysis available",
            Text::StrengthsHeading => "Influencer strengths",
            Text::ContentStyleHeading => "Content style",
            Text::CompatibilityHeading => "Brand compatibility",
            Text::CampaignHeading => "Campaign suitability",
            Text::RecommendationsHeading => "Strategic recommendations",
            Text::ContentHeading => "Content",
            Text::AudienceHeading => "Audience",
            Text::LoadingProfile => "Loading profile...",
        }
    }

    fn thai(self) -> &'static str {
        match self {
            Text::ContentPlaceholder => "ไม่มีข้อมูลเนื้อหา",
            Text::AudiencePlaceholder => "ไม่ระบุกลุ่มผู้ชม",
            Text::PositioningPlaceholder => "ไม่ระบุการวางตำแหน่ง",
            Text::PersonalityPlaceholder => "ไม่ระบุบุคลิกภาพ",
            Text::VisionPlaceholder => "ไม่ระบุวิสัยทัศน์",
            Text::ProductTypeAxis => "ประเภทสินค้า",
            Text::TargetGroupAxis => "กลุ่มเป้าหมาย",
            Text::PositioningAxis => "การวางตำแหน่ง",
            Text::PersonalityAxis => "บุคลิกภาพ",
            Text::VisionAxis => "วิสัยทัศน์",
            Text::NetworkNotice => "ไม่สามารถเชื่อมต่อบริการจับคู่ได้ กรุณาตรวจสอบการเชื่อมต่อ",
            Text::TimeoutNotice => "บริการจับคู่ตอบสนองช้าเกินไป",
            Text::ServerNotice => "บริการจับคู่เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง",
            Text::InvalidResponseNotice => "ได้รับข้อมูลที่ไม่ถูกต้องจากบริการจับคู่",
            Text::InvalidInputNotice => "ข้อมูลไม่ถูกต้อง กรุณาตรวจสอบแล้วลองใหม่",
            Text::ConfigNotice => "การตั้งค่าไม่ถูกต้อง กรุณาตรวจสอบการตั้งค่า",
            Text::UnexpectedNotice => "เกิดข้อผิดพลาดที่ไม่ทราบสาเหตุ",
            Text::SelectBothNotice => "กรุณาเลือกทั้งอินฟลูเอนเซอร์และแบรนด์",
            Text::EmptyNameNotice => "กรุณากรอกชื่อ",
            Text::AppTitle => "จับคู่อินฟลูเอนเซอร์",
            Text::LoadingBrands => "กำลังโหลดแบรนด์...",
            Text::SelectBrand => "เลือกแบรนด์",
            Text::OpenUpload => "เพิ่มแบรนด์หรืออินฟลูเอนเซอร์",
            Text::Dismiss => "ปิด",
            Text::FindingMatches => "กำลังค้นหาอินฟลูเอนเซอร์ที่เหมาะสม...",
            Text::PickBrandPrompt => "เลือกแบรนด์เพื่อดูอินฟลูเอนเซอร์ที่เหมาะสม",
            Text::NoMatches => "ไม่พบอินฟลูเอนเซอร์ที่เหมาะสม",
            Text::MatchScore => "คะแนนความเหมาะสม",
            Text::AnalyzeMatch => "วิเคราะห์การจับคู่",
            Text::ShowProfile => "โปรไฟล์",
            Text::UploadTitle => "เพิ่มข้อมูลเพื่อวิเคราะห์",
            Text::BrandKind => "แบรนด์",
            Text::InfluencerKind => "อินฟลูเอนเซอร์",
            Text::NameField => "ชื่อ",
            Text::Submit => "ส่ง",
            Text::Cancel => "ยกเลิก",
            Text::Close => "ปิด",
            Text::Analyzing => "กำลังวิเคราะห์...",
            Text::AnalyzeAgain => "วิเคราะห์อีกครั้ง",
            Text::NoAnalysis => "ไม่มีผลการวิเคราะห์",
            Text::StrengthsHeading => "จุดแข็งของอินฟลูเอนเซอร์",
            Text::ContentStyleHeading => "สไตล์เนื้อหา",
            Text::CompatibilityHeading => "ความเข้ากันได้กับแบรนด์",
            Text::CampaignHeading => "ความเหมาะสมกับแคมเปญ",
            Text::RecommendationsHeading => "ข้อเสนอแนะเชิงกลยุทธ์",
            Text::ContentHeading => "เนื้อหา",
            Text::AudienceHeading => "กลุ่มผู้ชม",
            Text::LoadingProfile => "กำลังโหลดโปรไฟล์...",
        }
    }
}
