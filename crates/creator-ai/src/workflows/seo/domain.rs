use serde::{Deserialize, Serialize};

/// Caller-supplied video metadata inspected by the scoring heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// The three inspected attributes of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoField {
    Title,
    Description,
    Tags,
}

impl SeoField {
    pub const fn label(self) -> &'static str {
        match self {
            SeoField::Title => "title",
            SeoField::Description => "description",
            SeoField::Tags => "tags",
        }
    }
}

/// Closed set of rules the checkers evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    TitleLength,
    TitleKeywords,
    TitlePowerWords,
    DescriptionLength,
    DescriptionKeywordDensity,
    DescriptionLinks,
    DescriptionTimestamps,
    TagCount,
    TagRelevance,
    TagVariety,
}

impl CheckKind {
    pub const fn label(self) -> &'static str {
        match self {
            CheckKind::TitleLength => "title_length",
            CheckKind::TitleKeywords => "title_keywords",
            CheckKind::TitlePowerWords => "title_power_words",
            CheckKind::DescriptionLength => "description_length",
            CheckKind::DescriptionKeywordDensity => "description_keyword_density",
            CheckKind::DescriptionLinks => "description_links",
            CheckKind::DescriptionTimestamps => "description_timestamps",
            CheckKind::TagCount => "tag_count",
            CheckKind::TagRelevance => "tag_relevance",
            CheckKind::TagVariety => "tag_variety",
        }
    }

    pub const fn field(self) -> SeoField {
        match self {
            CheckKind::TitleLength | CheckKind::TitleKeywords | CheckKind::TitlePowerWords => {
                SeoField::Title
            }
            CheckKind::DescriptionLength
            | CheckKind::DescriptionKeywordDensity
            | CheckKind::DescriptionLinks
            | CheckKind::DescriptionTimestamps => SeoField::Description,
            CheckKind::TagCount | CheckKind::TagRelevance | CheckKind::TagVariety => SeoField::Tags,
        }
    }
}

/// One evaluated rule: its verdict, score contribution, and a readable note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub kind: CheckKind,
    pub passed: bool,
    pub points: u8,
    pub message: String,
}

/// Outcome for a single field: the clamped score plus the check trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAnalysis {
    pub score: u8,
    pub checks: Vec<Check>,
}

impl FieldAnalysis {
    pub(crate) fn from_checks(checks: Vec<Check>) -> Self {
        let total: u16 = checks.iter().map(|check| u16::from(check.points)).sum();
        Self {
            score: total.min(100) as u8,
            checks,
        }
    }
}

/// Qualitative reading of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    NeedsWork,
    Poor,
}

impl ScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::Poor => "Poor",
        }
    }

    pub const fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 50 {
            ScoreBand::NeedsWork
        } else {
            ScoreBand::Poor
        }
    }
}

/// Full analysis for one video, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    pub title: FieldAnalysis,
    pub description: FieldAnalysis,
    pub tags: FieldAnalysis,
    pub overall_score: u8,
    pub band: ScoreBand,
    pub recommendations: Vec<String>,
}

/// Payload accepted by the intake guard ahead of scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSubmission {
    #[serde(default)]
    pub video_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Identifier wrapper for stored analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);
