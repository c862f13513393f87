use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnalysisId, SeoReport, VideoMetadata};

/// Stored outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub metadata: VideoMetadata,
    pub report: SeoReport,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Flatten the record for API responses.
    pub fn summary_view(&self) -> AnalysisView {
        AnalysisView {
            analysis_id: self.analysis_id.clone(),
            video_id: self.video_id.clone(),
            overall_score: self.report.overall_score,
            band: self.report.band.label(),
            title_score: self.report.title.score,
            description_score: self.report.description.score,
            tags_score: self.report.tags.score,
            recommendations: self.report.recommendations.clone(),
            analyzed_at: self.analyzed_at,
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for coaching nudges (dashboard toasts, e-mail adapters).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: CoachingAlert) -> Result<(), AlertError>;
}

/// Alert payload so routes and tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingAlert {
    pub template: String,
    pub analysis_id: AnalysisId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Flattened representation of a stored analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub analysis_id: AnalysisId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub overall_score: u8,
    pub band: &'static str,
    pub title_score: u8,
    pub description_score: u8,
    pub tags_score: u8,
    pub recommendations: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
