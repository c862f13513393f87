use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AnalysisId, AnalysisSubmission, ScoreBand};
use super::intake::{self, IntakeError};
use super::repository::{
    AlertError, AlertPublisher, AnalysisRecord, AnalysisRepository, CoachingAlert, RepositoryError,
};

/// Service composing intake, the scoring heuristic, storage, and alerting.
pub struct AnalysisService<R, A> {
    repository: Arc<R>,
    alerts: Arc<A>,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("seo-{id:06}"))
}

impl<R, A> AnalysisService<R, A>
where
    R: AnalysisRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>) -> Self {
        Self { repository, alerts }
    }

    /// Validate, score, and persist a submission in one pass.
    ///
    /// A report landing in the Poor band additionally emits a coaching alert
    /// so the dashboard can nudge the creator.
    pub fn submit(
        &self,
        submission: AnalysisSubmission,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let (video_id, metadata) = intake::metadata_from_submission(submission)?;
        let report = super::analyze(&metadata);

        let record = AnalysisRecord {
            analysis_id: next_analysis_id(),
            video_id,
            metadata,
            report,
            analyzed_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;

        if stored.report.band == ScoreBand::Poor {
            let mut details = BTreeMap::new();
            details.insert(
                "overall_score".to_string(),
                stored.report.overall_score.to_string(),
            );
            self.alerts.publish(CoachingAlert {
                template: "seo_score_poor".to_string(),
                analysis_id: stored.analysis_id.clone(),
                details,
            })?;
        }

        Ok(stored)
    }

    /// Fetch a stored analysis for API responses.
    pub fn get(&self, id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// List the most recent analyses, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, AnalysisServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
