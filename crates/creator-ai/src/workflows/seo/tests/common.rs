use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::seo::domain::{AnalysisId, AnalysisSubmission, VideoMetadata};
use crate::workflows::seo::repository::{
    AlertError, AlertPublisher, AnalysisRecord, AnalysisRepository, CoachingAlert, RepositoryError,
};
use crate::workflows::seo::{analysis_router, AnalysisService};

pub(super) fn strong_metadata() -> VideoMetadata {
    VideoMetadata {
        // 58 characters, two tags verbatim, two power words.
        title: "Ultimate Beginner Guide: 10 Secret Tips for Gaming Success".to_string(),
        description: concat!(
            "This complete walkthrough doubles as a beginner tutorial: a guide to the ",
            "top 10 secret settings, with gaming tips for every rank. Gear list and ",
            "discord server: https://example.com/kit | chapters: 0:00 Intro, 4:30 ",
            "Settings, 12:45 Practice."
        )
        .to_string(),
        tags: [
            "gaming",
            "tips",
            "secret",
            "guide",
            "tutorial",
            "beginner",
            "top 10",
            "walkthrough",
        ]
        .iter()
        .map(|tag| tag.to_string())
        .collect(),
    }
}

pub(super) fn weak_metadata() -> VideoMetadata {
    VideoMetadata {
        title: "A".to_string(),
        description: String::new(),
        tags: Vec::new(),
    }
}

pub(super) fn submission() -> AnalysisSubmission {
    let metadata = strong_metadata();
    AnalysisSubmission {
        video_id: Some("yt-0001".to_string()),
        title: metadata.title,
        description: metadata.description,
        tags: metadata.tags,
    }
}

pub(super) fn weak_submission() -> AnalysisSubmission {
    let metadata = weak_metadata();
    AnalysisSubmission {
        video_id: None,
        title: metadata.title,
        description: metadata.description,
        tags: metadata.tags,
    }
}

pub(super) fn build_service() -> (
    AnalysisService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = AnalysisService::new(repository.clone(), alerts.clone());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored_count(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AnalysisRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.analysis_id == record.analysis_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.analysis_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<CoachingAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<CoachingAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: CoachingAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl AnalysisRepository for ConflictRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AnalysisRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn analysis_router_with_service(
    service: AnalysisService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    analysis_router(Arc::new(service))
}
