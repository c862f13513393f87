//! Rule-based SEO scoring for video metadata.
//!
//! The core is synchronous and pure: every call scores the supplied metadata
//! from scratch and returns a fresh report, so concurrent callers never
//! interact. The service/router layers wrap that core with intake validation,
//! storage, and alerting.

mod description;
pub mod domain;
pub(crate) mod intake;
mod recommendations;
pub mod repository;
pub mod router;
pub mod service;
mod tags;
mod title;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisId, AnalysisSubmission, Check, CheckKind, FieldAnalysis, ScoreBand, SeoField,
    SeoReport, VideoMetadata,
};
pub use intake::IntakeError;
pub use repository::{
    AlertError, AlertPublisher, AnalysisRecord, AnalysisRepository, AnalysisView, CoachingAlert,
    RepositoryError,
};
pub use router::analysis_router;
pub use service::{AnalysisService, AnalysisServiceError};

const TITLE_WEIGHT: f32 = 0.35;
const DESCRIPTION_WEIGHT: f32 = 0.35;
const TAG_WEIGHT: f32 = 0.30;

/// Score a video's metadata across all three fields.
pub fn analyze(metadata: &VideoMetadata) -> SeoReport {
    let title = title::analyze_title(&metadata.title, &metadata.tags);
    let description = description::analyze_description(&metadata.description, &metadata.tags);
    let tags = tags::analyze_tags(&metadata.tags, &metadata.title);

    let overall_score = weighted_overall(title.score, description.score, tags.score);
    let recommendations = recommendations::generate(&title, &description, &tags);

    SeoReport {
        overall_score,
        band: ScoreBand::for_score(overall_score),
        title,
        description,
        tags,
        recommendations,
    }
}

fn weighted_overall(title: u8, description: u8, tags: u8) -> u8 {
    let weighted = f32::from(title) * TITLE_WEIGHT
        + f32::from(description) * DESCRIPTION_WEIGHT
        + f32::from(tags) * TAG_WEIGHT;
    weighted.round() as u8
}
