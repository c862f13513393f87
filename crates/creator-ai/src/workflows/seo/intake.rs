use std::collections::HashSet;

use super::domain::{AnalysisSubmission, VideoMetadata};

// Platform limits enforced before scoring.
const MAX_TITLE_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 5_000;
const MAX_TAG_BUDGET_CHARS: usize = 500;

/// Rejection raised when a submission breaks a platform limit.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("title runs {chars} characters; the platform caps titles at 100")]
    TitleTooLong { chars: usize },
    #[error("description runs {chars} characters; the platform caps descriptions at 5000")]
    DescriptionTooLong { chars: usize },
    #[error("tags total {chars} characters; the platform caps the combined tag budget at 500")]
    TagBudgetExceeded { chars: usize },
}

/// Normalize a submission into scorable metadata, rejecting limit violations.
pub(crate) fn metadata_from_submission(
    submission: AnalysisSubmission,
) -> Result<(Option<String>, VideoMetadata), IntakeError> {
    let AnalysisSubmission {
        video_id,
        title,
        description,
        tags,
    } = submission;

    let title = clean_line(&title);
    if title.is_empty() {
        return Err(IntakeError::MissingTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(IntakeError::TitleTooLong { chars });
    }

    let description = strip_invisible(&description).trim().to_string();
    let chars = description.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(IntakeError::DescriptionTooLong { chars });
    }

    let tags = clean_tags(tags);
    let budget: usize = tags.iter().map(|tag| tag.chars().count()).sum();
    if budget > MAX_TAG_BUDGET_CHARS {
        return Err(IntakeError::TagBudgetExceeded { chars: budget });
    }

    let video_id = video_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    Ok((
        video_id,
        VideoMetadata {
            title,
            description,
            tags,
        },
    ))
}

fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "")
}

/// Collapse runs of whitespace and strip invisible characters.
pub(crate) fn clean_line(value: &str) -> String {
    strip_invisible(value)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean each tag and drop blanks and case-insensitive duplicates.
pub(crate) fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for tag in tags {
        let tag = clean_line(&tag);
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_lowercase()) {
            cleaned.push(tag);
        }
    }
    cleaned
}
