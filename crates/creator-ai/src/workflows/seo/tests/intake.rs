use super::common::*;
use crate::workflows::seo::intake::{metadata_from_submission, IntakeError};
use crate::workflows::seo::AnalysisSubmission;

#[test]
fn accepts_and_normalizes_a_valid_submission() {
    let mut submission = submission();
    submission.title = format!("  {}  ", submission.title);
    submission.tags.push("GAMING".to_string());
    submission.tags.push("   ".to_string());

    let (video_id, metadata) = metadata_from_submission(submission).expect("intake accepts");

    assert_eq!(video_id.as_deref(), Some("yt-0001"));
    assert!(!metadata.title.starts_with(' '));
    // The uppercase duplicate and the blank tag are both dropped.
    assert_eq!(metadata.tags.len(), 8);
}

#[test]
fn blank_titles_are_rejected() {
    let mut submission = weak_submission();
    submission.title = " \u{feff} ".to_string();

    let error = metadata_from_submission(submission).expect_err("intake rejects");
    assert!(matches!(error, IntakeError::MissingTitle));
}

#[test]
fn overlong_titles_are_rejected() {
    let mut submission = weak_submission();
    submission.title = "x".repeat(101);

    let error = metadata_from_submission(submission).expect_err("intake rejects");
    assert!(matches!(error, IntakeError::TitleTooLong { chars: 101 }));
}

#[test]
fn overlong_descriptions_are_rejected() {
    let mut submission = weak_submission();
    submission.description = "y".repeat(5_001);

    let error = metadata_from_submission(submission).expect_err("intake rejects");
    assert!(matches!(error, IntakeError::DescriptionTooLong { .. }));
}

#[test]
fn tag_budget_is_capped() {
    let mut submission = weak_submission();
    submission.tags = (0..60).map(|n| format!("unique tag {n:02}")).collect();

    let error = metadata_from_submission(submission).expect_err("intake rejects");
    assert!(matches!(error, IntakeError::TagBudgetExceeded { .. }));
}

#[test]
fn invisible_characters_are_stripped_from_tags() {
    let submission = AnalysisSubmission {
        video_id: None,
        title: "A real title".to_string(),
        description: String::new(),
        tags: vec!["\u{feff}gaming".to_string(), "ga\u{200b}ming".to_string()],
    };

    let (_, metadata) = metadata_from_submission(submission).expect("intake accepts");

    // Both entries normalize to the same tag, so only one survives.
    assert_eq!(metadata.tags, vec!["gaming".to_string()]);
}
