use super::domain::{CheckKind, FieldAnalysis};

/// Most fixes a creator can realistically act on from one report.
const MAX_RECOMMENDATIONS: usize = 5;

/// Fixed urgency ranking and advice per rule; 1 is the most urgent.
const fn advice(kind: CheckKind) -> (u8, &'static str) {
    match kind {
        CheckKind::TitleKeywords => (1, "Work at least two of your tags into the title verbatim"),
        CheckKind::TitleLength => (2, "Rewrite the title to land between 50 and 60 characters"),
        CheckKind::DescriptionLength => (
            3,
            "Grow the description past 200 characters; the opening lines feed search snippets",
        ),
        CheckKind::DescriptionKeywordDensity => {
            (4, "Echo more of your tags inside the description copy")
        }
        CheckKind::TitlePowerWords => (
            5,
            "Add a proven click-through word such as \"ultimate\" or \"secret\" to the title",
        ),
        CheckKind::TagCount => (6, "Add tags until you have 8 to 15 covering the topic"),
        CheckKind::TagRelevance => (7, "Swap in tags that share words with the title"),
        CheckKind::DescriptionLinks => {
            (8, "Link related videos or socials with a full https:// URL")
        }
        CheckKind::DescriptionTimestamps => (
            9,
            "Add chapter timestamps like 0:00 so viewers can jump ahead",
        ),
        CheckKind::TagVariety => (10, "Mix short broad tags with multi-word specific phrases"),
    }
}

/// Rank every failed check across the three fields and keep the top fixes.
pub(crate) fn generate(
    title: &FieldAnalysis,
    description: &FieldAnalysis,
    tags: &FieldAnalysis,
) -> Vec<String> {
    let mut candidates: Vec<(u8, &'static str)> = Vec::new();
    for analysis in [title, description, tags] {
        for check in &analysis.checks {
            if !check.passed {
                candidates.push(advice(check.kind));
            }
        }
    }

    // sort_by_key is stable, so equal priorities keep field encounter order.
    candidates.sort_by_key(|(priority, _)| *priority);
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
        .into_iter()
        .map(|(_, text)| text.to_string())
        .collect()
}
