use super::domain::{Check, CheckKind, FieldAnalysis};

/// Words and phrases with above-average click-through pull in search results.
const POWER_WORDS: [&str; 28] = [
    "ultimate",
    "secret",
    "proven",
    "how to",
    "best",
    "easy",
    "simple",
    "fast",
    "amazing",
    "essential",
    "complete",
    "perfect",
    "powerful",
    "incredible",
    "exclusive",
    "guaranteed",
    "effective",
    "top",
    "free",
    "new",
    "master",
    "insider",
    "epic",
    "instantly",
    "surprising",
    "critical",
    "genius",
    "mistakes",
];

pub(crate) fn analyze_title(title: &str, tags: &[String]) -> FieldAnalysis {
    let mut checks = Vec::with_capacity(3);

    let chars = title.chars().count();
    let (points, passed, message) = match chars {
        50..=60 => (
            30,
            true,
            format!("Title length of {chars} characters sits in the 50-60 sweet spot"),
        ),
        40..=70 => (
            20,
            true,
            format!("Title length of {chars} characters is workable; 50-60 performs best"),
        ),
        0..=39 => (
            10,
            false,
            format!("Title is only {chars} characters; expand it toward 50-60"),
        ),
        _ => (
            5,
            false,
            format!("Title runs {chars} characters and will truncate in search results"),
        ),
    };
    checks.push(Check {
        kind: CheckKind::TitleLength,
        passed,
        points,
        message,
    });

    let title_lower = title.to_lowercase();
    let matched = tags
        .iter()
        .filter(|tag| {
            let tag = tag.trim();
            !tag.is_empty() && title_lower.contains(&tag.to_lowercase())
        })
        .count();
    let (points, passed, message) = match matched {
        0 => (
            0,
            false,
            "None of the tags appear in the title".to_string(),
        ),
        1 => (
            20,
            true,
            "One tag appears in the title; working in a second strengthens ranking".to_string(),
        ),
        n => (35, true, format!("{n} tags appear in the title")),
    };
    checks.push(Check {
        kind: CheckKind::TitleKeywords,
        passed,
        points,
        message,
    });

    let found = POWER_WORDS
        .iter()
        .filter(|word| title_lower.contains(**word))
        .count();
    let (points, passed, message) = match found {
        0 => (
            0,
            false,
            "No high-CTR words found in the title".to_string(),
        ),
        1 => (
            20,
            true,
            "One high-CTR word found in the title".to_string(),
        ),
        n => (35, true, format!("{n} high-CTR words found in the title")),
    };
    checks.push(Check {
        kind: CheckKind::TitlePowerWords,
        passed,
        points,
        message,
    });

    FieldAnalysis::from_checks(checks)
}
