use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{Check, CheckKind, FieldAnalysis};

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("link pattern compiles"));
static TIMESTAMP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("timestamp pattern compiles"));

pub(crate) fn analyze_description(description: &str, tags: &[String]) -> FieldAnalysis {
    let mut checks = Vec::with_capacity(4);

    let chars = description.chars().count();
    let (points, passed, message) = if chars >= 200 {
        (
            25,
            true,
            format!("Description length of {chars} characters gives search plenty to index"),
        )
    } else if chars >= 100 {
        (
            15,
            true,
            format!("Description length of {chars} characters is thin; 200+ performs better"),
        )
    } else {
        (
            5,
            false,
            format!("Description is only {chars} characters; write at least 200"),
        )
    };
    checks.push(Check {
        kind: CheckKind::DescriptionLength,
        passed,
        points,
        message,
    });

    let description_lower = description.to_lowercase();
    let usable: Vec<&str> = tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();
    // An empty tag set reads as 0% coverage rather than dividing by zero.
    let density = if usable.is_empty() {
        0.0
    } else {
        let covered = usable
            .iter()
            .filter(|tag| description_lower.contains(&tag.to_lowercase()))
            .count();
        covered as f32 / usable.len() as f32 * 100.0
    };
    let (points, passed, message) = if density >= 60.0 {
        (
            25,
            true,
            format!("{density:.0}% of tags are echoed in the description"),
        )
    } else if density >= 30.0 {
        (
            15,
            true,
            format!("{density:.0}% of tags are echoed in the description; aim for 60%"),
        )
    } else {
        (
            5,
            false,
            format!("Only {density:.0}% of tags are echoed in the description"),
        )
    };
    checks.push(Check {
        kind: CheckKind::DescriptionKeywordDensity,
        passed,
        points,
        message,
    });

    let (points, passed, message) = if LINK_PATTERN.is_match(description) {
        (25, true, "Description links out to other content".to_string())
    } else {
        (0, false, "No links found in the description".to_string())
    };
    checks.push(Check {
        kind: CheckKind::DescriptionLinks,
        passed,
        points,
        message,
    });

    let (points, passed, message) = if TIMESTAMP_PATTERN.is_match(description) {
        (25, true, "Chapter timestamps found in the description".to_string())
    } else {
        (0, false, "No chapter timestamps found in the description".to_string())
    };
    checks.push(Check {
        kind: CheckKind::DescriptionTimestamps,
        passed,
        points,
        message,
    });

    FieldAnalysis::from_checks(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn rich_description() -> String {
        let mut text = "Learn gaming from scratch with these tips. ".repeat(6);
        text.push_str("Full gear list: https://example.com/gear and chapters at 0:00 Intro, 12:34 Drills.");
        text
    }

    #[test]
    fn rich_description_maxes_out() {
        // 200+ characters, full tag coverage, a link, and timestamps.
        let analysis = analyze_description(&rich_description(), &tags(&["gaming", "tips"]));

        assert_eq!(analysis.score, 100);
        assert!(analysis.checks.iter().all(|check| check.passed));
    }

    #[test]
    fn empty_tag_set_reads_as_zero_density_without_panicking() {
        let analysis = analyze_description(&rich_description(), &[]);

        let density = &analysis.checks[1];
        assert_eq!(density.kind, CheckKind::DescriptionKeywordDensity);
        assert_eq!(density.points, 5);
        assert!(!density.passed);
        assert!(density.message.contains("0%"));
    }

    #[test]
    fn empty_description_bottoms_out_every_check() {
        let analysis = analyze_description("", &[]);

        assert_eq!(analysis.score, 10);
        assert!(analysis.checks.iter().all(|check| !check.passed));
    }

    #[test]
    fn mid_length_description_passes_with_reduced_points() {
        let text = "z".repeat(150);
        let analysis = analyze_description(&text, &[]);

        assert_eq!(analysis.checks[0].points, 15);
        assert!(analysis.checks[0].passed);
    }

    #[test]
    fn partial_tag_coverage_hits_the_middle_branch() {
        // 1 of 3 tags covered is 33%.
        let analysis = analyze_description(
            "A long walkthrough of the new area",
            &tags(&["walkthrough", "speedrun", "glitchless"]),
        );

        assert_eq!(analysis.checks[1].points, 15);
        assert!(analysis.checks[1].passed);
    }

    #[test]
    fn detects_http_and_https_links() {
        let secure = analyze_description("watch https://youtu.be/abc first", &[]);
        let plain = analyze_description("mirror at http://example.org/v", &[]);

        assert!(secure.checks[2].passed);
        assert!(plain.checks[2].passed);
    }

    #[test]
    fn single_digit_hour_timestamps_are_recognized() {
        let analysis = analyze_description("jump to 7:45 for the comparison", &[]);

        assert!(analysis.checks[3].passed);
    }
}
