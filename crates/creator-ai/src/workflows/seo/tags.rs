use super::domain::{Check, CheckKind, FieldAnalysis};

pub(crate) fn analyze_tags(tags: &[String], title: &str) -> FieldAnalysis {
    let mut checks = Vec::with_capacity(3);

    let count = tags.len();
    let (points, passed, message) = match count {
        8..=15 => (35, true, format!("{count} tags lands in the ideal 8-15 range")),
        5..=7 => (
            20,
            true,
            format!("{count} tags is workable; add more to reach 8-15"),
        ),
        _ if count > 15 => (
            25,
            true,
            format!("{count} tags is more than search uses; trim toward 15"),
        ),
        _ => (
            10,
            false,
            format!("Only {count} tags; add more until you have at least 8"),
        ),
    };
    checks.push(Check {
        kind: CheckKind::TagCount,
        passed,
        points,
        message,
    });

    let title_lower = title.to_lowercase();
    let relevant = tags
        .iter()
        .filter(|tag| {
            tag.split_whitespace().any(|word| {
                word.chars().count() > 3 && title_lower.contains(&word.to_lowercase())
            })
        })
        .count();
    // Empty tag lists read as 0% relevance rather than dividing by zero.
    let relevance = if tags.is_empty() {
        0.0
    } else {
        relevant as f32 / tags.len() as f32 * 100.0
    };
    let (points, passed, message) = if relevance >= 50.0 {
        (
            35,
            true,
            format!("{relevance:.0}% of tags share a word with the title"),
        )
    } else if relevance >= 25.0 {
        (
            20,
            true,
            format!("{relevance:.0}% of tags share a word with the title; aim for half"),
        )
    } else {
        (
            5,
            false,
            format!("Only {relevance:.0}% of tags share a word with the title"),
        )
    };
    checks.push(Check {
        kind: CheckKind::TagRelevance,
        passed,
        points,
        message,
    });

    let broad = tags
        .iter()
        .filter(|tag| tag.split_whitespace().count() <= 2)
        .count();
    let specific = count - broad;
    let (points, passed, message) = if broad >= 2 && specific >= 2 {
        (
            30,
            true,
            format!("Healthy mix: {broad} broad and {specific} specific tags"),
        )
    } else if broad >= 1 && specific >= 1 {
        (
            20,
            true,
            "Both broad and specific tags present; add more of each".to_string(),
        )
    } else {
        (
            5,
            false,
            "Tags skew one way; mix short broad tags with longer specific phrases".to_string(),
        )
    };
    checks.push(Check {
        kind: CheckKind::TagVariety,
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

    #[test]
    fn empty_tag_list_scores_without_panicking() {
        let analysis = analyze_tags(&[], "Some title");

        assert_eq!(analysis.score, 20);
        assert!(analysis.checks.iter().all(|check| !check.passed));
        assert!(analysis.checks[1].message.contains("0%"));
    }

    #[test]
    fn eight_tags_hit_the_ideal_count_branch() {
        let set = tags(&[
            "gaming",
            "tips",
            "secret",
            "guide",
            "tutorial",
            "beginner",
            "top 10",
            "walkthrough",
        ]);
        let analysis = analyze_tags(&set, "Ultimate Beginner Guide: 10 Secret Tips for Gaming Success");

        assert_eq!(analysis.checks[0].points, 35);
        // 5 of 8 tags share a word longer than three characters with the title.
        assert_eq!(analysis.checks[1].points, 35);
    }

    #[test]
    fn over_tagging_still_passes_with_an_advisory() {
        let set: Vec<String> = (0..16).map(|n| format!("tag number {n}")).collect();
        let analysis = analyze_tags(&set, "irrelevant");

        let count = &analysis.checks[0];
        assert_eq!(count.points, 25);
        assert!(count.passed);
        assert!(count.message.contains("trim"));
    }

    #[test]
    fn five_tags_earn_the_workable_branch() {
        let set = tags(&["a", "b", "c", "d", "e"]);
        let analysis = analyze_tags(&set, "title");

        assert_eq!(analysis.checks[0].points, 20);
        assert!(analysis.checks[0].passed);
    }

    #[test]
    fn short_words_do_not_make_a_tag_relevant() {
        // "top" is three characters and "10" is two, so "top 10" never matches.
        let set = tags(&["top 10"]);
        let analysis = analyze_tags(&set, "Top 10 moments");

        assert_eq!(analysis.checks[1].points, 5);
        assert!(!analysis.checks[1].passed);
    }

    #[test]
    fn two_of_each_shape_earn_full_variety_points() {
        let set = tags(&[
            "gaming",
            "speedrun",
            "new player mistakes",
            "boss fight strategy guide",
        ]);
        let analysis = analyze_tags(&set, "title");

        assert_eq!(analysis.checks[2].points, 30);
    }

    #[test]
    fn one_of_each_shape_earns_the_middle_variety_branch() {
        let set = tags(&["gaming", "new player mistakes"]);
        let analysis = analyze_tags(&set, "title");

        assert_eq!(analysis.checks[2].points, 20);
    }

    #[test]
    fn uniform_tags_fail_the_variety_check() {
        let set = tags(&["gaming", "speedrun", "tips"]);
        let analysis = analyze_tags(&set, "title");

        assert_eq!(analysis.checks[2].points, 5);
        assert!(!analysis.checks[2].passed);
    }
}
