use clap::Args;
use std::path::PathBuf;

use creator_ai::config::AppConfig;
use creator_ai::error::AppError;
use creator_ai::workflows::seo::{analyze, FieldAnalysis, SeoReport, VideoMetadata};
use creator_ai::workflows::studio::{ChannelAudit, StudioCsvImporter};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Video title to score
    #[arg(long)]
    pub(crate) title: String,
    /// Video description to score
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// Tag to include; repeat the flag for each tag
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,
    /// Emit the full report as JSON instead of the console summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Path to a Studio metadata CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Cap on imported rows (defaults to the configured audit limit)
    #[arg(long)]
    pub(crate) max_rows: Option<usize>,
    /// Emit the audit as JSON instead of the console summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let metadata = VideoMetadata {
        title: args.title,
        description: args.description,
        tags: args.tags,
    };
    let report = analyze(&metadata);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&metadata, &report);
    }

    Ok(())
}

pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let cap = args.max_rows.unwrap_or(config.import.max_audit_rows);

    let audit = StudioCsvImporter::audit_from_path(&args.csv, cap)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    } else {
        render_audit(&audit);
    }

    Ok(())
}

fn render_report(metadata: &VideoMetadata, report: &SeoReport) {
    println!("SEO report for \"{}\"", metadata.title);
    println!(
        "Overall: {}/100 ({})",
        report.overall_score,
        report.band.label()
    );

    for (label, analysis) in field_sections(report) {
        println!("\n{label}: {}/100", analysis.score);
        for check in &analysis.checks {
            let verdict = if check.passed { "pass" } else { "fail" };
            println!("  [{verdict}] {}: {}", check.kind.label(), check.message);
        }
    }

    if !report.recommendations.is_empty() {
        println!("\nDo next:");
        for (index, fix) in report.recommendations.iter().enumerate() {
            println!("  {}. {fix}", index + 1);
        }
    }
}

fn field_sections(report: &SeoReport) -> [(&'static str, &FieldAnalysis); 3] {
    [
        ("Title", &report.title),
        ("Description", &report.description),
        ("Tags", &report.tags),
    ]
}

fn render_audit(audit: &ChannelAudit) {
    let summary = &audit.summary;
    println!("Channel audit across {} videos", summary.videos_analyzed);
    println!("Average score: {}/100", summary.average_score);
    println!(
        "Bands: {} good | {} needs work | {} poor",
        summary.bands.good, summary.bands.needs_work, summary.bands.poor
    );

    if !summary.common_fixes.is_empty() {
        println!("Most common fixes:");
        for fix in &summary.common_fixes {
            println!(
                "  - {} ({} video{})",
                fix.recommendation,
                fix.videos_affected,
                if fix.videos_affected == 1 { "" } else { "s" }
            );
        }
    }

    println!("\nVideos:");
    for entry in &audit.entries {
        let id = entry.video_id.as_deref().unwrap_or("-");
        print!(
            "  - [{}] {} ({}/100, {})",
            id, entry.title, entry.overall_score, entry.band_label
        );
        match &entry.top_fix {
            Some(fix) => println!(" -> {fix}"),
            None => println!(),
        }
    }
}
