use serde::Serialize;

use super::parser::StudioRecord;
use crate::workflows::seo::{self, ScoreBand};

/// Scored entry for one imported video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoAuditEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub title: String,
    pub overall_score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fix: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandBreakdown {
    pub good: usize,
    pub needs_work: usize,
    pub poor: usize,
}

/// A recommendation shared by several imported videos.
#[derive(Debug, Clone, Serialize)]
pub struct CommonFix {
    pub recommendation: String,
    pub videos_affected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelAuditSummary {
    pub videos_analyzed: usize,
    pub average_score: u8,
    pub bands: BandBreakdown,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub common_fixes: Vec<CommonFix>,
}

/// Channel-wide scoring rollup over an imported video set.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelAudit {
    pub entries: Vec<VideoAuditEntry>,
    pub summary: ChannelAuditSummary,
}

const MAX_COMMON_FIXES: usize = 5;

impl ChannelAudit {
    /// Score every imported video and roll the results up.
    pub fn from_records(records: Vec<StudioRecord>) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut bands = BandBreakdown::default();
        let mut score_total: u32 = 0;
        let mut fix_tally: Vec<(String, usize)> = Vec::new();

        for record in records {
            let report = seo::analyze(&record.metadata);
            score_total += u32::from(report.overall_score);
            match report.band {
                ScoreBand::Good => bands.good += 1,
                ScoreBand::NeedsWork => bands.needs_work += 1,
                ScoreBand::Poor => bands.poor += 1,
            }

            for fix in &report.recommendations {
                match fix_tally.iter_mut().find(|(text, _)| text == fix) {
                    Some((_, count)) => *count += 1,
                    None => fix_tally.push((fix.clone(), 1)),
                }
            }

            entries.push(VideoAuditEntry {
                video_id: record.video_id,
                title: record.metadata.title,
                overall_score: report.overall_score,
                band: report.band,
                band_label: report.band.label(),
                top_fix: report.recommendations.first().cloned(),
            });
        }

        let average_score = if entries.is_empty() {
            0
        } else {
            (score_total as f32 / entries.len() as f32).round() as u8
        };

        // sort_by is stable, so ties keep first-seen order.
        fix_tally.sort_by(|a, b| b.1.cmp(&a.1));
        fix_tally.truncate(MAX_COMMON_FIXES);
        let common_fixes = fix_tally
            .into_iter()
            .map(|(recommendation, videos_affected)| CommonFix {
                recommendation,
                videos_affected,
            })
            .collect();

        let summary = ChannelAuditSummary {
            videos_analyzed: entries.len(),
            average_score,
            bands,
            common_fixes,
        };

        Self { entries, summary }
    }
}
