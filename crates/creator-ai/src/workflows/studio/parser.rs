use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::seo::domain::VideoMetadata;
use crate::workflows::seo::intake::{clean_line, clean_tags};

/// One video lifted out of a Studio metadata export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioRecord {
    pub video_id: Option<String>,
    pub metadata: VideoMetadata,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<StudioRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<StudioRow>() {
        let row = row?;
        let title = clean_line(&row.title);
        if title.is_empty() {
            // A row without a title carries nothing worth scoring.
            continue;
        }

        records.push(StudioRecord {
            video_id: row
                .video_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            metadata: VideoMetadata {
                title,
                description: row.description.unwrap_or_default().trim().to_string(),
                tags: split_tags(row.tags.as_deref().unwrap_or_default()),
            },
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct StudioRow {
    #[serde(rename = "Video ID", default, deserialize_with = "empty_string_as_none")]
    video_id: Option<String>,
    #[serde(rename = "Title")]
    title: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
    #[serde(rename = "Tags", default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Current exports delimit tags with `|`; older exports used commas.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    let separator = if raw.contains('|') { '|' } else { ',' };
    clean_tags(raw.split(separator).map(str::to_string).collect())
}
