use super::aggregate::{aggregate, MapData};
use super::comment::CommentRecord;
use crate::prelude::*;
use crate::region::resolver::{resolve_region, ALL_INDIA};
use csv::{ReaderBuilder, StringRecord};
use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::{cmp::Reverse, fs, path::Path};

struct ColumnIndex {
    comment_text: Option<usize>,
    region: Option<usize>,
    language: Option<usize>,
    sentiment_label: Option<usize>,
    sentiment_score: Option<usize>,
    author: Option<usize>,
    video_title: Option<usize>,
    channel: Option<usize>,
    video_id: Option<usize>,
    like_count: Option<usize>,
    published_at: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|header| header == name);
        Self {
            comment_text: find("comment_text"),
            region: find("region"),
            language: find("language"),
            sentiment_label: find("sentiment_label"),
            // The score column is named after the analyzer output.
            sentiment_score: find("sentiment"),
            author: find("author"),
            video_title: find("video_title"),
            channel: find("channel"),
            video_id: find("video_id"),
            like_count: find("like_count"),
            published_at: find("published_at"),
        }
    }
}

fn field(record: &StringRecord, index: Option<usize>, missing: &str) -> String {
    match index {
        Some(index) => record.get(index).unwrap_or("").to_string(),
        None => missing.to_string(),
    }
}

/// Read a sentiment-labeled comment CSV, bucket every row by resolved region
/// and sentiment, and write the map JSON to `output_path`.
pub fn process_csv(csv_path: &Path, output_path: &Path) -> Result<MapData> {
    tracing::info!("Processing {}...", csv_path.display());
    let mut reader = ReaderBuilder::new().flexible(true).from_path(csv_path)?;
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers);

    let mut rows: Vec<(String, CommentRecord)> = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV row: {}", e);
                continue;
            }
        };

        let text = field(&record, columns.comment_text, "");
        if text.is_empty() {
            continue;
        }

        let declared_region = field(&record, columns.region, "");
        let comment = CommentRecord {
            text,
            author: field(&record, columns.author, ""),
            video_title: field(&record, columns.video_title, ""),
            channel: field(&record, columns.channel, ""),
            video_id: field(&record, columns.video_id, ""),
            like_count: field(&record, columns.like_count, "0"),
            published_at: field(&record, columns.published_at, ""),
            sentiment: field(&record, columns.sentiment_label, "neutral").to_lowercase(),
            sentiment_score: field(&record, columns.sentiment_score, "0"),
            language: field(&record, columns.language, ""),
        };
        rows.push((declared_region, comment));
    }

    let resolved: Vec<(String, CommentRecord)> = rows
        .into_par_iter()
        .map(|(declared_region, comment)| {
            let region = resolve_region(&declared_region, &comment.text, &comment.language);
            (region, comment)
        })
        .collect();

    let data = aggregate(resolved);
    fs::write(output_path, serde_json::to_string_pretty(&data)?)?;

    tracing::info!("Processed {} comments", data.summary.total_comments);
    tracing::info!("Found {} regions with data", data.summary.total_regions);
    tracing::info!("Positive: {}", data.summary.positive_count);
    tracing::info!("Negative: {}", data.summary.negative_count);
    tracing::info!("Neutral: {}", data.summary.neutral_count);
    tracing::info!("Output saved to {}", output_path.display());

    tracing::info!("Top regions by comment count:");
    for (region, stats) in data
        .regions
        .iter()
        .filter(|(region, _)| region.as_str() != ALL_INDIA)
        .sorted_by_key(|(_, stats)| Reverse(stats.total))
        .take(10)
    {
        tracing::info!("  {}: {} comments", region, stats.total);
    }

    Ok(data)
}
