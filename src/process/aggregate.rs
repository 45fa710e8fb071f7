use super::comment::CommentRecord;
use crate::region::resolver::ALL_INDIA;
use serde::Serialize;
use std::collections::BTreeMap;

// First comments kept per region for display; all_comments_count keeps
// counting past the cap.
pub const REGION_SAMPLE_CAP: usize = 10;

#[derive(Debug, Default, Serialize)]
pub struct RegionStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub comments: Vec<CommentRecord>,
    pub all_comments_count: usize,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_comments: usize,
    pub total_regions: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

#[derive(Debug, Serialize)]
pub struct MapData {
    pub regions: BTreeMap<String, RegionStats>,
    pub summary: Summary,
}

/// Group resolved comments per region and sentiment. Any label other than
/// "positive" or "negative" counts as neutral.
pub fn aggregate(resolved: Vec<(String, CommentRecord)>) -> MapData {
    let mut regions: BTreeMap<String, RegionStats> = BTreeMap::new();
    let mut total_comments = 0;

    for (region, comment) in resolved {
        let stats = regions.entry(region).or_default();
        stats.total += 1;
        stats.all_comments_count += 1;
        match comment.sentiment.as_str() {
            "positive" => stats.positive += 1,
            "negative" => stats.negative += 1,
            _ => stats.neutral += 1,
        }
        if stats.comments.len() < REGION_SAMPLE_CAP {
            stats.comments.push(comment);
        }
        total_comments += 1;
    }

    let summary = Summary {
        total_comments,
        total_regions: regions.keys().filter(|r| r.as_str() != ALL_INDIA).count(),
        positive_count: regions.values().map(|s| s.positive).sum(),
        negative_count: regions.values().map(|s| s.negative).sum(),
        neutral_count: regions.values().map(|s| s.neutral).sum(),
    };

    MapData { regions, summary }
}
