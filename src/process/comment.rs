use serde::Serialize;

/// One comment row, carried verbatim from the CSV into the map JSON. The
/// sentiment label is lowercased on ingest; everything else is untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentRecord {
    pub text: String,
    pub author: String,
    pub video_title: String,
    pub channel: String,
    pub video_id: String,
    pub like_count: String,
    pub published_at: String,
    pub sentiment: String,
    pub sentiment_score: String,
    pub language: String,
}
