use super::metrics::{safe_div, ClassMetrics, Confusion};
use crate::prelude::*;
use anyhow::anyhow;
use serde::Serialize;
use std::{fs, path::Path, time::Instant};
use vader_sentiment::SentimentIntensityAnalyzer;

// Compound scores at or above this count as a positive prediction.
pub const DEFAULT_COMPOUND_THRESHOLD: f64 = 0.05;

#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub samples: usize,
    pub accuracy: f64,
    pub positives: ClassMetrics,
    pub negatives: ClassMetrics,
    pub confusion: Confusion,
    pub runtime_sec: f64,
    pub throughput_docs_per_sec: f64,
}

/// Score the VADER classifier against a labeled review corpus laid out as
/// `pos/` and `neg/` directories of plain text files.
pub fn evaluate_corpus(corpus_dir: &Path, threshold: f64) -> Result<EvalReport> {
    let reviews = load_labeled_reviews(corpus_dir)?;
    if reviews.is_empty() {
        return Err(anyhow!(
            "No labeled reviews found under {}",
            corpus_dir.display()
        ));
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let mut confusion = Confusion::default();
    let start = Instant::now();
    for (text, is_positive) in &reviews {
        let scores = analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        confusion.record(*is_positive, compound >= threshold);
    }
    let runtime_sec = start.elapsed().as_secs_f64();

    let samples = confusion.samples();
    Ok(EvalReport {
        samples,
        accuracy: confusion.accuracy(),
        positives: confusion.positive_metrics(),
        negatives: confusion.negative_metrics(),
        confusion,
        runtime_sec,
        throughput_docs_per_sec: safe_div(samples as f64, runtime_sec),
    })
}

fn load_labeled_reviews(corpus_dir: &Path) -> Result<Vec<(String, bool)>> {
    let mut reviews = Vec::new();
    for (subdir, is_positive) in [("pos", true), ("neg", false)] {
        let dir = corpus_dir.join(subdir);
        if !dir.is_dir() {
            return Err(anyhow!("Missing corpus directory: {}", dir.display()));
        }

        let mut paths: Vec<_> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            match fs::read_to_string(&path) {
                Ok(text) => reviews.push((text, is_positive)),
                Err(e) => tracing::warn!("Skipping unreadable review {}: {}", path.display(), e),
            }
        }
    }

    Ok(reviews)
}

pub fn log_report(report: &EvalReport) {
    tracing::info!("Evaluated {} labeled reviews.", report.samples);
    tracing::info!("Accuracy: {:.4}", report.accuracy);
    tracing::info!(
        "Positive precision/recall/F1: {:.4} / {:.4} / {:.4}",
        report.positives.precision,
        report.positives.recall,
        report.positives.f1
    );
    tracing::info!(
        "Negative precision/recall/F1: {:.4} / {:.4} / {:.4}",
        report.negatives.precision,
        report.negatives.recall,
        report.negatives.f1
    );
    tracing::info!(
        "Confusion matrix -> TP:{}  FP:{}  TN:{}  FN:{}",
        report.confusion.true_pos,
        report.confusion.false_pos,
        report.confusion.true_neg,
        report.confusion.false_neg
    );
    tracing::info!(
        "Runtime: {:.2} s  Throughput: {:.2} documents/sec",
        report.runtime_sec,
        report.throughput_docs_per_sec
    );
}
