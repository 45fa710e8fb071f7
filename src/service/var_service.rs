use crate::eval::harness::DEFAULT_COMPOUND_THRESHOLD;
use crate::prelude::*;
use anyhow::anyhow;
use std::env::var;

pub async fn get_compound_threshold() -> Result<f64> {
    match var("VADER_THRESHOLD") {
        Ok(threshold) => match threshold.parse::<f64>() {
            Ok(threshold) => Ok(threshold),
            Err(e) => {
                tracing::error!("Failed to parse VADER_THRESHOLD to f64: {}", e);
                Err(anyhow!("Failed to parse VADER_THRESHOLD to f64: {}", e))
            }
        },
        Err(_) => Ok(DEFAULT_COMPOUND_THRESHOLD),
    }
}

pub async fn get_review_corpus_dir() -> Result<Option<String>> {
    match var("REVIEW_CORPUS_DIR") {
        Ok(dir) => match dir.is_empty() {
            true => {
                tracing::info!("REVIEW_CORPUS_DIR is empty");
                Ok(None)
            }
            false => Ok(Some(dir)),
        },
        Err(e) => {
            tracing::info!("REVIEW_CORPUS_DIR not found in environment: {}", e);
            Ok(None)
        }
    }
}
