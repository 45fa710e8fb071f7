mod eval {
    pub mod harness;
    pub mod metrics;
}
mod geo {
    pub mod download;
}
mod prelude;
mod process {
    pub mod aggregate;
    pub mod comment;
    pub mod pipeline;
}
mod region {
    pub mod regions;
    pub mod resolver;
}
mod service {
    pub mod var_service;
}

use crate::prelude::*;
use anyhow::anyhow;
use dotenv::dotenv;
use eval::harness::{evaluate_corpus, log_report};
use geo::download::download_india_geojson;
use process::pipeline::process_csv;
use service::var_service::{get_compound_threshold, get_review_corpus_dir};
use std::{env, path::Path};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    dotenv().ok();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("process") | None => {
            let csv_path = args
                .get(2)
                .map(String::as_str)
                .unwrap_or("sentiment_analysis_data.csv");
            let output_path = args
                .get(3)
                .map(String::as_str)
                .unwrap_or("comments_map_data.json");
            process_csv(Path::new(csv_path), Path::new(output_path))?;
        }
        Some("evaluate") => {
            let corpus_dir = match args.get(2).cloned() {
                Some(dir) => dir,
                None => match get_review_corpus_dir().await? {
                    Some(dir) => dir,
                    None => {
                        tracing::error!(
                            "Usage: sentimap-processor evaluate <corpus_dir> (or set REVIEW_CORPUS_DIR)"
                        );
                        return Err(anyhow!("no review corpus directory given"));
                    }
                },
            };
            let threshold = get_compound_threshold().await?;
            let report = evaluate_corpus(Path::new(&corpus_dir), threshold)?;
            log_report(&report);
        }
        Some("geojson") => {
            let output_path = args
                .get(2)
                .map(String::as_str)
                .unwrap_or("india_states.geojson");
            download_india_geojson(Path::new(output_path)).await?;
        }
        Some(other) => {
            tracing::error!("Unknown command: {}", other);
            tracing::error!("Usage: sentimap-processor <process|evaluate|geojson> [args]");
            return Err(anyhow!("unknown command"));
        }
    }

    Ok(())
}
