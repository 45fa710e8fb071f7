use crate::prelude::*;
use anyhow::anyhow;
use reqwest::Client;
use serde_json::Value;
use std::{fs, path::Path, time::Duration};
use url::Url;

// Tried in order; the first source that yields a valid GeoJSON wins.
pub static GEOJSON_SOURCES: [(&str, &str); 3] = [
    (
        "GitHub - geohacker",
        "https://raw.githubusercontent.com/geohacker/india/master/state/india_telengana_29.geojson",
    ),
    (
        "GitHub - Subhash9325",
        "https://raw.githubusercontent.com/Subhash9325/GeoJson-Data-of-Indian-States/master/Indian_States.json",
    ),
    (
        "Gist - jbrobst",
        "https://gist.githubusercontent.com/jbrobst/56c13bbbf9d97d187fea01ca62ea5112/raw/e388c4cae20aa53cb5090210a42ebb9b765c0a36/india_states.geojson",
    ),
];

/// Fetch the India states GeoJSON from the first reachable source and save
/// it to `output_path`.
pub async fn download_india_geojson(output_path: &Path) -> Result<()> {
    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
    for (name, url) in GEOJSON_SOURCES {
        tracing::info!("Trying source: {}", name);
        match fetch_geojson(&client, url).await {
            Ok(geojson) => {
                let features = geojson["features"].as_array().map_or(0, |f| f.len());
                fs::write(output_path, serde_json::to_string_pretty(&geojson)?)?;
                tracing::info!(
                    "Successfully downloaded and saved to: {}",
                    output_path.display()
                );
                tracing::info!("Features found: {}", features);
                return Ok(());
            }
            Err(e) => tracing::error!("Failed: {}", e),
        }
    }

    tracing::error!(
        "All sources failed: no internet connection, blocked hosts, or a filtering proxy."
    );
    tracing::error!(
        "Alternative: manually download an India states GeoJSON, e.g. from https://github.com/geohacker/india"
    );
    Err(anyhow!("all GeoJSON sources failed"))
}

async fn fetch_geojson(client: &Client, url: &str) -> Result<Value> {
    let host = Url::parse(url)?.host_str().unwrap_or("").to_string();
    tracing::info!("Downloading from: {}", host);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "Non-success response from {}: {}",
            host,
            response.status()
        ));
    }

    let geojson: Value = response.json().await?;
    if !is_valid_geojson(&geojson) {
        return Err(anyhow!("Invalid GeoJSON format from {}", host));
    }

    Ok(geojson)
}

fn is_valid_geojson(value: &Value) -> bool {
    value["type"] == "FeatureCollection"
        || value["features"]
            .as_array()
            .map_or(false, |features| !features.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feature_collections_are_accepted() {
        assert!(is_valid_geojson(&json!({"type": "FeatureCollection", "features": []})));
    }

    #[test]
    fn bare_feature_arrays_are_accepted() {
        assert!(is_valid_geojson(&json!({"features": [{"type": "Feature"}]})));
    }

    #[test]
    fn empty_feature_arrays_without_type_are_rejected() {
        assert!(!is_valid_geojson(&json!({"features": []})));
    }

    #[test]
    fn unrelated_json_is_rejected() {
        assert!(!is_valid_geojson(&json!({"hello": "world"})));
        assert!(!is_valid_geojson(&Value::Null));
    }

    #[test]
    fn source_urls_parse() {
        for (_, url) in GEOJSON_SOURCES {
            assert!(Url::parse(url).is_ok());
        }
    }
}
