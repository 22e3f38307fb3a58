//! Loading the dataset and palette from local files or URLs.

use crate::SourceArgs;
use bex_core::{Dataset, Palette};
use bex_views::Dashboard;
use log::info;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read a resource's raw bytes from disk or over HTTP.
pub async fn read_source(client: &reqwest::Client, source: &str) -> anyhow::Result<Vec<u8>> {
    if is_url(source) {
        info!("Fetching {}", source);
        let response = client.get(source).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    } else {
        info!("Reading {}", source);
        tokio::fs::read(source)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source, e))
    }
}

/// Read both resources concurrently and parse them.
pub async fn load(source: &SourceArgs) -> anyhow::Result<(Dataset, Palette)> {
    let client = reqwest::Client::new();

    let palette_bytes = async {
        match source.palette.as_deref() {
            Some(palette) => read_source(&client, palette).await.map(Some),
            None => Ok(None),
        }
    };
    let (data_bytes, palette_bytes) =
        tokio::try_join!(read_source(&client, &source.data), palette_bytes)?;

    let dataset = Dataset::from_bytes(&data_bytes)?;
    let palette = match palette_bytes {
        Some(bytes) => Palette::from_bytes(&bytes)?,
        None => Palette::sample()?,
    };
    Ok((dataset, palette))
}

/// Load both resources and build the dashboard over them.
pub async fn load_dashboard(source: &SourceArgs) -> anyhow::Result<Dashboard> {
    let (dataset, palette) = load(source).await?;
    Dashboard::build(dataset, &palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/expenditures.json"));
        assert!(is_url("http://localhost:8080/data.json.gz"));
        assert!(!is_url("../fixtures/expenditures.json"));
    }

    #[tokio::test]
    async fn test_load_local_files() {
        let source = SourceArgs {
            data: "../fixtures/expenditures.json".to_string(),
            palette: Some("../fixtures/sunburst-colors.json".to_string()),
        };
        let (dataset, palette) = load(&source).await.unwrap();
        assert_eq!(dataset.len(), 42);
        assert_eq!(palette.cycle(0), Some("#8dd3c7"));
    }

    #[tokio::test]
    async fn test_load_defaults_to_bundled_palette() {
        let source = SourceArgs {
            data: "../fixtures/expenditures.json".to_string(),
            palette: None,
        };
        let (_, palette) = load(&source).await.unwrap();
        assert_eq!(palette, Palette::sample().unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let source = SourceArgs {
            data: "../fixtures/does-not-exist.json".to_string(),
            palette: None,
        };
        let err = load(&source).await.unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
