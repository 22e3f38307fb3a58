//! Browser loading of the dataset and palette files.
//!
//! Both requests are issued before either response is awaited, and the
//! dashboard is only built once both have resolved. There is no retry.

use bex_core::{Dataset, Palette};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const DEFAULT_DATA_URL: &str = "json-files/expenditures.json";
pub const DEFAULT_PALETTE_URL: &str = "json-files/sunburst-colors.json";

/// Where to fetch the two resources from, relative to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub data_url: String,
    pub palette_url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            palette_url: DEFAULT_PALETTE_URL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("window not available")]
    NoWindow,
    #[error("fetch of {url} failed: {message}")]
    Fetch { url: String, message: String },
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },
    #[error("failed to parse {url}: {message}")]
    Parse { url: String, message: String },
}

/// Fetch both files concurrently and parse them.
pub async fn load(config: &LoaderConfig) -> Result<(Dataset, Palette), LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let data_request = JsFuture::from(window.fetch_with_str(&config.data_url));
    let palette_request = JsFuture::from(window.fetch_with_str(&config.palette_url));

    let data_bytes = read_body(&config.data_url, data_request).await?;
    let palette_bytes = read_body(&config.palette_url, palette_request).await?;

    let dataset = Dataset::from_bytes(&data_bytes).map_err(|e| LoadError::Parse {
        url: config.data_url.clone(),
        message: e.to_string(),
    })?;
    let palette = Palette::from_bytes(&palette_bytes).map_err(|e| LoadError::Parse {
        url: config.palette_url.clone(),
        message: e.to_string(),
    })?;

    log::info!(
        "[BEX] loaded {} records and {} palette colors",
        dataset.len(),
        palette.len()
    );
    Ok((dataset, palette))
}

async fn read_body(url: &str, request: JsFuture) -> Result<Vec<u8>, LoadError> {
    let fetch_error = |message: String| LoadError::Fetch {
        url: url.to_string(),
        message,
    };

    let response: web_sys::Response = request
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| fetch_error("response was not a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let buffer_promise = response
        .array_buffer()
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    let buffer = JsFuture::from(buffer_promise)
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
