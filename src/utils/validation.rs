use crate::utils::error::{GenError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a registry source URL, accepting only `http` and `https`.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    let reject = |reason: String| GenError::ConfigError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(reject("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| reject(format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(reject(format!("Unsupported URL scheme: {}", url.scheme())));
    }

    Ok(url)
}
