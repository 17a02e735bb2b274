use crate::utils::error::{GenError, Result};
use crate::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the raw registry document with a single bounded GET.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
}

impl RegistryClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = validate_url("url", url)?;

        tracing::debug!("Requesting registry from {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Registry response status: {}", status);

        if status != StatusCode::OK {
            // the response is dropped here, which releases the connection
            return Err(GenError::ResponseError {
                expected: StatusCode::OK.as_u16(),
                actual: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Read {} bytes of registry data", body.len());

        Ok(body.to_vec())
    }
}
