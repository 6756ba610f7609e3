use crate::model::SourceError;
use crate::source::traits::CatalogSource;
use reqwest::Client;
use std::time::Duration;

/// Fetches the published catalog CSV over HTTP.
pub struct SheetSource {
    client: Client,
    url: String,
}

impl SheetSource {
    pub fn new(url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(8))
            .user_agent("stokbot/0.1")
            .build()
            .expect("failed to build http client");

        Self { client, url }
    }
}

#[async_trait::async_trait]
impl CatalogSource for SheetSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else {
                SourceError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))
    }
}
