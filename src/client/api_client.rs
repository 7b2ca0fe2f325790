// HTTP client for the sensor API
use crate::domain::reading::Reading;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub message: String,
    pub data: Reading,
    pub actions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fail(response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::anyhow!("request failed with status {}: {}", status, body)
    }

    pub async fn generate(&self) -> Result<GenerateResponse> {
        let response = self
            .http
            .post(self.url("/generate-data"))
            .send()
            .await
            .context("Failed to send generate request")?;

        if response.status() != StatusCode::CREATED {
            return Err(Self::fail(response).await);
        }

        response
            .json::<GenerateResponse>()
            .await
            .context("Failed to parse generate response")
    }

    /// `Ok(None)` when the server has no readings yet
    pub async fn latest(&self) -> Result<Option<Reading>> {
        let response = self
            .http
            .get(self.url("/latest-data"))
            .send()
            .await
            .context("Failed to send latest request")?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .json::<DataResponse<Reading>>()
                    .await
                    .context("Failed to parse latest response")?;
                Ok(Some(body.data))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(Self::fail(response).await),
        }
    }

    pub async fn all(&self) -> Result<Vec<Reading>> {
        let response = self
            .http
            .get(self.url("/all-data"))
            .send()
            .await
            .context("Failed to send all request")?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        let body = response
            .json::<DataResponse<Vec<Reading>>>()
            .await
            .context("Failed to parse all response")?;
        Ok(body.data)
    }
}
