//! HTTP implementation of the job store

use super::JobStore;
use crate::error::{Error, Result};
use crate::job::Job;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default base URL of the job board API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// reqwest-backed job store speaking the board's REST API:
/// `GET/POST /jobs` and `GET/PUT/DELETE /jobs/{id}`.
pub struct HttpJobStore {
    client: Client,
    base_url: String,
}

impl HttpJobStore {
    /// Create a store client for the given API base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to the store error taxonomy.
    async fn check(response: Response, id: Option<i64>) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(Error::NotFound(id.unwrap_or_default())),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Validation(body))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::HttpStatus(format!("{status}: {body}")))
            }
        }
    }

    fn transport(e: reqwest::Error) -> Error {
        Error::Network(e.to_string())
    }
}

#[async_trait]
impl JobStore for HttpJobStore {
    async fn list_all(&self) -> Result<Vec<Job>> {
        debug!("GET /jobs");
        let response = self
            .client
            .get(self.url("/jobs"))
            .send()
            .await
            .map_err(Self::transport)?;
        let response = Self::check(response, None).await?;
        Ok(response.json().await.map_err(Self::transport)?)
    }

    async fn get(&self, id: i64) -> Result<Job> {
        debug!("GET /jobs/{id}");
        let response = self
            .client
            .get(self.url(&format!("/jobs/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        let response = Self::check(response, Some(id)).await?;
        Ok(response.json().await.map_err(Self::transport)?)
    }

    async fn create(&self, job: &Job) -> Result<Job> {
        debug!("POST /jobs: {}", job.title);
        let response = self
            .client
            .post(self.url("/jobs"))
            .json(job)
            .send()
            .await
            .map_err(Self::transport)?;
        let response = Self::check(response, None).await?;
        Ok(response.json().await.map_err(Self::transport)?)
    }

    async fn update(&self, id: i64, job: &Job) -> Result<Job> {
        debug!("PUT /jobs/{id}");
        let response = self
            .client
            .put(self.url(&format!("/jobs/{id}")))
            .json(job)
            .send()
            .await
            .map_err(Self::transport)?;
        let response = Self::check(response, Some(id)).await?;
        Ok(response.json().await.map_err(Self::transport)?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        debug!("DELETE /jobs/{id}");
        let response = self
            .client
            .delete(self.url(&format!("/jobs/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = HttpJobStore::new("http://localhost:5000/api/").unwrap();
        assert_eq!(store.url("/jobs"), "http://localhost:5000/api/jobs");
        assert_eq!(store.url("/jobs/3"), "http://localhost:5000/api/jobs/3");
    }
}
