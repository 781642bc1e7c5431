// src/core/service_client.rs
//! HTTP client for the resume storage API

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::app_log;
use crate::error::NetworkError;
use crate::types::{HealthResponse, ResumeData, ResumeId, StoredResume};

const RESUMES_ENDPOINT: &str = "/api/resumes";
const HEALTH_ENDPOINT: &str = "/api/health";

/// Storage operations the application needs from its backend
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    async fn list_resumes(&self) -> Result<Vec<StoredResume>, NetworkError>;

    async fn create_resume(&self, draft: &ResumeData) -> Result<StoredResume, NetworkError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client. `None` keeps the transport's default timeout behaviour.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetch a single stored resume
    pub async fn get_resume(&self, id: ResumeId) -> Result<StoredResume, NetworkError> {
        let url = self.url(&format!("{}/{}", RESUMES_ENDPOINT, id));
        app_log!(info, "Fetching resume {}: {}", id, url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response)?;
        Ok(response.json::<StoredResume>().await?)
    }

    /// Query the backend health endpoint
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.url(HEALTH_ENDPOINT);
        app_log!(trace, "Calling health endpoint: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HealthResponse>()
                .await
                .context("Failed to parse health response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[async_trait]
impl ResumeBackend for ServiceClient {
    async fn list_resumes(&self) -> Result<Vec<StoredResume>, NetworkError> {
        let url = self.url(RESUMES_ENDPOINT);
        app_log!(info, "Fetching resumes: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response)?;
        let resumes: Vec<StoredResume> = response.json().await?;

        app_log!(trace, "Fetched {} resumes", resumes.len());
        Ok(resumes)
    }

    async fn create_resume(&self, draft: &ResumeData) -> Result<StoredResume, NetworkError> {
        let url = self.url(RESUMES_ENDPOINT);
        app_log!(info, "Creating resume for {}: {}", draft.name, url);

        let response = self.client.post(&url).json(draft).send().await?;
        let response = check_status(response)?;
        let created: StoredResume = response.json().await?;

        app_log!(info, "Backend assigned id {}", created.id);
        Ok(created)
    }
}

/// Any non-2xx status is a failure; the body is not inspected.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, NetworkError> {
    let status = response.status();
    app_log!(trace, "Response status: {}", status);

    if status.is_success() {
        Ok(response)
    } else {
        app_log!(error, "Backend error status {} for {}", status, response.url());
        Err(NetworkError::Status(status))
    }
}
