//! `reqwest` transport for the presentation backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use async_trait::async_trait;
use deck::api::{ApiError, DeckApi, endpoints, join_url, status_error};
use deck::types::{Block, CreatedBlock, CreatedProject, NewBlock, NewProject, Project, PublicPage, PublishRequest};
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend client over HTTP/JSON. No auth, no retries.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "backend rejected request");
        Err(status_error(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DeckApi for HttpApi {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json(endpoints::PROJECTS).await
    }

    async fn create_project(&self, request: &NewProject) -> Result<Project, ApiError> {
        let created: CreatedProject = self.post_json(endpoints::PROJECTS, request).await?;
        Ok(created.into_project(request))
    }

    async fn list_blocks(&self, project_id: &str) -> Result<Vec<Block>, ApiError> {
        self.get_json(&endpoints::project_blocks(project_id)).await
    }

    async fn create_block(&self, request: &NewBlock) -> Result<Block, ApiError> {
        let created: CreatedBlock = self.post_json(endpoints::BLOCKS, request).await?;
        Ok(created.into_block(request))
    }

    async fn publish(&self, project_id: &str, request: &PublishRequest) -> Result<(), ApiError> {
        let url = self.url(&endpoints::publish(project_id));
        self.send(self.client.post(url).json(request)).await?;
        Ok(())
    }

    async fn public_page(&self, slug: &str) -> Result<PublicPage, ApiError> {
        self.get_json(&endpoints::public_page(slug)).await
    }
}
