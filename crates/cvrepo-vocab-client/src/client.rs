//! HTTP implementation of [`VocabularyService`].
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/projects` | list projects |
//! | GET    | `/api/v1/projects/{project}/collections` | list collections |
//! | GET    | `/api/v1/projects/{project}/collections/{collection}/terms` | list terms |
//! | GET    | `/api/v1/terms` | list every term of every project |
//! | POST   | `/api/v1/synchronize` | reload from [`ServiceSettings`] |
//!
//! Path segments are percent-encoded, so collection names are passed
//! through verbatim.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::VocabApiConfig;
use crate::error::VocabApiError;
use crate::service::VocabularyService;
use crate::settings::ServiceSettings;
use crate::types::Term;

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Client for the vocabulary service REST API.
#[derive(Debug, Clone)]
pub struct VocabClient {
    http: reqwest::Client,
    base_url: Url,
}

impl VocabClient {
    /// Create a new client from configuration.
    pub fn new(config: VocabApiConfig) -> Result<Self, VocabApiError> {
        if config.api_url.cannot_be_a_base() {
            return Err(VocabApiError::InvalidBaseUrl(config.api_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cv-validate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VocabApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.api_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Result<Url, VocabApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VocabApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: String,
        segments: &[&str],
    ) -> Result<T, VocabApiError> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "vocabulary request");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| VocabApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(VocabApiError::NotFound { endpoint });
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(VocabApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| VocabApiError::Deserialization {
            endpoint,
            source: e,
        })
    }
}

impl VocabularyService for VocabClient {
    async fn get_all_projects(&self) -> Result<Vec<String>, VocabApiError> {
        self.get_json("GET /projects".into(), &["projects"]).await
    }

    async fn get_all_collections_in_project(
        &self,
        project: &str,
    ) -> Result<Vec<String>, VocabApiError> {
        self.get_json(
            format!("GET /projects/{project}/collections"),
            &["projects", project, "collections"],
        )
        .await
    }

    async fn get_all_terms_in_collection(
        &self,
        project: &str,
        collection: &str,
    ) -> Result<Vec<Term>, VocabApiError> {
        self.get_json(
            format!("GET /projects/{project}/collections/{collection}/terms"),
            &["projects", project, "collections", collection, "terms"],
        )
        .await
    }

    async fn get_all_terms_in_all_projects(&self) -> Result<Vec<Term>, VocabApiError> {
        self.get_json("GET /terms".into(), &["terms"]).await
    }

    async fn synchronize(&self, settings: &ServiceSettings) -> Result<(), VocabApiError> {
        let endpoint = "POST /synchronize";
        let url = self.url(&["synchronize"])?;

        let resp = self
            .http
            .post(url)
            .json(settings)
            .send()
            .await
            .map_err(|e| VocabApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(VocabApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        tracing::info!(projects = settings.projects.len(), "vocabulary service synchronized");
        Ok(())
    }
}
