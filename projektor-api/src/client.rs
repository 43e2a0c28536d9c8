use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{CreatedProject, Manager, NewProject, Project};
use crate::{ApiUrl, BearerToken};

pub struct ProjektorClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    token: BearerToken,
}

impl ProjektorClient {
    pub fn new(base_url: ApiUrl, token: BearerToken) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, FetchError> {
        let resp = self
            .http
            .get(url.as_ref())
            .header("Authorization", self.token.as_authorization_header())
            .send()
            .await
            .map_err(|e| FetchError::Response(e.to_string()))?;

        Self::unwrap_envelope(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &B,
    ) -> Result<T, FetchError> {
        let resp = self
            .http
            .post(url.as_ref())
            .header("Authorization", self.token.as_authorization_header())
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Response(e.to_string()))?;

        Self::unwrap_envelope(resp).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FetchError> {
        if resp.status() == 401 || resp.status() == 403 {
            return Err(FetchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(FetchError::Response(format!(
                "Backend returned status {}",
                resp.status()
            )));
        }

        let envelope = resp.json::<Envelope<T>>().await.map_err(|e| {
            FetchError::Schema(format!("Response did not match expected envelope: {}", e))
        })?;

        Ok(envelope.response.data)
    }

    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>, FetchError> {
        let url = self.base_url.append_path("/projects/all");
        debug!(url = url.as_ref(), "fetching all projects");
        self.fetch(url).await
    }

    pub async fn fetch_project_detail(&self, project_id: &str) -> Result<Project, FetchError> {
        let url = self
            .base_url
            .append_path(&format!("/projects/detail/{}", project_id));
        debug!(url = url.as_ref(), "fetching project detail");
        self.fetch(url).await
    }

    pub async fn fetch_all_managers(&self) -> Result<Vec<Manager>, FetchError> {
        let url = self.base_url.append_path("/managers/all");
        debug!(url = url.as_ref(), "fetching all managers");
        self.fetch(url).await
    }

    pub async fn add_project(&self, new_project: &NewProject) -> Result<CreatedProject, FetchError> {
        let url = self.base_url.append_path("/projects/add");
        debug!(
            url = url.as_ref(),
            project_name = %new_project.project_name,
            "adding project"
        );
        self.post(url, new_project).await
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    Response(String),
    #[error("SchemaError: {0}")]
    Schema(String),
    #[error("Other: {0}")]
    Other(String),
}

/// Every backend payload is wrapped as `{ "response": { "data": ... } }`.
/// Deserializing through this type is what turns a shape mismatch into a
/// `FetchError::Schema` instead of a missing-property surprise downstream.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub response: Payload<T>,
}

#[derive(Debug, Deserialize)]
pub struct Payload<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_project_list() {
        let raw = r#"{
            "response": {
                "data": [
                    {
                        "projectId": "p-1",
                        "projectName": "Atlas",
                        "title": "Atlas rollout",
                        "description": "Internal rollout",
                        "startDate": "2024-01-01",
                        "endDate": "2024-06-01",
                        "isRunning": true,
                        "managerName": "Dana Ortiz"
                    }
                ]
            }
        }"#;

        let envelope: Envelope<Vec<Project>> = serde_json::from_str(raw).unwrap();
        let projects = envelope.response.data;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_id, "p-1");
        assert!(projects[0].is_running);
    }

    #[test]
    fn envelope_rejects_missing_data() {
        let raw = r#"{ "response": { "rows": [] } }"#;
        let result = serde_json::from_str::<Envelope<Vec<Project>>>(raw);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_rejects_unwrapped_payload() {
        let raw = r#"{ "data": [] }"#;
        let result = serde_json::from_str::<Envelope<Vec<Project>>>(raw);
        assert!(result.is_err());
    }
}
