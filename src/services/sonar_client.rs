use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use url::Url;
use crate::config::constants::{
    timeout_duration, REQUEST_TIMEOUT_MINUTES, SONAR_WEB_API_PATH_CE_TASK, SONAR_WEB_API_PATH_PROJECT_STATUS,
};
use crate::enums::resolution_mode::StatusQuery;
use crate::errors::{GateError, GateResult};
use crate::structs::config::gate_settings::GateSettings;
use crate::structs::sonar::envelope::{parse_envelope, Envelope, ProjectStatusEnvelope, TaskEnvelope};
use crate::structs::sonar::project_status::ProjectStatus;
use crate::structs::sonar::task::Task;
use crate::traits::sonar_api::SonarApi;

/// Connector for the Sonar Web API.
pub struct SonarClient {
    base_url: Url,
    login: Option<String>,
    password: Option<String>,
    client: Client,
}

impl SonarClient {
    pub fn new(host_url: &Url, login: Option<String>, password: Option<String>) -> GateResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(REQUEST_TIMEOUT_MINUTES))
            // a redirect is answered like any other non-200 status
            .redirect(Policy::none())
            .build()
            .map_err(|e| GateError::config_error(format!("cannot create http client: {}", e)))?;

        let mut base_url = host_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            login,
            password,
            client,
        })
    }

    pub fn from_settings(settings: &GateSettings) -> GateResult<Self> {
        Self::new(&settings.host_url, settings.login.clone(), settings.password.clone())
    }

    /// Join base url, api path and the url-encoded query parameters, keeping
    /// the parameter order.
    pub fn create_uri(&self, api_path: &str, params: &[(&str, &str)]) -> GateResult<Url> {
        let mut uri = self.base_url.join(api_path).map_err(|e| {
            GateError::config_error(format!("Cannot create valid URI from: {}{}: {}", self.base_url, api_path, e))
        })?;
        uri.set_query(None);

        if !params.is_empty() {
            let mut query = uri.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        Ok(uri)
    }

    async fn retrieve_response(&self, uri: Url) -> GateResult<String> {
        log::info!("Sonar Web API call: {}", uri);

        let mut request = self.client.get(uri.clone()).header(CONTENT_TYPE, "application/json");
        if let Some(login) = &self.login {
            // a token is sent as user name with an empty password
            request = request.basic_auth(login, Some(self.password.as_deref().unwrap_or("")));
        }

        let response = request.send().await.map_err(|source| GateError::Transport {
            uri: uri.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| GateError::Transport {
            uri: uri.to_string(),
            source,
        })?;

        log::debug!("Response from Sonar (HTTP Status: {}):\n{}", status.as_u16(), body);

        if status != StatusCode::OK {
            return Err(GateError::Protocol {
                status: status.as_u16(),
                uri: uri.to_string(),
                body,
            });
        }

        Ok(body)
    }

    async fn fetch<E: Envelope>(&self, api_path: &str, params: &[(&str, &str)]) -> GateResult<E::Content> {
        let uri = self.create_uri(api_path, params)?;
        let body = self.retrieve_response(uri).await?;
        parse_envelope::<E>(&body)
    }
}

#[async_trait]
impl SonarApi for SonarClient {
    async fn fetch_task(&self, task_handle: &str) -> GateResult<Task> {
        self.fetch::<TaskEnvelope>(SONAR_WEB_API_PATH_CE_TASK, &[("id", task_handle)]).await
    }

    async fn fetch_project_status(&self, query: &StatusQuery) -> GateResult<ProjectStatus> {
        self.fetch::<ProjectStatusEnvelope>(SONAR_WEB_API_PATH_PROJECT_STATUS, &query.params()).await
    }
}
