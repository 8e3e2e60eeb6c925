use anyhow::Result;
use log::debug;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Thin wrapper over a shared reqwest client: joins paths onto the API base
/// URL, attaches the bearer token once one is stored, and decodes bodies as
/// loose JSON so steps can probe for fields without a typed contract.
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

/// Status plus decoded body of one API call. A body that is not valid JSON
/// decodes to `Value::Null`; field probes on it simply fail.
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Diagnostic used in failure messages, e.g. "Status: 502"
    pub fn status_message(&self) -> String {
        format!("Status: {}", self.status.as_u16())
    }
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        })
    }

    /// Store the bearer credential for all subsequent requests
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = join_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(json) = body {
            request = request.json(json);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        debug!("-> {} {}", status.as_u16(), url);

        Ok(ApiResponse { status, body })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}
