//! HTTP transport abstraction for testability

use async_trait::async_trait;
use std::sync::Arc;

use crate::request::{Body, Method, Part, RequestSpec};
use crate::session::Session;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Map a response status to the error taxonomy. 401 becomes
    /// [`crate::ApiError::Auth`]; the caller is responsible for the
    /// session-termination side effect.
    pub fn into_result(self) -> crate::Result<HttpResponse> {
        match self.status {
            200..=299 => Ok(self),
            401 => Err(crate::ApiError::Auth),
            status => Err(crate::ApiError::Server {
                status,
                message: extract_message(&self.body),
            }),
        }
    }
}

/// Pull the human-readable `message` field out of an error body, falling
/// back to the raw body.
pub fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

/// Abstraction over the HTTP transport for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport: Send + Sync {
    /// Execute a request spec against the backend. Only transport-level
    /// failures are errors here; status handling is the caller's concern.
    async fn execute(&self, spec: &RequestSpec) -> crate::Result<HttpResponse>;
}

/// Production transport using reqwest. Attaches the bearer credential from
/// the injected session to every outgoing request.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn Session>,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn Session>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, spec: &RequestSpec) -> crate::Result<HttpResponse> {
        let url = format!("{}{}", self.base_url, spec.path);
        tracing::debug!("{} {}", spec.method.as_str(), url);

        let mut builder = match spec.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(token) = self.session.access_token() {
            builder = builder.bearer_auth(token);
        }

        builder = match &spec.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match part {
                        Part::Text { name, value } => form.text(name.clone(), value.clone()),
                        Part::File { name, attachment } => {
                            let file = reqwest::multipart::Part::bytes(attachment.bytes.clone())
                                .file_name(attachment.filename.clone())
                                .mime_str(&attachment.mime)
                                .map_err(|e| {
                                    crate::ApiError::Network(format!(
                                        "Invalid mime type {}: {}",
                                        attachment.mime, e
                                    ))
                                })?;
                            form.part(name.clone(), file)
                        }
                    };
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(|e| {
            crate::ApiError::Network(format!("{} {} failed: {}", spec.method.as_str(), url, e))
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::ApiError::Network(format!("Reading response body: {}", e)))?;

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            spec.method.as_str(),
            url,
            status,
            body.len()
        );
        Ok(HttpResponse { status, body })
    }
}
