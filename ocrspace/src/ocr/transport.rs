use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::debug;

use crate::error::{OcrError, Result};

use super::payload::LocalFile;

/// Header carrying the API key on every submission path.
pub const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// Sent as `multipart/form-data` with the file under the `file` part.
    Multipart {
        fields: Vec<(String, String)>,
        file: LocalFile,
    },
}

/// One outbound submission, independent of any HTTP library.
#[derive(Clone, PartialEq)]
pub struct OcrRequest {
    pub endpoint: String,
    pub api_key: String,
    pub body: RequestBody,
}

impl std::fmt::Debug for OcrRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrRequest")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back the raw reply.
///
/// Implementations report connection, TLS, timeout and body read failures as
/// `OcrError::Transport`. A non-2xx status is a reply, not a failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OcrRequest) -> Result<TransportResponse>;
}

/// Default transport over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| OcrError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wraps a caller-configured client (proxies, TLS roots, timeouts).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OcrRequest) -> Result<TransportResponse> {
        let builder = self
            .client
            .post(&request.endpoint)
            .header(API_KEY_HEADER, &request.api_key);

        let builder = match request.body {
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart { fields, file } => {
                let mime = file.mime_type();
                let file_part = multipart::Part::bytes(file.content)
                    .file_name(file.file_name)
                    .mime_str(&mime)
                    .map_err(|e| OcrError::Config(format!("Invalid MIME type: {e}")))?;

                let form = fields
                    .into_iter()
                    .fold(multipart::Form::new().part("file", file_part), |form, (key, value)| {
                        form.text(key, value)
                    });

                builder.multipart(form)
            }
        };

        debug!(endpoint = %request.endpoint, "Sending OCR request");

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!(status, "OCR response received");

        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation_with_and_without_timeout() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(30)).is_ok());
    }

    #[test]
    fn test_request_debug_redacts_api_key() {
        let request = OcrRequest {
            endpoint: "https://api.ocr.space/parse/image".to_string(),
            api_key: "secret-key".to_string(),
            body: RequestBody::Form(vec![("url".to_string(), "https://x/y.png".to_string())]),
        };
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_response_success_range() {
        let ok = TransportResponse { status: 200, body: vec![] };
        let forbidden = TransportResponse { status: 403, body: vec![] };
        assert!(ok.is_success());
        assert!(!forbidden.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let transport = ReqwestTransport::new(Some(5)).unwrap();
        let request = OcrRequest {
            endpoint: "http://127.0.0.1:1/parse/image".to_string(),
            api_key: "k".to_string(),
            body: RequestBody::Form(vec![]),
        };

        let result = transport.send(request).await;
        assert!(matches!(result, Err(OcrError::Transport(_))));
    }
}
