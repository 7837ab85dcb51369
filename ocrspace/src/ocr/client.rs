use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{OcrError, Result};

use super::params::RecognitionParams;
use super::payload::LocalFile;
use super::response::OcrResponse;
use super::transport::{OcrRequest, ReqwestTransport, RequestBody, Transport, TransportResponse};

/// Client for the OCR.space parse endpoint.
///
/// Holds no mutable state; clones share the same transport, so one instance
/// can serve concurrent callers.
#[derive(Clone)]
pub struct OcrSpaceClient {
    endpoint: String,
    api_key: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for OcrSpaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrSpaceClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OcrSpaceClient {
    /// Builds a client over the default reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout_secs)?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let endpoint = config.endpoint_url()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key: config.api_key.clone(),
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Recognizes the image or PDF found at a publicly reachable URL.
    pub async fn parse_from_url(
        &self,
        file_url: &str,
        params: &RecognitionParams,
    ) -> Result<OcrResponse> {
        let body = RequestBody::Form(form_fields("url", file_url, params));
        self.submit(body).await
    }

    /// Recognizes an inline payload, usually a `data:<mime>;base64,...` string
    /// (see [`encode_base64_image`](super::encode_base64_image)).
    pub async fn parse_from_base64(
        &self,
        base64_image: &str,
        params: &RecognitionParams,
    ) -> Result<OcrResponse> {
        let body = RequestBody::Form(form_fields("base64Image", base64_image, params));
        self.submit(body).await
    }

    /// Uploads a local file. A path that cannot be read fails with
    /// `OcrError::Io` before anything is sent.
    pub async fn parse_from_file(
        &self,
        path: impl AsRef<Path>,
        params: &RecognitionParams,
    ) -> Result<OcrResponse> {
        let file = LocalFile::from_path(path).await?;
        self.parse_from_local(file, params).await
    }

    pub async fn parse_from_local(
        &self,
        file: LocalFile,
        params: &RecognitionParams,
    ) -> Result<OcrResponse> {
        let fields = params
            .to_form_fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        self.submit(RequestBody::Multipart { fields, file }).await
    }

    async fn submit(&self, body: RequestBody) -> Result<OcrResponse> {
        let request = OcrRequest {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            body,
        };

        let response = self.transport.send(request).await?;
        let result = decode(response)?;

        if result.is_errored_on_processing {
            debug!(
                exit_code = result.ocr_exit_code,
                errors = ?result.error_message,
                "OCR service reported a processing error"
            );
        }

        Ok(result)
    }
}

fn form_fields(
    payload_key: &str,
    payload: &str,
    params: &RecognitionParams,
) -> Vec<(String, String)> {
    let mut fields = vec![(payload_key.to_string(), payload.to_string())];
    fields.extend(
        params
            .to_form_fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value)),
    );
    fields
}

fn decode(response: TransportResponse) -> Result<OcrResponse> {
    serde_json::from_slice(&response.body).map_err(|e| {
        let preview: String = String::from_utf8_lossy(&response.body)
            .chars()
            .take(100)
            .collect();
        warn!(status = response.status, body_preview = %preview, error = %e, "Failed to decode OCR response");
        OcrError::Decode {
            status: response.status,
            message: e.to_string(),
        }
    })
}
