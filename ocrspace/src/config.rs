use std::env;

use url::Url;

use crate::error::{OcrError, Result};
use crate::ocr::RecognitionParams;

pub const DEFAULT_ENDPOINT: &str = "https://api.ocr.space/parse/image";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Everything needed to reach the service.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    /// Falls back to [`DEFAULT_ENDPOINT`].
    pub endpoint: Option<String>,
    /// Applied to the default transport only; the client adds no timeout of
    /// its own.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: None,
            timeout_secs: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// The configured endpoint, or the default, as an absolute http(s) URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let url = Url::parse(raw)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(OcrError::Config(format!(
                "Unsupported endpoint scheme '{scheme}' in {raw}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    /// Defaults for callers that do not build their own parameters per call.
    pub params: RecognitionParams,
}

impl Config {
    /// Reads `OCR_SPACE_*` variables. Only the API key is required; invalid
    /// optional values are logged and ignored.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OCR_SPACE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| OcrError::Config("OCR_SPACE_API_KEY is not set".to_string()))?;

        let client = ClientConfig {
            api_key,
            endpoint: env::var("OCR_SPACE_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
            timeout_secs: parse_env_opt("OCR_SPACE_TIMEOUT"),
        };

        let params = RecognitionParams {
            language: parse_env_opt("OCR_SPACE_LANGUAGE"),
            is_overlay_required: parse_env_or("OCR_SPACE_OVERLAY", false),
            file_type: parse_env_opt("OCR_SPACE_FILETYPE"),
            detect_orientation: parse_env_or("OCR_SPACE_DETECT_ORIENTATION", false),
            is_create_searchable_pdf: parse_env_or("OCR_SPACE_SEARCHABLE_PDF", false),
            is_searchable_pdf_hide_text_layer: parse_env_or("OCR_SPACE_HIDE_TEXT_LAYER", false),
            scale: parse_env_or("OCR_SPACE_SCALE", false),
            is_table: parse_env_or("OCR_SPACE_TABLE", false),
            ocr_engine: parse_env_opt("OCR_SPACE_ENGINE"),
        };

        Ok(Self { client, params })
    }
}
