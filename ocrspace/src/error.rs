use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    /// The service could not be reached or the exchange broke off
    /// (DNS, connect, TLS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered, but the body is not an OCR result.
    #[error("Decode error (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OcrError {
    pub fn is_transport(&self) -> bool {
        matches!(self, OcrError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, OcrError::Decode { .. })
    }
}

impl From<reqwest::Error> for OcrError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OcrError::Transport(format!("Request timeout: {e}"))
        } else if e.is_builder() {
            OcrError::Config(format!("Failed to build request: {e}"))
        } else {
            OcrError::Transport(format!("Request failed: {e}"))
        }
    }
}

impl From<url::ParseError> for OcrError {
    fn from(e: url::ParseError) -> Self {
        OcrError::Config(format!("Invalid endpoint URL: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories_are_distinct() {
        let transport = OcrError::Transport("connection refused".to_string());
        let decode = OcrError::Decode {
            status: 200,
            message: "expected value at line 1 column 1".to_string(),
        };
        let io = OcrError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.png",
        ));

        assert!(transport.is_transport());
        assert!(!transport.is_decode());
        assert!(decode.is_decode());
        assert!(!decode.is_transport());
        assert!(!io.is_transport());
        assert!(!io.is_decode());
    }

    #[test]
    fn test_decode_error_names_status() {
        let error = OcrError::Decode {
            status: 502,
            message: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Decode error (HTTP 502): expected value"
        );
    }

    #[test]
    fn test_url_parse_error_maps_to_config() {
        let error: OcrError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(error, OcrError::Config(_)));
        assert!(error.to_string().contains("Invalid endpoint URL"));
    }
}
