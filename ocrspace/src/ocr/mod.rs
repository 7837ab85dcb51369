//! OCR.space client
//!
//! Submits a document to the OCR.space parse endpoint and decodes the reply.
//!
//! # Submission paths
//!
//! - `parse_from_url`: the service fetches a publicly reachable URL
//! - `parse_from_base64`: the document travels inline as a base64 data URI
//! - `parse_from_file` / `parse_from_local`: multipart upload of a local file
//!
//! All three send the API key in the `apikey` header and the
//! [`RecognitionParams`] as form fields.
//!
//! # Errors
//!
//! Failing to reach the service is an `OcrError::Transport`, an unreadable
//! reply is an `OcrError::Decode`. A document the service refuses comes back
//! as a normal [`OcrResponse`] with `is_errored_on_processing` set.
//!
//! # Usage
//!
//! ```rust,ignore
//! let client = OcrSpaceClient::new(&ClientConfig::new(api_key))?;
//! let params = RecognitionParams::new().language(Language::English);
//! let text = client.parse_from_url(url, &params).await?.text();
//! ```

mod client;
mod params;
mod payload;
mod response;
mod transport;

pub use client::OcrSpaceClient;
pub use params::{FileType, Language, OcrEngine, RecognitionParams};
pub use payload::{encode_base64_image, LocalFile};
pub use response::{
    FileParseStatus, OcrExitStatus, OcrResponse, OverlayLine, OverlayWord, ParsedResult,
    TextOverlay,
};
pub use transport::{
    OcrRequest, ReqwestTransport, RequestBody, Transport, TransportResponse, API_KEY_HEADER,
};
