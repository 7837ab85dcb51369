pub mod config;
pub mod error;
pub mod ocr;

pub use config::{ClientConfig, Config};
pub use error::{OcrError, Result};
pub use ocr::{OcrResponse, OcrSpaceClient, RecognitionParams};
