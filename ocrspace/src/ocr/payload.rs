use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{OcrError, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A document held in memory for the multipart upload path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl LocalFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads the whole file into memory. The upload is not streamed.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                OcrError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Path has no usable file name: {}", path.display()),
                ))
            })?
            .to_string();

        let content = tokio::fs::read(path).await?;

        Ok(Self { file_name, content })
    }

    /// MIME type for the file part, guessed from the extension.
    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string()
    }
}

/// Encodes raw bytes as the `data:<mime>;base64,<payload>` string the service
/// accepts in `base64Image`. The MIME type comes from the content's magic
/// bytes.
pub fn encode_base64_image(bytes: &[u8]) -> String {
    let mime = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_uses_detected_mime() {
        let encoded = encode_base64_image(&PNG_MAGIC);
        assert!(encoded.starts_with("data:image/png;base64,"));
        assert!(encoded.ends_with(&STANDARD.encode(PNG_MAGIC)));
    }

    #[test]
    fn test_encode_unknown_content_falls_back() {
        let encoded = encode_base64_image(b"plain bytes");
        assert!(encoded.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_jpeg_magic_bytes() {
        let encoded = encode_base64_image(&[0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(encoded, "data:image/jpeg;base64,/9j/4A==");
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(LocalFile::new("scan.pdf", vec![]).mime_type(), "application/pdf");
        assert_eq!(LocalFile::new("photo.JPG", vec![]).mime_type(), "image/jpeg");
        assert_eq!(
            LocalFile::new("noext", vec![]).mime_type(),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_path_reads_name_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&PNG_MAGIC).unwrap();

        let local = LocalFile::from_path(&path).await.unwrap();
        assert_eq!(local.file_name, "receipt.png");
        assert_eq!(local.content, PNG_MAGIC.to_vec());
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalFile::from_path(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(OcrError::Io(_))));
    }
}
