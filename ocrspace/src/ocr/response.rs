use serde::{Deserialize, Deserializer, Serialize};

/// Decoded reply of the parse endpoint.
///
/// A reply with `is_errored_on_processing` set is still a successful
/// exchange: the service rejected the document, not the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    #[serde(rename = "ParsedResults", default, deserialize_with = "null_as_default")]
    pub parsed_results: Vec<ParsedResult>,
    #[serde(rename = "OCRExitCode", default, deserialize_with = "null_as_default")]
    pub ocr_exit_code: i64,
    #[serde(
        rename = "IsErroredOnProcessing",
        default,
        deserialize_with = "null_as_default"
    )]
    pub is_errored_on_processing: bool,
    #[serde(rename = "ErrorMessage", default, deserialize_with = "string_or_seq")]
    pub error_message: Vec<String>,
    #[serde(rename = "ErrorDetails", default, deserialize_with = "null_as_default")]
    pub error_details: String,
    #[serde(
        rename = "ProcessingTimeInMilliseconds",
        default,
        deserialize_with = "string_or_number"
    )]
    pub processing_time_in_milliseconds: String,
    #[serde(rename = "SearchablePDFURL", default)]
    pub searchable_pdf_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResult {
    #[serde(rename = "TextOverlay", default)]
    pub text_overlay: Option<TextOverlay>,
    #[serde(rename = "TextOrientation", default, deserialize_with = "string_or_number")]
    pub text_orientation: String,
    #[serde(
        rename = "FileParseExitCode",
        default,
        deserialize_with = "null_as_default"
    )]
    pub file_parse_exit_code: i64,
    #[serde(rename = "ParsedText", default, deserialize_with = "null_as_default")]
    pub parsed_text: String,
    #[serde(rename = "ErrorMessage", default, deserialize_with = "null_as_default")]
    pub error_message: String,
    #[serde(rename = "ErrorDetails", default, deserialize_with = "null_as_default")]
    pub error_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    #[serde(rename = "Lines", default, deserialize_with = "null_as_default")]
    pub lines: Vec<OverlayLine>,
    #[serde(rename = "HasOverlay", default, deserialize_with = "null_as_default")]
    pub has_overlay: bool,
    #[serde(rename = "Message", default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayLine {
    #[serde(rename = "Words", default, deserialize_with = "null_as_default")]
    pub words: Vec<OverlayWord>,
    #[serde(rename = "MaxHeight", default, deserialize_with = "null_as_default")]
    pub max_height: f64,
    #[serde(rename = "MinTop", default, deserialize_with = "null_as_default")]
    pub min_top: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayWord {
    #[serde(rename = "WordText", default, deserialize_with = "null_as_default")]
    pub word_text: String,
    #[serde(rename = "Left", default, deserialize_with = "null_as_default")]
    pub left: f64,
    #[serde(rename = "Top", default, deserialize_with = "null_as_default")]
    pub top: f64,
    #[serde(rename = "Height", default, deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(rename = "Width", default, deserialize_with = "null_as_default")]
    pub width: f64,
}

/// Typed view of `OCRExitCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrExitStatus {
    Parsed,
    PartiallyParsed,
    Failed,
    Fatal,
    Unknown(i64),
}

impl From<i64> for OcrExitStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Parsed,
            2 => Self::PartiallyParsed,
            3 => Self::Failed,
            4 => Self::Fatal,
            other => Self::Unknown(other),
        }
    }
}

/// Typed view of a page's `FileParseExitCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileParseStatus {
    FileNotFound,
    Success,
    ParseError,
    Timeout,
    ValidationError,
    UnknownError,
    Other(i64),
}

impl From<i64> for FileParseStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::FileNotFound,
            1 => Self::Success,
            -10 => Self::ParseError,
            -20 => Self::Timeout,
            -30 => Self::ValidationError,
            -99 => Self::UnknownError,
            other => Self::Other(other),
        }
    }
}

impl OcrResponse {
    /// Plain text of the reply.
    ///
    /// When the service flagged the submission as errored, this is the
    /// top-level error lines joined without separator, even if some pages
    /// carry text. Otherwise it is every page's text in page order, joined
    /// without separator or trimming. Overlay data and page errors are not
    /// part of the output.
    pub fn text(&self) -> String {
        if self.is_errored_on_processing {
            self.error_message.concat()
        } else {
            self.parsed_results
                .iter()
                .map(|page| page.parsed_text.as_str())
                .collect()
        }
    }

    pub fn exit_status(&self) -> OcrExitStatus {
        OcrExitStatus::from(self.ocr_exit_code)
    }

    /// Pages the service reported a problem for.
    pub fn failed_pages(&self) -> impl Iterator<Item = (usize, &ParsedResult)> {
        self.parsed_results
            .iter()
            .enumerate()
            .filter(|(_, page)| page.has_error())
    }
}

impl ParsedResult {
    pub fn parse_status(&self) -> FileParseStatus {
        FileParseStatus::from(self.file_parse_exit_code)
    }

    pub fn has_error(&self) -> bool {
        self.parse_status() != FileParseStatus::Success || !self.error_message.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

// The service sends the top-level ErrorMessage as a list, or as a bare
// string on some rejections.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(message)) => vec![message],
        Some(OneOrMany::Many(messages)) => messages,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrNumber::String(value)) => value,
        Some(StringOrNumber::Number(value)) => value.to_string(),
    })
}
