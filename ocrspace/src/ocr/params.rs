
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Arabic,
    Bulgarian,
    ChineseSimplified,
    ChineseTraditional,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Korean,
    Italian,
    Japanese,
    Polish,
    Portuguese,
    Russian,
    Slovenian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 24] = [
        Self::Arabic,
        Self::Bulgarian,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Croatian,
        Self::Czech,
        Self::Danish,
        Self::Dutch,
        Self::English,
        Self::Finnish,
        Self::French,
        Self::German,
        Self::Greek,
        Self::Hungarian,
        Self::Korean,
        Self::Italian,
        Self::Japanese,
        Self::Polish,
        Self::Portuguese,
        Self::Russian,
        Self::Slovenian,
        Self::Spanish,
        Self::Swedish,
        Self::Turkish,
    ];

    /// Three-letter code the service expects in the `language` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ara",
            Self::Bulgarian => "bul",
            Self::ChineseSimplified => "chs",
            Self::ChineseTraditional => "cht",
            Self::Croatian => "hrv",
            Self::Czech => "cze",
            Self::Danish => "dan",
            Self::Dutch => "dut",
            Self::English => "eng",
            Self::Finnish => "fin",
            Self::French => "fre",
            Self::German => "ger",
            Self::Greek => "gre",
            Self::Hungarian => "hun",
            Self::Korean => "kor",
            Self::Italian => "ita",
            Self::Japanese => "jpn",
            Self::Polish => "pol",
            Self::Portuguese => "por",
            Self::Russian => "rus",
            Self::Slovenian => "slv",
            Self::Spanish => "spa",
            Self::Swedish => "swe",
            Self::Turkish => "tur",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("Unknown OCR language: {s}"))
    }
}

/// Overrides the service's content-type based file type detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Gif,
    Png,
    Jpg,
    Tif,
    Bmp,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Gif => write!(f, "GIF"),
            Self::Png => write!(f, "PNG"),
            Self::Jpg => write!(f, "JPG"),
            Self::Tif => write!(f, "TIF"),
            Self::Bmp => write!(f, "BMP"),
        }
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "gif" => Ok(Self::Gif),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "tif" | "tiff" => Ok(Self::Tif),
            "bmp" => Ok(Self::Bmp),
            _ => Err(format!("Unknown file type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrEngine {
    V1,
    V2,
}

impl std::fmt::Display for OcrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "1"),
            Self::V2 => write!(f, "2"),
        }
    }
}

impl std::str::FromStr for OcrEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "v1" => Ok(Self::V1),
            "2" | "v2" => Ok(Self::V2),
            _ => Err(format!("Unknown OCR engine: {s}")),
        }
    }
}

/// Options controlling how the service processes one submission.
///
/// Flags are always sent as an explicit `true`/`false`, since the service's
/// defaults differ per endpoint. `language`, `file_type` and `ocr_engine` are
/// left out of the request when unset so the service applies its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionParams {
    /// Service default: `eng`.
    pub language: Option<Language>,
    /// Return bounding boxes for every word.
    pub is_overlay_required: bool,
    pub file_type: Option<FileType>,
    /// Auto-rotate the image and report the rotation in `TextOrientation`.
    pub detect_orientation: bool,
    /// Generate a searchable PDF. The service implies `is_overlay_required`.
    pub is_create_searchable_pdf: bool,
    pub is_searchable_pdf_hide_text_layer: bool,
    /// Internal upscaling, helps with low-resolution scans.
    pub scale: bool,
    /// Return the text line by line, for receipts and table-like layouts.
    pub is_table: bool,
    /// Service default: engine 1.
    pub ocr_engine: Option<OcrEngine>,
}

impl RecognitionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn overlay(mut self, required: bool) -> Self {
        self.is_overlay_required = required;
        self
    }

    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    pub fn detect_orientation(mut self, detect: bool) -> Self {
        self.detect_orientation = detect;
        self
    }

    pub fn searchable_pdf(mut self, create: bool) -> Self {
        self.is_create_searchable_pdf = create;
        self
    }

    pub fn hide_text_layer(mut self, hide: bool) -> Self {
        self.is_searchable_pdf_hide_text_layer = hide;
        self
    }

    pub fn scale(mut self, scale: bool) -> Self {
        self.scale = scale;
        self
    }

    pub fn table(mut self, table: bool) -> Self {
        self.is_table = table;
        self
    }

    pub fn engine(mut self, engine: OcrEngine) -> Self {
        self.ocr_engine = Some(engine);
        self
    }

    /// Wire key/value pairs, in a stable order.
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(9);

        if let Some(language) = self.language {
            fields.push(("language", language.to_string()));
        }
        fields.push(("isOverlayRequired", self.is_overlay_required.to_string()));
        if let Some(file_type) = self.file_type {
            fields.push(("filetype", file_type.to_string()));
        }
        fields.push(("detectOrientation", self.detect_orientation.to_string()));
        fields.push((
            "isCreateSearchablePdf",
            self.is_create_searchable_pdf.to_string(),
        ));
        fields.push((
            "isSearchablePdfHideTextLayer",
            self.is_searchable_pdf_hide_text_layer.to_string(),
        ));
        fields.push(("scale", self.scale.to_string()));
        fields.push(("isTable", self.is_table.to_string()));
        if let Some(engine) = self.ocr_engine {
            fields.push(("OCREngine", engine.to_string()));
        }

        fields
    }
}
