use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocrspace::config::Config;
use ocrspace::ocr::{
    encode_base64_image, FileType, Language, OcrEngine, OcrSpaceClient, RecognitionParams,
};

#[derive(Parser)]
#[command(name = "ocrspace")]
#[command(about = "Extract text from images and PDFs with the OCR.space API")]
#[command(group(ArgGroup::new("source").required(true).args(["url", "base64", "image", "file"])))]
struct Args {
    /// Publicly reachable URL of the image or PDF
    #[arg(long)]
    url: Option<String>,

    /// Inline payload, e.g. data:image/png;base64,...
    #[arg(long)]
    base64: Option<String>,

    /// Local image sent inline as a base64 data URI
    #[arg(long)]
    image: Option<PathBuf>,

    /// Local file sent as a multipart upload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Three-letter language code (eng, ger, jpn, ...)
    #[arg(long)]
    language: Option<Language>,

    /// Override file type detection (PDF, PNG, JPG, GIF, TIF, BMP)
    #[arg(long)]
    filetype: Option<FileType>,

    /// OCR engine version (1 or 2)
    #[arg(long)]
    engine: Option<OcrEngine>,

    // Switches: a bare `--scale` sets true, `--scale false` clears an OCR_SPACE_SCALE=true default.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    overlay: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    detect_orientation: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    searchable_pdf: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    hide_text_layer: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    scale: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    table: Option<bool>,

    /// Print the full decoded reply as JSON instead of the text
    #[arg(long)]
    json: bool,
}

/// Layers command-line values over the environment defaults. Only flags given
/// on the command line replace a default.
fn apply_overrides(args: &Args, mut params: RecognitionParams) -> RecognitionParams {
    if let Some(language) = args.language {
        params.language = Some(language);
    }
    if let Some(file_type) = args.filetype {
        params.file_type = Some(file_type);
    }
    if let Some(engine) = args.engine {
        params.ocr_engine = Some(engine);
    }
    if let Some(overlay) = args.overlay {
        params.is_overlay_required = overlay;
    }
    if let Some(detect) = args.detect_orientation {
        params.detect_orientation = detect;
    }
    if let Some(searchable) = args.searchable_pdf {
        params.is_create_searchable_pdf = searchable;
    }
    if let Some(hide) = args.hide_text_layer {
        params.is_searchable_pdf_hide_text_layer = hide;
    }
    if let Some(scale) = args.scale {
        params.scale = scale;
    }
    if let Some(table) = args.table {
        params.is_table = table;
    }
    params
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ocrspace=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let client = OcrSpaceClient::new(&config.client)?;

    let params = apply_overrides(&args, config.params);

    tracing::info!(endpoint = %client.endpoint(), "Submitting document");

    let response = if let Some(url) = args.url.as_deref() {
        client.parse_from_url(url, &params).await?
    } else if let Some(payload) = args.base64.as_deref() {
        client.parse_from_base64(payload, &params).await?
    } else if let Some(path) = args.image.as_ref() {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        client
            .parse_from_base64(&encode_base64_image(&bytes), &params)
            .await?
    } else if let Some(path) = args.file.as_ref() {
        client.parse_from_file(path, &params).await?
    } else {
        anyhow::bail!("one of --url, --base64, --image or --file is required")
    };

    tracing::info!(
        exit_code = response.ocr_exit_code,
        pages = response.parsed_results.len(),
        processing_ms = %response.processing_time_in_milliseconds,
        "OCR finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.text());
    }

    if response.is_errored_on_processing {
        anyhow::bail!("OCR service reported an error: {}", response.error_message.join(" "));
    }

    if let Some(pdf_url) = response
        .searchable_pdf_url
        .as_deref()
        .filter(|url| url.starts_with("http"))
    {
        tracing::info!(url = %pdf_url, "Searchable PDF generated");
    }

    Ok(())
}
