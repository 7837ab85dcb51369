use serial_test::serial;
use std::env;

use ocrspace::config::{Config, DEFAULT_ENDPOINT};
use ocrspace::error::OcrError;
use ocrspace::ocr::{FileType, Language, OcrEngine, RecognitionParams};

const VARS: &[&str] = &[
    "OCR_SPACE_API_KEY",
    "OCR_SPACE_ENDPOINT",
    "OCR_SPACE_TIMEOUT",
    "OCR_SPACE_LANGUAGE",
    "OCR_SPACE_FILETYPE",
    "OCR_SPACE_ENGINE",
    "OCR_SPACE_OVERLAY",
    "OCR_SPACE_DETECT_ORIENTATION",
    "OCR_SPACE_SEARCHABLE_PDF",
    "OCR_SPACE_HIDE_TEXT_LAYER",
    "OCR_SPACE_SCALE",
    "OCR_SPACE_TABLE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_api_key_is_config_error() {
    clear_env();

    let result = Config::from_env();
    assert!(matches!(result, Err(OcrError::Config(_))));
}

#[test]
#[serial]
fn test_defaults_with_only_api_key() {
    clear_env();
    env::set_var("OCR_SPACE_API_KEY", "env-key");

    let config = Config::from_env().unwrap();
    assert_eq!(config.client.api_key, "env-key");
    assert!(config.client.endpoint.is_none());
    assert!(config.client.timeout_secs.is_none());
    assert_eq!(config.client.endpoint_url().unwrap().as_str(), DEFAULT_ENDPOINT);
    assert_eq!(config.params, RecognitionParams::default());

    clear_env();
}

#[test]
#[serial]
fn test_params_from_env() {
    clear_env();
    env::set_var("OCR_SPACE_API_KEY", "env-key");
    env::set_var("OCR_SPACE_ENDPOINT", "https://apipro1.ocr.space/parse/image");
    env::set_var("OCR_SPACE_TIMEOUT", "45");
    env::set_var("OCR_SPACE_LANGUAGE", "jpn");
    env::set_var("OCR_SPACE_FILETYPE", "png");
    env::set_var("OCR_SPACE_ENGINE", "2");
    env::set_var("OCR_SPACE_OVERLAY", "true");
    env::set_var("OCR_SPACE_TABLE", "true");

    let config = Config::from_env().unwrap();
    assert_eq!(
        config.client.endpoint.as_deref(),
        Some("https://apipro1.ocr.space/parse/image")
    );
    assert_eq!(config.client.timeout_secs, Some(45));
    assert_eq!(config.params.language, Some(Language::Japanese));
    assert_eq!(config.params.file_type, Some(FileType::Png));
    assert_eq!(config.params.ocr_engine, Some(OcrEngine::V2));
    assert!(config.params.is_overlay_required);
    assert!(config.params.is_table);
    assert!(!config.params.scale);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_optional_values_are_ignored() {
    clear_env();
    env::set_var("OCR_SPACE_API_KEY", "env-key");
    env::set_var("OCR_SPACE_TIMEOUT", "soon");
    env::set_var("OCR_SPACE_LANGUAGE", "klingon");
    env::set_var("OCR_SPACE_SCALE", "maybe");

    let config = Config::from_env().unwrap();
    assert!(config.client.timeout_secs.is_none());
    assert!(config.params.language.is_none());
    assert!(!config.params.scale);

    clear_env();
}
