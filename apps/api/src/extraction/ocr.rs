//! Image uploads: in-memory decode followed by optical character recognition.

use image::DynamicImage;

use super::{ExtractError, ExtractResult};

/// Pluggable OCR backend. Implement this to swap engines without touching
/// the extractor or the HTTP layer.
///
/// Carried in `TextExtractor` as `Arc<dyn OcrEngine>`.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String>;

    /// Human-readable engine name, logged at startup.
    fn name(&self) -> &str;
}

/// Decodes `content` and hands a grayscale copy to the OCR engine.
pub fn extract_image_text(content: &[u8], ocr: &dyn OcrEngine) -> ExtractResult<String> {
    let decoded = image::load_from_memory(content)?;
    let grayscale = DynamicImage::ImageLuma8(decoded.to_luma8());
    ocr.recognize(&grayscale)
}

/// Default engine: shells out to the Tesseract binary through `rusty-tesseract`.
///
/// Tesseract only reads from disk, so the image is written to a temporary
/// PNG that is removed once recognition finishes.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    #[cfg_attr(not(feature = "ocr"), allow(dead_code))]
    language: String,
}

impl TesseractOcr {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl OcrEngine for TesseractOcr {
    #[cfg(feature = "ocr")]
    fn recognize(&self, image: &DynamicImage) -> ExtractResult<String> {
        use image::ImageFormat;
        use rusty_tesseract::{Args, Image};

        let scratch = tempfile::Builder::new()
            .prefix("resume-ocr-")
            .suffix(".png")
            .tempfile()?;
        image.save_with_format(scratch.path(), ImageFormat::Png)?;

        let input = Image::from_path(scratch.path()).map_err(|e| ExtractError::Ocr(e.to_string()))?;
        let args = Args {
            lang: self.language.clone(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&input, &args).map_err(|e| ExtractError::Ocr(e.to_string()))
    }

    #[cfg(not(feature = "ocr"))]
    fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
        Err(ExtractError::OcrUnavailable)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
