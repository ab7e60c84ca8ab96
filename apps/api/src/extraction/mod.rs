//! Text extraction — turns uploaded bytes into best-effort plain text.
//!
//! The strategy is picked from the filename suffix. Each format handler
//! returns a `Result`; `TextExtractor::extract` is the only place those
//! errors are absorbed, so callers always get a string back.

pub mod docx;
pub mod ocr;
pub mod pdf;
pub mod plain_text;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

pub use self::ocr::{OcrEngine, TesseractOcr};

/// Returned verbatim for image uploads whenever decoding or OCR fails, so
/// callers can tell "OCR did not run" apart from "document had no text".
pub const OCR_FAILED_SENTINEL: &str = "(OCR Failed: Tesseract not found or image error)";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR engine unavailable")]
    OcrUnavailable,

    #[error("Invalid UTF-8 content: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Extraction strategy selected from a filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Image,
    /// Fallback for `.txt` and every unrecognised suffix.
    PlainText,
}

impl DocumentKind {
    /// Case-insensitive suffix match on the whole filename, so a bare
    /// `.pdf` counts as a PDF.
    pub fn from_filename(filename: &str) -> Self {
        let filename = filename.to_lowercase();

        if filename.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if filename.ends_with(".docx") {
            DocumentKind::Docx
        } else if [".png", ".jpg", ".jpeg"]
            .iter()
            .any(|suffix| filename.ends_with(*suffix))
        {
            DocumentKind::Image
        } else {
            DocumentKind::PlainText
        }
    }

    /// Value returned by `TextExtractor::extract` when this strategy fails.
    pub fn failure_text(self) -> &'static str {
        match self {
            DocumentKind::Image => OCR_FAILED_SENTINEL,
            _ => "",
        }
    }
}

/// Dispatches uploaded content to the matching format handler.
///
/// Holds no per-request state; one instance is shared across all requests.
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    pub fn ocr_engine_name(&self) -> &str {
        self.ocr.name()
    }

    /// Extracts text from `content`, choosing the strategy from `filename`.
    ///
    /// Never fails: any handler error is logged and replaced with the kind's
    /// failure text (empty, or the OCR sentinel for images).
    pub fn extract(&self, content: &[u8], filename: &str) -> String {
        let kind = DocumentKind::from_filename(filename);
        info!(
            "Extracting text from {filename:?} as {kind:?} ({} bytes)",
            content.len()
        );

        let result = match kind {
            DocumentKind::Pdf => pdf::extract_pdf_text(content),
            DocumentKind::Docx => docx::extract_docx_text(content),
            DocumentKind::Image => ocr::extract_image_text(content, self.ocr.as_ref()),
            DocumentKind::PlainText => plain_text::extract_plain_text(content),
        };

        match result {
            Ok(text) => {
                debug!("{kind:?} extraction produced {} characters", text.chars().count());
                text
            }
            Err(e) => {
                warn!("Error reading {kind:?} {filename:?}: {e}");
                kind.failure_text().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    struct FixedOcr(&'static str);

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _image: &DynamicImage) -> ExtractResult<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn extractor() -> TextExtractor {
        TextExtractor::new(Arc::new(FixedOcr("Jane Doe\njane@x.com")))
    }

    #[test]
    fn test_kind_from_suffix_is_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename("cv.Docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_filename("scan.JPG"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename("scan.jpeg"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename("scan.png"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename(".pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_filename(".JPG"), DocumentKind::Image);
    }

    #[test]
    fn test_unknown_and_missing_suffixes_fall_back_to_plain_text() {
        assert_eq!(DocumentKind::from_filename("cv.txt"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("cv.doc"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("README"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename(""), DocumentKind::PlainText);
    }

    #[test]
    fn test_only_the_last_suffix_counts() {
        assert_eq!(DocumentKind::from_filename("cv.pdf.txt"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_filename("my.resume.pdf"), DocumentKind::Pdf);
    }

    #[test]
    fn test_failure_text_per_kind() {
        assert_eq!(DocumentKind::Image.failure_text(), OCR_FAILED_SENTINEL);
        assert_eq!(DocumentKind::Pdf.failure_text(), "");
        assert_eq!(DocumentKind::Docx.failure_text(), "");
        assert_eq!(DocumentKind::PlainText.failure_text(), "");
    }

    #[test]
    fn test_empty_content_never_fails_for_any_suffix() {
        let extractor = extractor();
        assert_eq!(extractor.extract(&[], "cv.pdf"), "");
        assert_eq!(extractor.extract(&[], "cv.docx"), "");
        assert_eq!(extractor.extract(&[], "cv.txt"), "");
        assert_eq!(extractor.extract(&[], "cv.jpg"), OCR_FAILED_SENTINEL);
        assert_eq!(extractor.extract(&[], "cv.png"), OCR_FAILED_SENTINEL);
        assert_eq!(extractor.extract(&[], ".jpg"), OCR_FAILED_SENTINEL);
    }

    #[test]
    fn test_garbage_content_never_fails() {
        let garbage = [0xFFu8, 0x00, 0xFE, 0x13, 0x37, 0x80, 0x81];
        let extractor = extractor();
        assert_eq!(extractor.extract(&garbage, "cv.pdf"), "");
        assert_eq!(extractor.extract(&garbage, "cv.docx"), "");
        assert_eq!(extractor.extract(&garbage, "cv.bin"), "");
        assert_eq!(extractor.extract(&garbage, "cv.jpeg"), OCR_FAILED_SENTINEL);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = extractor().extract("Jane Doe\nPython".as_bytes(), "resume.TXT");
        assert_eq!(text, "Jane Doe\nPython");
    }

    #[test]
    fn test_image_is_routed_through_ocr_engine() {
        let png = ocr::tests::tiny_png();
        assert_eq!(extractor().extract(&png, "scan.png"), "Jane Doe\njane@x.com");
    }
}
