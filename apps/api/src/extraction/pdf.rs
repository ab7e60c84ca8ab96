use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{ExtractError, ExtractResult};

/// Text of every page, in page order. Pages without a text layer (scans)
/// contribute nothing.
///
/// `pdf-extract` can panic on malformed fonts or object streams, so the call
/// is isolated and a panic is reported like any other parse failure.
pub fn extract_pdf_text(content: &[u8]) -> ExtractResult<String> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(content))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf(
            "PDF parser panicked on malformed input".to_string(),
        )),
    }
}
