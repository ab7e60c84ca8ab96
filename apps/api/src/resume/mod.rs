//! Upload → text → fields.
//!
//! The pipeline is synchronous and CPU-bound; handlers run it inside
//! `tokio::task::spawn_blocking`.

pub mod handlers;

use crate::extraction::TextExtractor;
use crate::models::resume::ResumeRecord;
use crate::parsing::parse_resume_text;

/// Extracts text from one uploaded document and parses it into a record.
pub fn process_document(extractor: &TextExtractor, content: &[u8], filename: &str) -> ResumeRecord {
    let text = extractor.extract(content, filename);
    parse_resume_text(&text)
}
