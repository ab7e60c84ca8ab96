//! Field heuristics — pulls candidate resume fields out of plain text.
//!
//! Each field is computed independently from the full text. Nothing here can
//! fail: a pattern that does not match leaves the field at its default.

pub mod patterns;
pub mod skills;

use crate::models::resume::ResumeRecord;

/// Runs every field heuristic over `text` and assembles a fresh record.
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    ResumeRecord {
        name: patterns::find_name(text).unwrap_or_default(),
        email: patterns::find_email(text).unwrap_or_default(),
        phone: patterns::find_phone(text).unwrap_or_default(),
        skills: skills::find_skills(text),
        education: Vec::new(),
        experience: Vec::new(),
    }
}
