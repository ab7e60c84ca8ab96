use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::{ExtractError, ExtractResult};

/// Text of every top-level body paragraph, one paragraph per line.
///
/// Empty paragraphs are kept as empty lines. Table content is not part of the
/// paragraph sequence and is skipped.
pub fn extract_docx_text(content: &[u8]) -> ExtractResult<String> {
    let docx = docx_rs::read_docx(content)
        .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(p: &Paragraph) -> String {
    let mut text = String::new();
    for child in &p.children {
        push_paragraph_child(child, &mut text);
    }
    text
}

fn push_paragraph_child(child: &ParagraphChild, text: &mut String) {
    match child {
        ParagraphChild::Run(r) => {
            for run_child in &r.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
        // Hyperlink children are ParagraphChild again
        ParagraphChild::Hyperlink(h) => {
            for nested in &h.children {
                push_paragraph_child(nested, text);
            }
        }
        _ => {}
    }
}
