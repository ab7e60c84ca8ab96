use super::ExtractResult;

/// Strict UTF-8 decode. Invalid sequences fail the whole document.
///
/// `\r\n` and lone `\r` line endings are normalised to `\n`.
pub fn extract_plain_text(content: &[u8]) -> ExtractResult<String> {
    let text = String::from_utf8(content.to_vec())?;
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractError;

    #[test]
    fn test_utf8_text_is_decoded() {
        let text = extract_plain_text("Zoë Müller\nRust, SQL".as_bytes()).unwrap();
        assert_eq!(text, "Zoë Müller\nRust, SQL");
    }

    #[test]
    fn test_windows_and_classic_mac_line_endings_become_newlines() {
        let text = extract_plain_text(b"Jane Doe\r\nEngineer\rjane@x.com\r").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer\njane@x.com\n");
    }

    #[test]
    fn test_empty_content_is_empty_text() {
        assert_eq!(extract_plain_text(&[]).unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        // Latin-1 encoded "Zoë"
        let result = extract_plain_text(&[0x5A, 0x6F, 0xEB]);
        assert!(matches!(result, Err(ExtractError::Utf8(_))));
    }
}
