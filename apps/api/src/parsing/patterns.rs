use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose email shape: word/dot/hyphen characters on both sides of `@`.
    static ref RE_EMAIL: Regex = Regex::new(r"[\w.-]+@[\w.-]+").unwrap();

    /// Loose phone shape: optional `+CC`, optional `(AAA)`, then 3-3-4 digit
    /// groups with optional space, dot or hyphen separators.
    static ref RE_PHONE: Regex =
        Regex::new(r"(\+\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}").unwrap();
}

/// First email-like token anywhere in the text.
pub fn find_email(text: &str) -> Option<String> {
    RE_EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-like token anywhere in the text.
pub fn find_phone(text: &str) -> Option<String> {
    RE_PHONE.find(text).map(|m| m.as_str().to_string())
}

/// First non-blank line, trimmed. Whatever it contains is taken as the name.
pub fn find_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}
